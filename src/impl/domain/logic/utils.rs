use rust_decimal::{Decimal, RoundingStrategy};

/// Round to paise, half away from zero.
pub(crate) fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `amount` x `rate` percent, rounded to paise.
pub(crate) fn percent_of(amount: Decimal, rate: Decimal) -> Decimal {
    round_money(amount * rate / Decimal::ONE_HUNDRED)
}
