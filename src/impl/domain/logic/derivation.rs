use rust_decimal::Decimal;

use crate::entities::{
    LodgingRecords, Payment, PaymentStatus, PaymentType, Reservation, SettlementStatus,
};

/// Net amount received: every receipt less refunds.
pub fn paid<'a>(payments: impl IntoIterator<Item = &'a Payment>) -> Decimal {
    payments.into_iter().map(Payment::signed_amount).sum()
}

/// Amount received as advance payments.
pub fn advance<'a>(payments: impl IntoIterator<Item = &'a Payment>) -> Decimal {
    payments
        .into_iter()
        .filter(|p| p.kind == PaymentType::Advance)
        .map(|p| p.amount)
        .sum()
}

/// The one place outstanding amounts are computed.
pub fn balance(total: Decimal, advance: Decimal, other_payments: Decimal) -> Decimal {
    total - advance - other_payments
}

impl PaymentStatus {
    /// Paid once the amount received covers the total (checked first, so a
    /// zero total is Paid), Partial while something has been received, and
    /// Pending otherwise.
    pub fn derive(total: Decimal, paid: Decimal) -> Self {
        if paid >= total {
            PaymentStatus::Paid
        } else if paid > Decimal::ZERO {
            PaymentStatus::Partial
        } else {
            PaymentStatus::Pending
        }
    }
}

impl From<PaymentStatus> for SettlementStatus {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Paid => SettlementStatus::Settled,
            PaymentStatus::Partial => SettlementStatus::PartiallySettled,
            PaymentStatus::Pending => SettlementStatus::Pending,
        }
    }
}

/// A reservation together with its payments and every amount derived from
/// them. All listing views are built from these.
#[derive(Debug, Clone)]
pub(crate) struct StayAccount<'a> {
    pub(crate) reservation: &'a Reservation,
    pub(crate) payments: Vec<&'a Payment>,
    pub(crate) total: Decimal,
    pub(crate) advance: Decimal,
    pub(crate) paid: Decimal,
    pub(crate) pending: Decimal,
    pub(crate) status: PaymentStatus,
}

impl<'a> StayAccount<'a> {
    pub(crate) fn new(records: &'a LodgingRecords, reservation: &'a Reservation) -> Self {
        let payments = records.payments_for(&reservation.id);
        // A cancelled stay has no receivable; anything still held is owed back.
        let total = if reservation.is_cancelled() {
            Decimal::ZERO
        } else {
            reservation.total()
        };
        let advance = advance(payments.iter().copied());
        let paid = paid(payments.iter().copied());
        Self {
            reservation,
            total,
            advance,
            paid,
            pending: balance(total, advance, paid - advance),
            status: PaymentStatus::derive(total, paid),
            payments,
        }
    }

    /// Accounts for every reservation, in record order.
    pub(crate) fn all(records: &'a LodgingRecords) -> Vec<Self> {
        records
            .reservations
            .iter()
            .map(|r| Self::new(records, r))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::entities::{PaymentId, PaymentMode};

    fn payment(kind: PaymentType, amount: Decimal) -> Payment {
        Payment {
            id: PaymentId("RCP-2025-001".into()),
            reservation_id: "RES-2025-001".parse().unwrap(),
            kind,
            amount,
            mode: PaymentMode::Cash,
            payer: "John Doe".into(),
            reference: None,
            date: "2025-01-03".parse().unwrap(),
            remarks: None,
        }
    }

    #[test]
    fn test_payment_status_derivation() {
        assert_eq!(PaymentStatus::derive(dec!(15000), dec!(0)), PaymentStatus::Pending);
        assert_eq!(PaymentStatus::derive(dec!(15000), dec!(5000)), PaymentStatus::Partial);
        assert_eq!(PaymentStatus::derive(dec!(15000), dec!(15000)), PaymentStatus::Paid);
        assert_eq!(PaymentStatus::derive(dec!(15000), dec!(16000)), PaymentStatus::Paid);
    }

    #[test]
    fn test_zero_total_is_paid() {
        assert_eq!(PaymentStatus::derive(dec!(0), dec!(0)), PaymentStatus::Paid);
    }

    #[test]
    fn test_refunds_reduce_paid() {
        let payments = vec![
            payment(PaymentType::Advance, dec!(5000)),
            payment(PaymentType::Balance, dec!(10000)),
            payment(PaymentType::Refund, dec!(2000)),
        ];
        assert_eq!(paid(&payments), dec!(13000));
        assert_eq!(advance(&payments), dec!(5000));
        assert_eq!(balance(dec!(15000), dec!(5000), dec!(8000)), dec!(2000));
    }

    #[test]
    fn test_cancelled_stay_owes_nothing() {
        use crate::entities::BookingStatus;

        use super::super::test_fixtures::{payment as receipt, reservation};

        let mut cancelled = reservation("RES-2025-007", "2025-01-14", "2025-01-16", 2, dec!(4500));
        cancelled.status = BookingStatus::Cancelled;
        let mut records = LodgingRecords {
            reservations: vec![cancelled],
            payments: vec![receipt(
                "RCP-2025-007",
                "RES-2025-007",
                PaymentType::Advance,
                dec!(5400),
            )],
            charges: vec![],
        };

        // Advance still held is owed back to the guest.
        let account = StayAccount::new(&records, &records.reservations[0]);
        assert_eq!(account.total, dec!(0));
        assert_eq!(account.pending, dec!(-5400));
        assert_eq!(account.status, PaymentStatus::Paid);

        records.payments.push(receipt(
            "RCP-2025-008",
            "RES-2025-007",
            PaymentType::Refund,
            dec!(5400),
        ));
        let account = StayAccount::new(&records, &records.reservations[0]);
        assert_eq!(account.paid, dec!(0));
        assert_eq!(account.pending, dec!(0));
        assert_eq!(account.status, PaymentStatus::Paid);
    }

    #[test]
    fn test_settlement_status_follows_payment_status() {
        assert_eq!(
            SettlementStatus::from(PaymentStatus::Partial),
            SettlementStatus::PartiallySettled
        );
        assert_eq!(SettlementStatus::from(PaymentStatus::Paid), SettlementStatus::Settled);
    }
}
