use chrono::{NaiveDate, NaiveDateTime};
use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};
use rust_decimal::{prelude::ToPrimitive as _, Decimal, RoundingStrategy};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, INR = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Format cash amount with a leading currency symbol, the currency's number
/// of decimal places and Indian digit grouping (lakh/crore, i.e.
/// ₹1,23,456.00), regardless of the user's locale. Negative amounts are
/// prefixed with '-'.
pub fn format_amount(amount: Decimal, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let rounded = amount
        .abs()
        .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    let integer_part = rounded
        .trunc()
        .to_i128()
        .unwrap_or_default()
        .to_formatted_string(&Locale::en_IN);
    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    if decimal_places == 0 {
        return format!("{}{}{}", sign, currency.symbol(), integer_part);
    }
    let width = decimal_places as usize;
    let fractional_part = format!("{:.width$}", rounded.fract())
        .split('.')
        .nth(1)
        .map(|f| f.to_string())
        .unwrap_or_default();
    format!(
        "{}{}{}.{:0<width$}",
        sign,
        currency.symbol(),
        integer_part,
        fractional_part,
    )
}

/// Rupee amount as shown throughout the back office.
pub fn format_inr(amount: Decimal) -> String {
    format_amount(amount, Currency::INR)
}

/// Short date, e.g. "15 Jan 2025".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// e.g. "02 Jan 2025, 10:00".
pub fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format("%d %b %Y, %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_inr(dec!(15000)), "₹15,000.00");
        assert_eq!(format_inr(dec!(123456.7)), "₹1,23,456.70");
        assert_eq!(format_inr(dec!(12345678.905)), "₹1,23,45,678.91");
        assert_eq!(format_inr(dec!(999)), "₹999.00");
    }

    #[test]
    fn test_negative_and_zero() {
        assert_eq!(format_inr(dec!(-2500.5)), "-₹2,500.50");
        assert_eq!(format_inr(dec!(0)), "₹0.00");
        assert_eq!(format_inr(dec!(-0.001)), "₹0.00");
    }

    #[test]
    fn test_zero_decimal_currency() {
        let s = format_amount(dec!(1500.6), Currency::JPY);
        assert!(s.ends_with("1,501"));
        assert!(!s.contains('.'));
    }

    #[test]
    fn test_dates() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_date(d), "05 Jan 2025");
        let dt = d.and_hms_opt(9, 30, 0).unwrap();
        assert_eq!(format_datetime(dt), "05 Jan 2025, 09:30");
    }
}
