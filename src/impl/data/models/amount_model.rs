use std::str::FromStr;

use fractic_server_error::ServerError;
use rust_decimal::Decimal;

use crate::errors::InvalidAmount;

/// Amount cell as entered by the front desk: thousands separators, an
/// optional rupee sign, and accounting parentheses for negatives.
#[derive(Debug)]
pub(crate) struct AmountModel(pub Decimal);
impl FromStr for AmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace([',', '₹'], "").replace("Rs.", "");
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(AmountModel(Decimal::ZERO));
        }
        let is_negative = raw.starts_with('(') && raw.ends_with(')');
        let numeric_part = raw.trim_matches(|c| c == '(' || c == ')').trim();
        let amount =
            Decimal::from_str(numeric_part).map_err(|e| InvalidAmount::with_debug(s, &e))?;
        Ok(AmountModel(if is_negative { -amount } else { amount }))
    }
}

impl From<AmountModel> for Decimal {
    fn from(model: AmountModel) -> Decimal {
        model.0
    }
}
