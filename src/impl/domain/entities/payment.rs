use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_derive::Serialize;

use super::reservation::ReservationId;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PaymentId(pub(crate) String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PaymentType {
    Advance,
    Balance,
    Full,
    Refund,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PaymentMode {
    Cash,
    Card,
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    Online,
}

/// A receipt recorded against a reservation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payment {
    pub id: PaymentId,
    pub reservation_id: ReservationId,
    pub kind: PaymentType,
    /// Always positive; refunds are signed by `kind`.
    pub amount: Decimal,
    pub mode: PaymentMode,
    pub payer: String,
    pub reference: Option<String>,
    pub date: NaiveDate,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PaymentDraft {
    pub reservation_id: ReservationId,
    pub kind: PaymentType,
    pub amount: Decimal,
    pub mode: PaymentMode,
    pub payer: String,
    pub reference: Option<String>,
    pub date: NaiveDate,
    pub remarks: Option<String>,
}

// --

impl PaymentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn sequence_for_year(&self, year: i32) -> Option<u32> {
        let mut parts = self.0.split('-');
        let _prefix = parts.next()?;
        let y: i32 = parts.next()?.parse().ok()?;
        if y != year {
            return None;
        }
        parts.next()?.parse().ok()
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Payment {
    /// Contribution of this payment to the amount received.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            PaymentType::Refund => -self.amount,
            _ => self.amount,
        }
    }
}
