use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_derive::Serialize;

use super::{
    payment::Payment,
    reservation::{Guest, ReservationId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ChargeCategory {
    Room,
    #[serde(rename = "Food & Beverage")]
    FoodAndBeverage,
    Service,
}

/// Additional charge posted to a guest's folio (food, services, extra beds).
/// Room nights themselves are derived from the reservation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Charge {
    pub reservation_id: ReservationId,
    pub date: NaiveDate,
    pub category: ChargeCategory,
    pub description: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub discount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TaxKind {
    #[serde(rename = "CGST")]
    Cgst,
    #[serde(rename = "SGST")]
    Sgst,
    #[serde(rename = "IGST")]
    Igst,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolioLine {
    pub date: NaiveDate,
    pub category: ChargeCategory,
    pub description: String,
    /// Units billed; room-nights for the room line.
    pub quantity: u64,
    pub unit_price: Decimal,
    pub gross: Decimal,
    pub discount: Decimal,
    pub net: Decimal,
    /// Full GST rate (percent) applicable to the line.
    pub tax_rate: Decimal,
}

/// Tax collected for one GST component at one rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxLine {
    pub kind: TaxKind,
    pub rate: Decimal,
    pub taxable: Decimal,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolioSummary {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub taxable: Decimal,
    pub tax: Decimal,
    pub grand_total: Decimal,
    pub paid: Decimal,
    pub balance: Decimal,
}

/// Itemised final bill for a reservation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Folio {
    pub reservation_id: ReservationId,
    pub guest: Guest,
    pub room_type: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: u32,
    pub lines: Vec<FolioLine>,
    pub tax_lines: Vec<TaxLine>,
    pub payments: Vec<Payment>,
    pub summary: FolioSummary,
}
