use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_derive::Serialize;

use super::{
    folio::Folio,
    payment::Payment,
    reservation::{BookingMode, BookingStatus, Reservation, ReservationId},
    settlement::{SettlementEntry, SettlementReport},
    status::PaymentStatus,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRow {
    pub reservation_id: ReservationId,
    pub guest_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: u32,
    pub room_type: String,
    pub rooms: u32,
    pub mode: BookingMode,
    pub booking_status: BookingStatus,
    pub total: Decimal,
    pub paid: Decimal,
    pub pending: Decimal,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptRow {
    pub reservation_id: ReservationId,
    pub guest_name: String,
    pub total: Decimal,
    pub paid: Decimal,
    pub pending: Decimal,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptDetail {
    pub reservation: Reservation,
    pub payments: Vec<Payment>,
    pub total: Decimal,
    pub advance: Decimal,
    pub paid: Decimal,
    pub pending: Decimal,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomOccupancy {
    pub booked: u32,
    /// Inventory less booked; negative when overbooked. None when the room
    /// type has no configured inventory.
    pub available: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancyNight {
    pub date: NaiveDate,
    pub rooms: BTreeMap<String, RoomOccupancy>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancyCalendar {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub nights: Vec<OccupancyNight>,
}

/// Data bound to a routed screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", content = "data")]
pub enum View {
    Bookings(Vec<BookingRow>),
    BookingDetail(ReceiptDetail),
    Receipts(Vec<ReceiptRow>),
    ReceiptDetail(ReceiptDetail),
    SettlementPayment(Vec<SettlementEntry>),
    SettlementReports(SettlementReport),
    FinalBill(Folio),
    Calendar(OccupancyCalendar),
}
