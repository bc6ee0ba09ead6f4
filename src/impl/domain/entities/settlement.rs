use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_derive::Serialize;

use super::reservation::{BookingMode, ReservationId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SettlementStatus {
    Pending,
    #[serde(rename = "Partially Settled")]
    PartiallySettled,
    Settled,
}

/// Reconciliation line for a single (non-cancelled) booking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettlementEntry {
    pub reservation_id: ReservationId,
    pub guest_name: String,
    pub mode: BookingMode,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total: Decimal,
    pub commission_rate: Decimal,
    pub commission: Decimal,
    /// Total less commission.
    pub net_payable: Decimal,
    pub expected_advance: Decimal,
    pub advance: Decimal,
    pub paid: Decimal,
    pub balance: Decimal,
    pub verified: bool,
    pub status: SettlementStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SettlementTotals {
    pub bookings: usize,
    pub total: Decimal,
    pub commission: Decimal,
    pub net_payable: Decimal,
    pub paid: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettlementReportRow {
    pub mode: BookingMode,
    pub totals: SettlementTotals,
}

/// Settlement figures grouped by booking mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettlementReport {
    pub rows: Vec<SettlementReportRow>,
    pub grand_total: SettlementTotals,
}

// --

impl SettlementTotals {
    pub(crate) fn add(&mut self, entry: &SettlementEntry) {
        self.bookings += 1;
        self.total += entry.total;
        self.commission += entry.commission;
        self.net_payable += entry.net_payable;
        self.paid += entry.paid;
        self.balance += entry.balance;
    }
}
