use std::{str::FromStr, sync::LazyLock};

use chrono::{NaiveDate, NaiveDateTime};
use fractic_server_error::ServerError;
use regex::Regex;
use rust_decimal::Decimal;
use serde_derive::Serialize;

use crate::errors::InvalidReservationId;

static RESERVATION_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2,5}-\d{4}-\d{3,}$").expect("hardcoded regex should be valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ReservationId(pub(crate) String);

/// Channel through which the reservation was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum BookingMode {
    Direct,
    Agent,
    Company,
    #[serde(rename = "OTA")]
    Ota,
    #[serde(rename = "Access Rooms")]
    AccessRooms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    #[serde(rename = "Checked In")]
    CheckedIn,
    #[serde(rename = "Checked Out")]
    CheckedOut,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guest {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occupancy {
    pub adults: u32,
    pub children: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub guest: Guest,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_type: String,
    pub rooms: u32,
    pub occupancy: Occupancy,
    /// Per room, per night.
    pub rate: Decimal,
    pub mode: BookingMode,
    pub status: BookingStatus,
    pub created_at: NaiveDateTime,
    pub verified: bool,
}

/// Input for a reservation that has not been assigned an id yet.
#[derive(Debug, Clone)]
pub struct ReservationDraft {
    pub guest: Guest,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_type: String,
    pub rooms: u32,
    pub occupancy: Occupancy,
    pub rate: Decimal,
    pub mode: BookingMode,
}

// --

impl ReservationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn year(&self) -> Option<i32> {
        self.0.split('-').nth(1).and_then(|y| y.parse().ok())
    }

    pub(crate) fn sequence(&self) -> Option<u32> {
        self.0.rsplit('-').next().and_then(|s| s.parse().ok())
    }
}

impl FromStr for ReservationId {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !RESERVATION_ID_PATTERN.is_match(trimmed) {
            return Err(InvalidReservationId::new(s));
        }
        Ok(ReservationId(trimmed.to_string()))
    }
}

impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl BookingMode {
    pub const ALL: [BookingMode; 5] = [
        BookingMode::Direct,
        BookingMode::Agent,
        BookingMode::Company,
        BookingMode::Ota,
        BookingMode::AccessRooms,
    ];
}

impl Reservation {
    pub fn nights(&self) -> u32 {
        (self.check_out - self.check_in).num_days().max(0) as u32
    }

    /// Rate x rooms x nights.
    pub fn total(&self) -> Decimal {
        self.rate * Decimal::from(self.rooms) * Decimal::from(self.nights())
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }

    /// Whether the guest occupies the room on the given night.
    pub fn occupies(&self, night: NaiveDate) -> bool {
        !self.is_cancelled() && self.check_in <= night && night < self.check_out
    }
}
