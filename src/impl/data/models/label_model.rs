use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::{
    entities::{BookingMode, BookingStatus, ChargeCategory, PaymentMode, PaymentType},
    errors::UnknownLabel,
};

/// Lowercase with everything but letters and digits removed, so "Access
/// Rooms", "access-rooms" and "ACCESS_ROOMS" compare equal.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for BookingMode {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "direct" | "walkin" => Ok(BookingMode::Direct),
            "agent" | "travelagent" => Ok(BookingMode::Agent),
            "company" | "corporate" => Ok(BookingMode::Company),
            "ota" | "onlinetravelagency" => Ok(BookingMode::Ota),
            "accessrooms" => Ok(BookingMode::AccessRooms),
            _ => Err(UnknownLabel::new("booking mode", s)),
        }
    }
}

impl FromStr for BookingStatus {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "pending" | "tentative" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "checkedin" => Ok(BookingStatus::CheckedIn),
            "checkedout" => Ok(BookingStatus::CheckedOut),
            "cancelled" | "canceled" => Ok(BookingStatus::Cancelled),
            _ => Err(UnknownLabel::new("booking status", s)),
        }
    }
}

impl FromStr for PaymentType {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "advance" => Ok(PaymentType::Advance),
            "balance" => Ok(PaymentType::Balance),
            "full" | "fullpayment" => Ok(PaymentType::Full),
            "refund" => Ok(PaymentType::Refund),
            _ => Err(UnknownLabel::new("payment type", s)),
        }
    }
}

impl FromStr for PaymentMode {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "cash" => Ok(PaymentMode::Cash),
            "card" | "creditcard" | "debitcard" => Ok(PaymentMode::Card),
            "upi" => Ok(PaymentMode::Upi),
            "bank" | "banktransfer" | "neft" | "rtgs" => Ok(PaymentMode::BankTransfer),
            "online" => Ok(PaymentMode::Online),
            _ => Err(UnknownLabel::new("payment mode", s)),
        }
    }
}

impl FromStr for ChargeCategory {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "room" | "roomcharges" => Ok(ChargeCategory::Room),
            "fb" | "foodbeverage" | "foodandbeverage" | "food" => {
                Ok(ChargeCategory::FoodAndBeverage)
            }
            "service" | "services" | "additionalservices" => Ok(ChargeCategory::Service),
            _ => Err(UnknownLabel::new("charge category", s)),
        }
    }
}

/// Yes/no cell. Empty means no.
#[derive(Debug)]
pub(crate) struct FlagModel(pub bool);
impl FromStr for FlagModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "" | "no" | "n" | "false" | "0" => Ok(FlagModel(false)),
            "yes" | "y" | "true" | "1" | "verified" => Ok(FlagModel(true)),
            _ => Err(UnknownLabel::new("flag", s)),
        }
    }
}
