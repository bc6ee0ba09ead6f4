use serde_derive::Serialize;

use super::{
    payment::PaymentType, reservation::BookingStatus, settlement::SettlementStatus,
};

/// Payment state of a reservation, derived from its total and the amount
/// received (see `PaymentStatus::derive`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PaymentStatus {
    Pending,
    Partial,
    Paid,
}

/// Visual variant of a status badge. Every status in the crate maps to
/// exactly one tone through `Badge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BadgeTone {
    Success,
    Warning,
    Info,
    Danger,
    Neutral,
}

pub trait Badge {
    fn tone(&self) -> BadgeTone;
}

impl Badge for PaymentStatus {
    fn tone(&self) -> BadgeTone {
        match self {
            PaymentStatus::Paid => BadgeTone::Success,
            PaymentStatus::Partial => BadgeTone::Info,
            PaymentStatus::Pending => BadgeTone::Warning,
        }
    }
}

impl Badge for SettlementStatus {
    fn tone(&self) -> BadgeTone {
        match self {
            SettlementStatus::Settled => BadgeTone::Success,
            SettlementStatus::PartiallySettled => BadgeTone::Info,
            SettlementStatus::Pending => BadgeTone::Warning,
        }
    }
}

impl Badge for BookingStatus {
    fn tone(&self) -> BadgeTone {
        match self {
            BookingStatus::Confirmed | BookingStatus::CheckedIn => BadgeTone::Success,
            BookingStatus::Pending => BadgeTone::Warning,
            BookingStatus::CheckedOut => BadgeTone::Neutral,
            BookingStatus::Cancelled => BadgeTone::Danger,
        }
    }
}

impl Badge for PaymentType {
    fn tone(&self) -> BadgeTone {
        match self {
            PaymentType::Full => BadgeTone::Success,
            PaymentType::Advance => BadgeTone::Info,
            PaymentType::Balance => BadgeTone::Neutral,
            PaymentType::Refund => BadgeTone::Danger,
        }
    }
}
