use std::collections::BTreeMap;

use fractic_server_error::ServerError;
use rust_decimal::Decimal;

use crate::errors::InvalidPolicy;

use super::reservation::BookingMode;

/// Business rules shared by every settlement and billing view. All rates are
/// percentages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Policy {
    pub settlement: SettlementPolicy,
    pub tax: TaxPolicy,
    /// Rooms available per room type.
    pub inventory: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettlementPolicy {
    pub direct_commission: Decimal,
    pub agent_commission: Decimal,
    pub company_commission: Decimal,
    pub ota_commission: Decimal,
    pub access_rooms_commission: Decimal,
    /// Share of the total expected up front.
    pub advance_split: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaxPolicy {
    /// IGST instead of CGST + SGST.
    pub inter_state: bool,
    /// Per-night room tariff above which the high rate applies.
    pub room_threshold: Decimal,
    pub room_low_rate: Decimal,
    pub room_high_rate: Decimal,
    pub food_rate: Decimal,
    pub service_rate: Decimal,
}

// --

impl SettlementPolicy {
    pub fn commission_rate(&self, mode: BookingMode) -> Decimal {
        match mode {
            BookingMode::Direct => self.direct_commission,
            BookingMode::Agent => self.agent_commission,
            BookingMode::Company => self.company_commission,
            BookingMode::Ota => self.ota_commission,
            BookingMode::AccessRooms => self.access_rooms_commission,
        }
    }

    fn rates(&self) -> [(&'static str, Decimal); 6] {
        [
            ("direct commission", self.direct_commission),
            ("agent commission", self.agent_commission),
            ("company commission", self.company_commission),
            ("OTA commission", self.ota_commission),
            ("access rooms commission", self.access_rooms_commission),
            ("advance split", self.advance_split),
        ]
    }
}

impl TaxPolicy {
    fn rates(&self) -> [(&'static str, Decimal); 4] {
        [
            ("room low rate", self.room_low_rate),
            ("room high rate", self.room_high_rate),
            ("food rate", self.food_rate),
            ("service rate", self.service_rate),
        ]
    }
}

impl Policy {
    /// Every percentage must lie within 0..=100.
    pub fn validate(&self) -> Result<(), ServerError> {
        let out_of_range = self
            .settlement
            .rates()
            .into_iter()
            .chain(self.tax.rates())
            .find(|(_, rate)| *rate < Decimal::ZERO || *rate > Decimal::ONE_HUNDRED);
        match out_of_range {
            Some((name, rate)) => Err(InvalidPolicy::new(&format!(
                "{} ({}%) must be between 0 and 100",
                name, rate
            ))),
            None => Ok(()),
        }
    }
}

impl Default for SettlementPolicy {
    fn default() -> Self {
        Self {
            direct_commission: Decimal::ZERO,
            agent_commission: Decimal::TEN,
            company_commission: Decimal::TEN,
            ota_commission: Decimal::TEN,
            access_rooms_commission: Decimal::TEN,
            advance_split: Decimal::from(30),
        }
    }
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self {
            inter_state: false,
            room_threshold: Decimal::from(7500),
            room_low_rate: Decimal::from(12),
            room_high_rate: Decimal::from(18),
            food_rate: Decimal::from(5),
            service_rate: Decimal::from(18),
        }
    }
}
