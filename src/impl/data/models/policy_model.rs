use std::collections::BTreeMap;

use fractic_server_error::ServerError;
use rust_decimal::{prelude::FromPrimitive as _, Decimal};

use crate::{
    entities::{Policy, SettlementPolicy, TaxPolicy},
    errors::InvalidPolicy,
};

/// RON shape of the policy file. Every field is optional; missing fields fall
/// back to the standard policy.
#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default)]
pub(crate) struct PolicyModel {
    settlement: SettlementPolicyModel,
    tax: TaxPolicyModel,
    inventory: BTreeMap<String, u32>,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(default)]
struct SettlementPolicyModel {
    commission: CommissionModel,
    advance_split: f64,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(default)]
struct CommissionModel {
    direct: f64,
    agent: f64,
    company: f64,
    ota: f64,
    access_rooms: f64,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(default)]
struct TaxPolicyModel {
    inter_state: bool,
    room_threshold: f64,
    room_low_rate: f64,
    room_high_rate: f64,
    food_rate: f64,
    service_rate: f64,
}

fn decimal(name: &str, value: f64) -> Result<Decimal, ServerError> {
    Decimal::from_f64(value)
        .map(|d| d.normalize())
        .ok_or_else(|| InvalidPolicy::new(&format!("{} is not a finite number", name)))
}

impl Default for SettlementPolicyModel {
    fn default() -> Self {
        Self {
            commission: CommissionModel::default(),
            advance_split: 30.0,
        }
    }
}

impl Default for CommissionModel {
    fn default() -> Self {
        Self {
            direct: 0.0,
            agent: 10.0,
            company: 10.0,
            ota: 10.0,
            access_rooms: 10.0,
        }
    }
}

impl Default for TaxPolicyModel {
    fn default() -> Self {
        Self {
            inter_state: false,
            room_threshold: 7500.0,
            room_low_rate: 12.0,
            room_high_rate: 18.0,
            food_rate: 5.0,
            service_rate: 18.0,
        }
    }
}

impl TryFrom<PolicyModel> for Policy {
    type Error = ServerError;

    fn try_from(model: PolicyModel) -> Result<Self, Self::Error> {
        let SettlementPolicyModel {
            commission,
            advance_split,
        } = model.settlement;
        let tax = model.tax;
        Ok(Policy {
            settlement: SettlementPolicy {
                direct_commission: decimal("direct commission", commission.direct)?,
                agent_commission: decimal("agent commission", commission.agent)?,
                company_commission: decimal("company commission", commission.company)?,
                ota_commission: decimal("OTA commission", commission.ota)?,
                access_rooms_commission: decimal(
                    "access rooms commission",
                    commission.access_rooms,
                )?,
                advance_split: decimal("advance split", advance_split)?,
            },
            tax: TaxPolicy {
                inter_state: tax.inter_state,
                room_threshold: decimal("room threshold", tax.room_threshold)?,
                room_low_rate: decimal("room low rate", tax.room_low_rate)?,
                room_high_rate: decimal("room high rate", tax.room_high_rate)?,
                food_rate: decimal("food rate", tax.food_rate)?,
                service_rate: decimal("service rate", tax.service_rate)?,
            },
            inventory: model.inventory,
        })
    }
}
