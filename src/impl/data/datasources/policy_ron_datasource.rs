use fractic_server_error::ServerError;

use crate::{
    data::models::policy_model::PolicyModel,
    entities::Policy,
    errors::InvalidRon,
};

pub(crate) trait PolicyRonDatasource {
    fn from_string(&self, s: &str) -> Result<Policy, ServerError>;
}

pub(crate) struct PolicyRonDatasourceImpl;

impl PolicyRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl PolicyRonDatasource for PolicyRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Policy, ServerError> {
        let model: PolicyModel =
            ron::from_str(s).map_err(|e| InvalidRon::with_debug("Policy", &e))?;
        let policy = Policy::try_from(model)?;
        policy.validate()?;
        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::entities::BookingMode;

    #[test]
    fn test_empty_policy_is_standard_policy() {
        let policy = PolicyRonDatasourceImpl::new().from_string("()").unwrap();
        assert_eq!(policy, Policy::default());
    }

    #[test]
    fn test_partial_override() {
        let policy = PolicyRonDatasourceImpl::new()
            .from_string(
                r#"(
                    settlement: (commission: (ota: 18.5), advance_split: 25.0),
                    tax: (inter_state: true),
                    inventory: {"Deluxe": 4, "Houseboat Suite": 2},
                )"#,
            )
            .unwrap();
        assert_eq!(policy.settlement.commission_rate(BookingMode::Ota), dec!(18.5));
        assert_eq!(policy.settlement.commission_rate(BookingMode::Agent), dec!(10));
        assert_eq!(policy.settlement.advance_split, dec!(25));
        assert!(policy.tax.inter_state);
        assert_eq!(policy.tax.food_rate, dec!(5));
        assert_eq!(policy.inventory.get("Houseboat Suite"), Some(&2));
    }

    #[test]
    fn test_rate_out_of_range() {
        assert!(PolicyRonDatasourceImpl::new()
            .from_string("(tax: (food_rate: 120.0))")
            .is_err());
    }

    #[test]
    fn test_malformed_ron() {
        assert!(PolicyRonDatasourceImpl::new().from_string("(tax: ").is_err());
    }
}
