use fractic_server_error::ServerError;

use crate::util::StayLedgerUtil;

/// A small houseboat property in January 2025: eight bookings across every
/// booking mode, including one cancellation and one stay spanning the new year.
pub const DEMO_RESERVATIONS_CSV: &str = include_str!("demo/reservations.csv");
pub const DEMO_PAYMENTS_CSV: &str = include_str!("demo/payments.csv");
pub const DEMO_CHARGES_CSV: &str = include_str!("demo/charges.csv");
pub const DEMO_POLICY_RON: &str = include_str!("demo/policy.ron");

/// Ledger over the demo records, with the demo room inventory.
pub async fn demo_ledger() -> Result<StayLedgerUtil, ServerError> {
    StayLedgerUtil::from_string(DEMO_RESERVATIONS_CSV, DEMO_PAYMENTS_CSV, DEMO_CHARGES_CSV)
        .await?
        .with_policy_ron(DEMO_POLICY_RON)
}
