use std::cmp::Ordering;

use crate::entities::{SortDirection, SortKey, SortState};

use super::derivation::StayAccount;

fn compare(a: &StayAccount<'_>, b: &StayAccount<'_>, key: SortKey) -> Ordering {
    let (ra, rb) = (a.reservation, b.reservation);
    match key {
        SortKey::ReservationId => ra.id.cmp(&rb.id),
        SortKey::Guest => ra
            .guest
            .name
            .to_lowercase()
            .cmp(&rb.guest.name.to_lowercase()),
        SortKey::CheckIn => ra.check_in.cmp(&rb.check_in),
        SortKey::CheckOut => ra.check_out.cmp(&rb.check_out),
        SortKey::Total => a.total.cmp(&b.total),
        SortKey::Pending => a.pending.cmp(&b.pending),
        SortKey::CreatedAt => ra.created_at.cmp(&rb.created_at),
    }
}

/// Orders accounts in place. `sort_by` is stable, so equal keys keep record
/// order in both directions, and `Unsorted` leaves record order untouched.
pub(crate) fn sort_accounts(accounts: &mut [StayAccount<'_>], state: SortState) {
    if let SortState::Sorted(key, direction) = state {
        accounts.sort_by(|a, b| match direction {
            SortDirection::Ascending => compare(a, b, key),
            SortDirection::Descending => compare(b, a, key),
        });
    }
}
