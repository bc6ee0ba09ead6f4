use std::collections::HashSet;

use fractic_server_error::ServerError;
use rust_decimal::Decimal;

use crate::{
    entities::{LodgingRecords, Reservation},
    errors::{
        DuplicatePaymentId, DuplicateReservationId, InvalidGuestDetails, InvalidOccupancy,
        InvalidRate, InvalidStayDates, OrphanFolioCharge, OrphanPayment,
    },
};

/// Checks a single reservation in isolation.
pub(crate) fn validate_reservation(r: &Reservation) -> Result<(), ServerError> {
    if r.guest.name.trim().is_empty() {
        return Err(InvalidGuestDetails::new("guest name is empty"));
    }
    if r.check_out <= r.check_in {
        return Err(InvalidStayDates::new(&r.check_in, &r.check_out));
    }
    if r.rooms == 0 {
        return Err(InvalidOccupancy::new("at least one room is required"));
    }
    if r.occupancy.adults == 0 {
        return Err(InvalidOccupancy::new("at least one adult is required"));
    }
    if r.rate <= Decimal::ZERO {
        return Err(InvalidRate::new(&r.rate.to_string()));
    }
    Ok(())
}

/// Checks a freshly loaded set of records: each reservation is valid, ids
/// are unique, and every payment and charge belongs to a known reservation.
pub(crate) fn validate_records(records: &LodgingRecords) -> Result<(), ServerError> {
    let mut reservation_ids = HashSet::new();
    for r in &records.reservations {
        validate_reservation(r)?;
        if !reservation_ids.insert(&r.id) {
            return Err(DuplicateReservationId::new(r.id.as_str()));
        }
    }

    let mut payment_ids = HashSet::new();
    for p in &records.payments {
        if !payment_ids.insert(&p.id) {
            return Err(DuplicatePaymentId::new(p.id.as_str()));
        }
        if !reservation_ids.contains(&p.reservation_id) {
            return Err(OrphanPayment::new(p.id.as_str(), p.reservation_id.as_str()));
        }
    }

    if let Some(c) = records
        .charges
        .iter()
        .find(|c| !reservation_ids.contains(&c.reservation_id))
    {
        return Err(OrphanFolioCharge::new(c.reservation_id.as_str()));
    }

    Ok(())
}
