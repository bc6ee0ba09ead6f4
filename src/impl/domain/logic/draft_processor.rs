use chrono::{Datelike as _, NaiveDateTime};
use fractic_server_error::ServerError;
use rust_decimal::Decimal;

use crate::{
    entities::{
        BookingStatus, Guest, LodgingRecords, Payment, PaymentDraft, PaymentId, PaymentType,
        Reservation, ReservationDraft, ReservationId,
    },
    errors::{IdSequenceExhausted, InvalidPaymentAmount, RefundExceedsPaid, ReservationNotFound},
};

use super::{derivation::paid, records_validator::validate_reservation};

const RESERVATION_PREFIX: &str = "RES";
const RECEIPT_PREFIX: &str = "RCP";

/// One past the highest sequence in use, or 1 for a fresh year.
fn next_sequence(
    used: impl Iterator<Item = u32>,
    prefix: &str,
    year: i32,
) -> Result<u32, ServerError> {
    used.max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| IdSequenceExhausted::new(prefix, &year))
}

fn next_reservation_id(records: &LodgingRecords, year: i32) -> Result<ReservationId, ServerError> {
    let next = next_sequence(
        records
            .reservations
            .iter()
            .filter(|r| r.id.as_str().starts_with(RESERVATION_PREFIX) && r.id.year() == Some(year))
            .filter_map(|r| r.id.sequence()),
        RESERVATION_PREFIX,
        year,
    )?;
    Ok(ReservationId(format!("{}-{}-{:03}", RESERVATION_PREFIX, year, next)))
}

fn next_payment_id(records: &LodgingRecords, year: i32) -> Result<PaymentId, ServerError> {
    let next = next_sequence(
        records
            .payments
            .iter()
            .filter(|p| p.id.as_str().starts_with(RECEIPT_PREFIX))
            .filter_map(|p| p.id.sequence_for_year(year)),
        RECEIPT_PREFIX,
        year,
    )?;
    Ok(PaymentId(format!("{}-{}-{:03}", RECEIPT_PREFIX, year, next)))
}

pub(crate) struct DraftProcessor<'a> {
    records: &'a mut LodgingRecords,
}

impl<'a> DraftProcessor<'a> {
    pub(crate) fn new(records: &'a mut LodgingRecords) -> Self {
        Self { records }
    }

    /// Validates the draft, assigns the next id for the check-in year and
    /// appends the reservation as Pending.
    pub(crate) fn create_reservation(
        self,
        draft: ReservationDraft,
        created_at: NaiveDateTime,
    ) -> Result<&'a Reservation, ServerError> {
        let records = self.records;
        let ReservationDraft {
            guest,
            check_in,
            check_out,
            room_type,
            rooms,
            occupancy,
            rate,
            mode,
        } = draft;
        let reservation = Reservation {
            id: next_reservation_id(records, check_in.year())?,
            guest: Guest {
                name: guest.name.trim().to_string(),
                phone: guest.phone.filter(|s| !s.trim().is_empty()),
                email: guest.email.filter(|s| !s.trim().is_empty()),
            },
            check_in,
            check_out,
            room_type: room_type.trim().to_string(),
            rooms,
            occupancy,
            rate,
            mode,
            status: BookingStatus::Pending,
            created_at,
            verified: false,
        };
        validate_reservation(&reservation)?;
        let index = records.reservations.len();
        records.reservations.push(reservation);
        Ok(&records.reservations[index])
    }

    /// Records a receipt against an existing reservation. Refunds may not take
    /// the net amount received below zero.
    pub(crate) fn record_payment(self, draft: PaymentDraft) -> Result<&'a Payment, ServerError> {
        let records = self.records;
        if draft.amount <= Decimal::ZERO {
            return Err(InvalidPaymentAmount::new(&draft.amount.to_string()));
        }
        if records.reservation(&draft.reservation_id).is_none() {
            return Err(ReservationNotFound::new(draft.reservation_id.as_str()));
        }
        if draft.kind == PaymentType::Refund {
            let received = paid(
                records
                    .payments
                    .iter()
                    .filter(|p| p.reservation_id == draft.reservation_id),
            );
            if draft.amount > received {
                return Err(RefundExceedsPaid::new(draft.reservation_id.as_str()));
            }
        }
        let payment = Payment {
            id: next_payment_id(records, draft.date.year())?,
            reservation_id: draft.reservation_id,
            kind: draft.kind,
            amount: draft.amount,
            mode: draft.mode,
            payer: draft.payer.trim().to_string(),
            reference: draft.reference.filter(|s| !s.trim().is_empty()),
            date: draft.date,
            remarks: draft.remarks.filter(|s| !s.trim().is_empty()),
        };
        let index = records.payments.len();
        records.payments.push(payment);
        Ok(&records.payments[index])
    }
}
