use std::collections::BTreeMap;

use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    entities::{OccupancyCalendar, OccupancyNight, Reservation, RoomOccupancy},
    errors::InvalidDateRange,
};

pub(crate) struct OccupancyProcessor<'a> {
    inventory: &'a BTreeMap<String, u32>,
}

impl<'a> OccupancyProcessor<'a> {
    pub(crate) fn new(inventory: &'a BTreeMap<String, u32>) -> Self {
        Self { inventory }
    }

    /// Rooms booked per room type for every night in `from..=to`. Room types
    /// with configured inventory always appear, even when nothing is booked.
    pub(crate) fn process(
        &self,
        reservations: &[Reservation],
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<OccupancyCalendar, ServerError> {
        if from > to {
            return Err(InvalidDateRange::new(&from, &to));
        }
        let nights = from
            .iter_days()
            .take_while(|d| *d <= to)
            .map(|date| {
                let mut booked: BTreeMap<String, u32> = self
                    .inventory
                    .keys()
                    .map(|room_type| (room_type.clone(), 0))
                    .collect();
                for r in reservations.iter().filter(|r| r.occupies(date)) {
                    *booked.entry(r.room_type.clone()).or_default() += r.rooms;
                }
                let rooms = booked
                    .into_iter()
                    .map(|(room_type, booked)| {
                        let available = self
                            .inventory
                            .get(&room_type)
                            .map(|total| i64::from(*total) - i64::from(booked));
                        (room_type, RoomOccupancy { booked, available })
                    })
                    .collect();
                OccupancyNight { date, rooms }
            })
            .collect();
        Ok(OccupancyCalendar { from, to, nights })
    }
}

/// Smallest range covering every non-cancelled stay, or None without stays.
pub(crate) fn stay_span(reservations: &[Reservation]) -> Option<(NaiveDate, NaiveDate)> {
    let active = reservations.iter().filter(|r| !r.is_cancelled());
    let from = active.clone().map(|r| r.check_in).min()?;
    let last_night = active.map(|r| r.check_out.pred_opt().unwrap_or(r.check_out)).max()?;
    Some((from, last_night.max(from)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::entities::BookingStatus;

    use super::super::test_fixtures::reservation;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_overbooking_shows_negative_availability() {
        let inventory = BTreeMap::from([("Deluxe".to_string(), 1)]);
        let reservations = vec![
            reservation("RES-2025-001", "2025-01-10", "2025-01-12", 1, dec!(2500)),
            reservation("RES-2025-002", "2025-01-11", "2025-01-12", 1, dec!(2500)),
        ];
        let calendar = OccupancyProcessor::new(&inventory)
            .process(&reservations, day("2025-01-10"), day("2025-01-12"))
            .unwrap();
        let deluxe: Vec<_> = calendar
            .nights
            .iter()
            .map(|n| (n.rooms["Deluxe"].booked, n.rooms["Deluxe"].available))
            .collect();
        // Check-out day is not a booked night.
        assert_eq!(deluxe, vec![(1, Some(0)), (2, Some(-1)), (0, Some(1))]);
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let inventory = BTreeMap::new();
        assert!(OccupancyProcessor::new(&inventory)
            .process(&[], day("2025-01-12"), day("2025-01-10"))
            .is_err());
    }

    #[test]
    fn test_stay_span_ignores_cancelled() {
        let mut cancelled = reservation("RES-2025-002", "2025-01-01", "2025-01-30", 1, dec!(2500));
        cancelled.status = BookingStatus::Cancelled;
        let reservations = vec![
            cancelled,
            reservation("RES-2025-001", "2025-01-10", "2025-01-13", 1, dec!(2500)),
        ];
        assert_eq!(
            stay_span(&reservations),
            Some((day("2025-01-10"), day("2025-01-12")))
        );
        assert_eq!(stay_span(&reservations[..1]), None);
    }
}
