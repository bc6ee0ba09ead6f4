use super::{
    folio::Charge,
    payment::Payment,
    reservation::{Reservation, ReservationId},
};

/// Everything the back office knows about: reservations, receipts and the
/// extra charges posted to folios. Held in memory only.
#[derive(Debug, Clone, Default)]
pub struct LodgingRecords {
    pub reservations: Vec<Reservation>,
    pub payments: Vec<Payment>,
    pub charges: Vec<Charge>,
}

impl LodgingRecords {
    pub fn reservation(&self, id: &ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| &r.id == id)
    }

    /// Payments for a reservation, in date order (ties keep record order).
    pub fn payments_for(&self, id: &ReservationId) -> Vec<&Payment> {
        let mut v: Vec<&Payment> = self
            .payments
            .iter()
            .filter(|p| &p.reservation_id == id)
            .collect();
        v.sort_by_key(|p| p.date);
        v
    }

    pub fn charges_for(&self, id: &ReservationId) -> Vec<&Charge> {
        let mut v: Vec<&Charge> = self
            .charges
            .iter()
            .filter(|c| &c.reservation_id == id)
            .collect();
        v.sort_by_key(|c| c.date);
        v
    }
}
