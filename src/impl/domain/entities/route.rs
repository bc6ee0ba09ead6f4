use super::reservation::ReservationId;

/// Screens reachable by path. Detail routes carry the reservation they show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Bookings,
    BookingDetail(ReservationId),
    Receipts,
    ReceiptDetail(ReservationId),
    SettlementPayment,
    SettlementReports,
    FinalBill(ReservationId),
    Calendar,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Bookings => "/bookings".to_string(),
            Route::BookingDetail(id) => format!("/bookings/{}", id),
            Route::Receipts => "/receipt".to_string(),
            Route::ReceiptDetail(id) => format!("/receipt/{}", id),
            Route::SettlementPayment => "/settlement/payment".to_string(),
            Route::SettlementReports => "/settlement/reports".to_string(),
            Route::FinalBill(id) => format!("/final-bill/{}", id),
            Route::Calendar => "/calendar".to_string(),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
