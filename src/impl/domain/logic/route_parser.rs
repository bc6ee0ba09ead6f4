use std::{str::FromStr as _, sync::LazyLock};

use fractic_server_error::ServerError;
use regex::Regex;

use crate::{
    entities::{ReservationId, Route},
    errors::RouteNotFound,
};

static DETAIL_ROUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(bookings|receipt|final-bill)/([^/]+)$").expect("hardcoded regex should be valid")
});

impl Route {
    /// Resolves a path to a screen. A trailing slash is ignored; an unknown
    /// path is an error and is logged.
    pub fn parse(path: &str) -> Result<Route, ServerError> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        let route = match normalized {
            "/bookings" => Some(Route::Bookings),
            "/receipt" => Some(Route::Receipts),
            "/settlement/payment" => Some(Route::SettlementPayment),
            "/settlement/reports" => Some(Route::SettlementReports),
            "/calendar" => Some(Route::Calendar),
            _ => match DETAIL_ROUTE.captures(normalized) {
                Some(caps) => {
                    let id = ReservationId::from_str(&caps[2])?;
                    match &caps[1] {
                        "bookings" => Some(Route::BookingDetail(id)),
                        "receipt" => Some(Route::ReceiptDetail(id)),
                        _ => Some(Route::FinalBill(id)),
                    }
                }
                None => None,
            },
        };
        route.ok_or_else(|| {
            tracing::error!(path, "no route matches path");
            RouteNotFound::new(path)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_routes() {
        assert_eq!(Route::parse("/bookings").unwrap(), Route::Bookings);
        assert_eq!(Route::parse("/receipt/").unwrap(), Route::Receipts);
        assert_eq!(
            Route::parse("/settlement/payment").unwrap(),
            Route::SettlementPayment
        );
        assert_eq!(
            Route::parse("/settlement/reports").unwrap(),
            Route::SettlementReports
        );
    }

    #[test]
    fn test_detail_routes_carry_id() {
        let id: ReservationId = "RES-2025-001".parse().unwrap();
        assert_eq!(
            Route::parse("/bookings/RES-2025-001").unwrap(),
            Route::BookingDetail(id.clone())
        );
        assert_eq!(
            Route::parse("/receipt/RES-2025-001").unwrap(),
            Route::ReceiptDetail(id.clone())
        );
        assert_eq!(
            Route::parse("/final-bill/RES-2025-001").unwrap(),
            Route::FinalBill(id)
        );
    }

    #[test]
    fn test_path_round_trips() {
        for path in ["/bookings", "/receipt/RES-2025-004", "/calendar", "/final-bill/RES-2025-002"] {
            assert_eq!(Route::parse(path).unwrap().path(), path);
        }
    }

    #[test]
    fn test_unknown_path_and_bad_id() {
        assert!(Route::parse("/invoices").is_err());
        assert!(Route::parse("/").is_err());
        assert!(Route::parse("/bookings/RES-2025-001/edit").is_err());
        assert!(Route::parse("/bookings/not-an-id").is_err());
    }
}
