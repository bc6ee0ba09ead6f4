use rust_decimal_macros::dec;
use stayledger::{
    entities::{
        BookingMode, BookingStatus, DateField, FilterCriteria, PaymentMode, PaymentStatus,
        ReservationId, SortDirection, SortKey, SortState,
    },
    ext::demo::demo_ledger,
};

fn id(s: &str) -> ReservationId {
    s.parse().unwrap()
}

fn date(s: &str) -> Option<chrono::NaiveDate> {
    Some(s.parse().unwrap())
}

fn ids<T>(rows: &[T], f: impl Fn(&T) -> &ReservationId) -> Vec<&str> {
    rows.iter().map(|r| f(r).as_str()).collect()
}

#[tokio::test]
async fn test_default_criteria_lists_everything_in_record_order() {
    let ledger = demo_ledger().await.unwrap();
    let rows = ledger
        .bookings(&FilterCriteria::default(), SortState::Unsorted)
        .unwrap();
    assert_eq!(
        ids(&rows, |r| &r.reservation_id),
        vec![
            "RES-2025-001",
            "RES-2025-002",
            "RES-2025-003",
            "RES-2025-004",
            "RES-2025-005",
            "RES-2025-006",
            "RES-2025-007",
            "RES-2024-118",
        ]
    );
}

#[tokio::test]
async fn test_search_by_reservation_id_returns_single_row() {
    let ledger = demo_ledger().await.unwrap();
    let rows = ledger
        .receipts(
            &FilterCriteria::default().with_query("RES-2025-001"),
            SortState::Unsorted,
        )
        .unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.guest_name, "John Doe");
    assert_eq!(row.total, dec!(15000));
    assert_eq!(row.paid, dec!(5000));
    assert_eq!(row.pending, dec!(10000));
    assert_eq!(row.status, PaymentStatus::Partial);
}

#[tokio::test]
async fn test_search_is_case_insensitive_on_guest_name() {
    let ledger = demo_ledger().await.unwrap();
    let rows = ledger
        .bookings(&FilterCriteria::default().with_query("  sHaRmA "), SortState::Unsorted)
        .unwrap();
    assert_eq!(ids(&rows, |r| &r.reservation_id), vec!["RES-2025-002"]);

    let rows = ledger
        .bookings(&FilterCriteria::default().with_query("nobody"), SortState::Unsorted)
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_access_rooms_mode_filter() {
    let ledger = demo_ledger().await.unwrap();
    let rows = ledger
        .bookings(
            &FilterCriteria::default().with_mode(BookingMode::AccessRooms),
            SortState::Unsorted,
        )
        .unwrap();
    assert_eq!(
        ids(&rows, |r| &r.reservation_id),
        vec!["RES-2025-003", "RES-2025-006"]
    );
}

#[tokio::test]
async fn test_payment_status_filter_uses_derived_status() {
    let ledger = demo_ledger().await.unwrap();
    let by_status = |status: PaymentStatus| {
        ledger
            .receipts(
                &FilterCriteria::default().with_payment_status(status),
                SortState::Unsorted,
            )
            .unwrap()
            .into_iter()
            .map(|r| r.reservation_id.to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(
        by_status(PaymentStatus::Paid),
        vec!["RES-2025-002", "RES-2025-004", "RES-2025-007", "RES-2024-118"]
    );
    assert_eq!(
        by_status(PaymentStatus::Partial),
        vec!["RES-2025-001", "RES-2025-005", "RES-2025-006"]
    );
    // The cancelled stay was refunded in full and owes nothing.
    assert_eq!(by_status(PaymentStatus::Pending), vec!["RES-2025-003"]);
}

#[tokio::test]
async fn test_criteria_combine_as_conjunction() {
    let ledger = demo_ledger().await.unwrap();
    let criteria = FilterCriteria::default()
        .with_mode(BookingMode::AccessRooms)
        .with_payment_status(PaymentStatus::Pending);
    let rows = ledger.bookings(&criteria, SortState::Unsorted).unwrap();
    assert_eq!(ids(&rows, |r| &r.reservation_id), vec!["RES-2025-003"]);

    let criteria = FilterCriteria::default()
        .with_booking_status(BookingStatus::Cancelled)
        .with_payment_mode(PaymentMode::Card);
    let rows = ledger.bookings(&criteria, SortState::Unsorted).unwrap();
    assert_eq!(ids(&rows, |r| &r.reservation_id), vec!["RES-2025-007"]);
}

#[tokio::test]
async fn test_payment_mode_matches_any_receipt() {
    let ledger = demo_ledger().await.unwrap();
    let rows = ledger
        .bookings(
            &FilterCriteria::default().with_payment_mode(PaymentMode::BankTransfer),
            SortState::Unsorted,
        )
        .unwrap();
    assert_eq!(
        ids(&rows, |r| &r.reservation_id),
        vec!["RES-2025-002", "RES-2024-118"]
    );
}

#[tokio::test]
async fn test_date_range_is_inclusive_on_chosen_field() {
    let ledger = demo_ledger().await.unwrap();
    let check_in = FilterCriteria::default().with_range(
        DateField::CheckIn,
        date("2025-01-10"),
        date("2025-01-15"),
    );
    let rows = ledger.bookings(&check_in, SortState::Unsorted).unwrap();
    assert_eq!(
        ids(&rows, |r| &r.reservation_id),
        vec![
            "RES-2025-001",
            "RES-2025-002",
            "RES-2025-003",
            "RES-2025-005",
            "RES-2025-007",
        ]
    );

    let check_out = FilterCriteria::default().with_range(
        DateField::CheckOut,
        date("2025-01-10"),
        date("2025-01-15"),
    );
    let rows = ledger.bookings(&check_out, SortState::Unsorted).unwrap();
    assert_eq!(
        ids(&rows, |r| &r.reservation_id),
        vec!["RES-2025-001", "RES-2025-002", "RES-2025-005"]
    );

    let open_ended = FilterCriteria::default().with_range(DateField::CheckIn, date("2025-01-20"), None);
    let rows = ledger.bookings(&open_ended, SortState::Unsorted).unwrap();
    assert_eq!(
        ids(&rows, |r| &r.reservation_id),
        vec!["RES-2025-004", "RES-2025-006"]
    );
}

#[tokio::test]
async fn test_inverted_range_is_rejected() {
    let ledger = demo_ledger().await.unwrap();
    let criteria = FilterCriteria::default().with_range(
        DateField::CheckIn,
        date("2025-01-20"),
        date("2025-01-10"),
    );
    assert!(ledger.bookings(&criteria, SortState::Unsorted).is_err());
}

#[tokio::test]
async fn test_sort_by_total_keeps_ties_in_record_order() {
    let ledger = demo_ledger().await.unwrap();
    let criteria = FilterCriteria::default();

    let asc = SortState::Unsorted.toggle(SortKey::Total);
    assert_eq!(asc, SortState::Sorted(SortKey::Total, SortDirection::Ascending));
    let rows = ledger.bookings(&criteria, asc).unwrap();
    assert_eq!(
        ids(&rows, |r| &r.reservation_id),
        vec![
            "RES-2025-007",
            "RES-2025-005",
            "RES-2025-003",
            "RES-2025-004",
            "RES-2025-001",
            "RES-2025-002",
            "RES-2025-006",
            "RES-2024-118",
        ]
    );

    let desc = asc.toggle(SortKey::Total);
    let rows = ledger.bookings(&criteria, desc).unwrap();
    assert_eq!(
        ids(&rows, |r| &r.reservation_id),
        vec![
            "RES-2024-118",
            "RES-2025-002",
            "RES-2025-006",
            "RES-2025-001",
            "RES-2025-003",
            "RES-2025-004",
            "RES-2025-005",
            "RES-2025-007",
        ]
    );

    let unsorted = desc.toggle(SortKey::Total);
    assert_eq!(unsorted, SortState::Unsorted);
    let rows = ledger.bookings(&criteria, unsorted).unwrap();
    assert_eq!(rows[0].reservation_id, id("RES-2025-001"));
    assert_eq!(rows[7].reservation_id, id("RES-2024-118"));
}

#[tokio::test]
async fn test_sort_by_guest_and_pending() {
    let ledger = demo_ledger().await.unwrap();
    let criteria = FilterCriteria::default().with_mode(BookingMode::Direct);
    let rows = ledger
        .bookings(&criteria, SortState::Sorted(SortKey::Guest, SortDirection::Ascending))
        .unwrap();
    assert_eq!(
        rows.iter().map(|r| r.guest_name.as_str()).collect::<Vec<_>>(),
        vec!["John Doe", "Meera Nair"]
    );

    let rows = ledger
        .receipts(
            &FilterCriteria::default(),
            SortState::Sorted(SortKey::Pending, SortDirection::Descending),
        )
        .unwrap();
    assert_eq!(rows[0].reservation_id, id("RES-2025-006"));
    assert_eq!(rows[0].pending, dec!(11200));
}

#[tokio::test]
async fn test_cancelled_booking_carries_no_receivable() {
    let ledger = demo_ledger().await.unwrap();
    let detail = ledger.receipt(&id("RES-2025-007")).unwrap();
    assert_eq!(detail.total, dec!(0));
    assert_eq!(detail.advance, dec!(5400));
    assert_eq!(detail.paid, dec!(0));
    assert_eq!(detail.pending, dec!(0));
    assert_eq!(detail.status, PaymentStatus::Paid);

    let rows = ledger
        .bookings(
            &FilterCriteria::default().with_query("RES-2025-007"),
            SortState::Unsorted,
        )
        .unwrap();
    assert_eq!(rows[0].total, dec!(0));
    assert_eq!(rows[0].payment_status, PaymentStatus::Paid);
}

#[tokio::test]
async fn test_receipt_detail_lists_payments_in_date_order() {
    let ledger = demo_ledger().await.unwrap();
    let detail = ledger.receipt(&id("RES-2024-118")).unwrap();
    assert_eq!(
        detail
            .payments
            .iter()
            .map(|p| p.id.as_str())
            .collect::<Vec<_>>(),
        vec!["RCP-2024-051", "RCP-2025-009"]
    );
    assert_eq!(detail.advance, dec!(8100));
    assert_eq!(detail.paid, dec!(27000));
    assert_eq!(detail.pending, dec!(0));
    assert_eq!(detail.status, PaymentStatus::Paid);

    assert!(ledger.receipt(&id("RES-2025-099")).is_err());
}
