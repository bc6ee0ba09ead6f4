use chrono::NaiveDate;
use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidCsvContent, "Invalid CSV content: {details}.", { details: &str });
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidIsoDateTime, "Invalid ISO date-time: {value}.", { value: &str });
define_client_error!(InvalidAmount, "Invalid amount: '{value}'.", { value: &str });
define_client_error!(
    UnknownLabel,
    "Unknown {kind}: '{value}'.",
    { kind: &str, value: &str }
);
define_client_error!(
    InvalidReservationId,
    "Invalid reservation id: '{value}'. Expected a form like RES-2025-001.",
    { value: &str }
);

// Record-related.
define_client_error!(DuplicateReservationId, "Duplicate reservation id: {id}.", { id: &str });
define_client_error!(DuplicatePaymentId, "Duplicate payment id: {id}.", { id: &str });
define_client_error!(
    InvalidStayDates,
    "Check-out ({check_out}) must be after check-in ({check_in}).",
    { check_in: &NaiveDate, check_out: &NaiveDate }
);
define_client_error!(InvalidOccupancy, "Invalid occupancy: {details}.", { details: &str });
define_client_error!(InvalidGuestDetails, "Invalid guest details: {details}.", { details: &str });
define_client_error!(InvalidRate, "Invalid room rate: {value}.", { value: &str });
define_client_error!(
    OrphanPayment,
    "Payment '{payment_id}' references unknown reservation '{reservation_id}'.",
    { payment_id: &str, reservation_id: &str }
);
define_client_error!(
    OrphanFolioCharge,
    "Folio charge references unknown reservation '{reservation_id}'.",
    { reservation_id: &str }
);
define_client_error!(ReservationNotFound, "Reservation not found: {id}.", { id: &str });
define_client_error!(
    IdSequenceExhausted,
    "No further {prefix} ids can be assigned for {year}.",
    { prefix: &str, year: &i32 }
);
define_client_error!(
    InvalidPaymentAmount,
    "Payment amount must be positive (got {value}).",
    { value: &str }
);
define_client_error!(
    RefundExceedsPaid,
    "Refund for reservation '{reservation_id}' exceeds the amount paid so far.",
    { reservation_id: &str }
);

// Query-related.
define_client_error!(
    InvalidDateRange,
    "Invalid date range: {from} is after {to}.",
    { from: &NaiveDate, to: &NaiveDate }
);
define_client_error!(
    CalendarRangeRequired,
    "A date range is required: there are no stays to derive one from."
);
define_client_error!(RouteNotFound, "No view is registered for path '{path}'.", { path: &str });

// Configuration-related.
define_client_error!(InvalidPolicy, "Invalid policy: {details}.", { details: &str });
define_internal_error!(
    SerializationFailed,
    "Failed to serialize {what} to JSON.",
    { what: &str }
);
