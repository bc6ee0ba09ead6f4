use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    domain::logic::{
        derivation::StayAccount,
        filter::filter_accounts,
        folio_processor::FolioProcessor,
        occupancy_processor::{stay_span, OccupancyProcessor},
        settlement_processor::SettlementProcessor,
        sort::sort_accounts,
    },
    entities::{
        BookingRow, FilterCriteria, Folio, LodgingRecords, OccupancyCalendar, Policy,
        ReceiptDetail, ReceiptRow, ReservationId, Route, SettlementEntry, SettlementReport,
        SortState, View,
    },
    errors::{CalendarRangeRequired, ReservationNotFound},
};

/// Read-only views over a set of records under a policy.
pub(crate) struct QueryUsecase<'a> {
    records: &'a LodgingRecords,
    policy: &'a Policy,
}

impl<'a> QueryUsecase<'a> {
    pub(crate) fn new(records: &'a LodgingRecords, policy: &'a Policy) -> Self {
        Self { records, policy }
    }

    fn accounts(
        &self,
        criteria: &FilterCriteria,
        sort: SortState,
    ) -> Result<Vec<StayAccount<'a>>, ServerError> {
        let mut accounts = filter_accounts(StayAccount::all(self.records), criteria)?;
        sort_accounts(&mut accounts, sort);
        tracing::debug!(matched = accounts.len(), ?sort, "filtered stay accounts");
        Ok(accounts)
    }

    fn account(&self, id: &ReservationId) -> Result<StayAccount<'a>, ServerError> {
        self.records
            .reservation(id)
            .map(|r| StayAccount::new(self.records, r))
            .ok_or_else(|| ReservationNotFound::new(id.as_str()))
    }

    pub(crate) fn bookings(
        &self,
        criteria: &FilterCriteria,
        sort: SortState,
    ) -> Result<Vec<BookingRow>, ServerError> {
        Ok(self
            .accounts(criteria, sort)?
            .iter()
            .map(|a| {
                let r = a.reservation;
                BookingRow {
                    reservation_id: r.id.clone(),
                    guest_name: r.guest.name.clone(),
                    check_in: r.check_in,
                    check_out: r.check_out,
                    nights: r.nights(),
                    room_type: r.room_type.clone(),
                    rooms: r.rooms,
                    mode: r.mode,
                    booking_status: r.status,
                    total: a.total,
                    paid: a.paid,
                    pending: a.pending,
                    payment_status: a.status,
                }
            })
            .collect())
    }

    pub(crate) fn receipts(
        &self,
        criteria: &FilterCriteria,
        sort: SortState,
    ) -> Result<Vec<ReceiptRow>, ServerError> {
        Ok(self
            .accounts(criteria, sort)?
            .iter()
            .map(|a| ReceiptRow {
                reservation_id: a.reservation.id.clone(),
                guest_name: a.reservation.guest.name.clone(),
                total: a.total,
                paid: a.paid,
                pending: a.pending,
                status: a.status,
            })
            .collect())
    }

    pub(crate) fn receipt(&self, id: &ReservationId) -> Result<ReceiptDetail, ServerError> {
        let a = self.account(id)?;
        Ok(ReceiptDetail {
            reservation: a.reservation.clone(),
            payments: a.payments.iter().map(|p| (*p).clone()).collect(),
            total: a.total,
            advance: a.advance,
            paid: a.paid,
            pending: a.pending,
            status: a.status,
        })
    }

    pub(crate) fn settlements(
        &self,
        criteria: &FilterCriteria,
        sort: SortState,
    ) -> Result<Vec<SettlementEntry>, ServerError> {
        let accounts = self.accounts(criteria, sort)?;
        Ok(SettlementProcessor::new(&self.policy.settlement).entries(&accounts))
    }

    pub(crate) fn settlement_report(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<SettlementReport, ServerError> {
        let processor = SettlementProcessor::new(&self.policy.settlement);
        let entries = processor.entries(&self.accounts(criteria, SortState::Unsorted)?);
        Ok(processor.report(&entries))
    }

    pub(crate) fn final_bill(&self, id: &ReservationId) -> Result<Folio, ServerError> {
        let reservation = self
            .records
            .reservation(id)
            .ok_or_else(|| ReservationNotFound::new(id.as_str()))?;
        Ok(FolioProcessor::new(&self.policy.tax).process(self.records, reservation))
    }

    /// Occupancy over `from..=to`. Missing bounds default to the span of all
    /// active stays.
    pub(crate) fn occupancy(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<OccupancyCalendar, ServerError> {
        let span = stay_span(&self.records.reservations);
        let from = from.or(span.map(|(f, _)| f));
        let to = to.or(span.map(|(_, t)| t));
        match (from, to) {
            (Some(from), Some(to)) => OccupancyProcessor::new(&self.policy.inventory).process(
                &self.records.reservations,
                from,
                to,
            ),
            _ => Err(CalendarRangeRequired::new()),
        }
    }

    pub(crate) fn render(
        &self,
        route: &Route,
        criteria: &FilterCriteria,
        sort: SortState,
    ) -> Result<View, ServerError> {
        Ok(match route {
            Route::Bookings => View::Bookings(self.bookings(criteria, sort)?),
            Route::BookingDetail(id) => View::BookingDetail(self.receipt(id)?),
            Route::Receipts => View::Receipts(self.receipts(criteria, sort)?),
            Route::ReceiptDetail(id) => View::ReceiptDetail(self.receipt(id)?),
            Route::SettlementPayment => View::SettlementPayment(self.settlements(criteria, sort)?),
            Route::SettlementReports => View::SettlementReports(self.settlement_report(criteria)?),
            Route::FinalBill(id) => View::FinalBill(self.final_bill(id)?),
            Route::Calendar => View::Calendar(self.occupancy(criteria.from, criteria.to)?),
        })
    }
}
