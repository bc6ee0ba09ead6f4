use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use fractic_server_error::ServerError;
use serde::Serialize;

use crate::{
    data::datasources::policy_ron_datasource::{PolicyRonDatasource as _, PolicyRonDatasourceImpl},
    domain::{
        logic::draft_processor::DraftProcessor,
        usecases::{
            load_usecase::{LoadUsecase as _, LoadUsecaseImpl},
            query_usecase::QueryUsecase,
        },
    },
    entities::{
        BookingRow, FilterCriteria, Folio, LodgingRecords, OccupancyCalendar, Payment,
        PaymentDraft, Policy, ReceiptDetail, ReceiptRow, Reservation, ReservationDraft,
        ReservationId, Route, SettlementEntry, SettlementReport, SortState, View,
    },
    errors::ReadError,
    presentation::{bill_printer::BillPrinter, json_export::to_json},
};

/// Back-office ledger for a single property: the loaded records plus the
/// policy every derived figure is computed under.
pub struct StayLedgerUtil {
    records: LodgingRecords,
    policy: Policy,
    printer: BillPrinter,
}

impl StayLedgerUtil {
    /// Ledger over already-built records, under the standard policy.
    pub fn new(records: LodgingRecords) -> Self {
        Self {
            records,
            policy: Policy::default(),
            printer: BillPrinter::new(),
        }
    }

    pub async fn from_string(
        reservations_csv: &str,
        payments_csv: &str,
        charges_csv: &str,
    ) -> Result<Self, ServerError> {
        let records = LoadUsecaseImpl::new()
            .from_string(reservations_csv, payments_csv, charges_csv)
            .await?;
        Ok(Self::new(records))
    }

    pub async fn from_file<T>(
        reservations_csv: T,
        payments_csv: T,
        charges_csv: T,
    ) -> Result<Self, ServerError>
    where
        T: AsRef<Path> + Send,
    {
        let records = LoadUsecaseImpl::new()
            .from_file(reservations_csv, payments_csv, charges_csv)
            .await?;
        Ok(Self::new(records))
    }

    /// Replaces the policy; rejected if any percentage is outside 0..=100.
    pub fn with_policy(mut self, policy: Policy) -> Result<Self, ServerError> {
        policy.validate()?;
        self.policy = policy;
        Ok(self)
    }

    pub fn with_policy_ron(self, policy_ron: &str) -> Result<Self, ServerError> {
        let policy = PolicyRonDatasourceImpl::new().from_string(policy_ron)?;
        self.with_policy(policy)
    }

    pub async fn with_policy_file<T>(self, policy_ron: T) -> Result<Self, ServerError>
    where
        T: AsRef<Path> + Send,
    {
        let s = tokio::fs::read_to_string(policy_ron)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.with_policy_ron(&s)
    }

    pub fn records(&self) -> &LodgingRecords {
        &self.records
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    fn query(&self) -> QueryUsecase<'_> {
        QueryUsecase::new(&self.records, &self.policy)
    }

    // Views.
    // ---

    pub fn bookings(
        &self,
        criteria: &FilterCriteria,
        sort: SortState,
    ) -> Result<Vec<BookingRow>, ServerError> {
        self.query().bookings(criteria, sort)
    }

    pub fn receipts(
        &self,
        criteria: &FilterCriteria,
        sort: SortState,
    ) -> Result<Vec<ReceiptRow>, ServerError> {
        self.query().receipts(criteria, sort)
    }

    pub fn receipt(&self, id: &ReservationId) -> Result<ReceiptDetail, ServerError> {
        self.query().receipt(id)
    }

    /// Settlement entries for the matching bookings. Cancelled bookings are
    /// never settled and are left out.
    pub fn settlements(
        &self,
        criteria: &FilterCriteria,
        sort: SortState,
    ) -> Result<Vec<SettlementEntry>, ServerError> {
        self.query().settlements(criteria, sort)
    }

    pub fn settlement_report(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<SettlementReport, ServerError> {
        self.query().settlement_report(criteria)
    }

    pub fn final_bill(&self, id: &ReservationId) -> Result<Folio, ServerError> {
        self.query().final_bill(id)
    }

    pub fn print_final_bill(&self, id: &ReservationId) -> Result<String, ServerError> {
        let folio = self.final_bill(id)?;
        Ok(self.printer.print_folio(&folio))
    }

    pub fn occupancy(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<OccupancyCalendar, ServerError> {
        self.query().occupancy(from, to)
    }

    /// Resolves `path` to a screen and builds its view. List screens apply
    /// `criteria` and `sort`; the calendar reads its range from `criteria`.
    pub fn render(
        &self,
        path: &str,
        criteria: &FilterCriteria,
        sort: SortState,
    ) -> Result<View, ServerError> {
        let route = Route::parse(path)?;
        self.query().render(&route, criteria, sort)
    }

    pub fn to_json<T: Serialize>(&self, value: &T) -> Result<String, ServerError> {
        to_json(value, std::any::type_name::<T>())
    }

    // Updates.
    // ---

    pub fn create_reservation(
        &mut self,
        draft: ReservationDraft,
        created_at: NaiveDateTime,
    ) -> Result<&Reservation, ServerError> {
        let reservation =
            DraftProcessor::new(&mut self.records).create_reservation(draft, created_at)?;
        tracing::info!(
            id = %reservation.id,
            guest = %reservation.guest.name,
            check_in = %reservation.check_in,
            "created reservation"
        );
        Ok(reservation)
    }

    pub fn record_payment(&mut self, draft: PaymentDraft) -> Result<&Payment, ServerError> {
        let payment = DraftProcessor::new(&mut self.records).record_payment(draft)?;
        tracing::info!(
            id = %payment.id,
            reservation = %payment.reservation_id,
            amount = %payment.amount,
            "recorded payment"
        );
        Ok(payment)
    }
}
