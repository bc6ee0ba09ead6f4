use std::path::Path;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::records_repository_impl::RecordsRepositoryImpl,
    domain::{
        logic::records_validator::validate_records,
        repositories::records_repository::RecordsRepository,
    },
    entities::LodgingRecords,
    errors::ReadError,
};

#[async_trait]
pub trait LoadUsecase: Send + Sync {
    async fn from_string(
        &self,
        reservations_csv: &str,
        payments_csv: &str,
        charges_csv: &str,
    ) -> Result<LodgingRecords, ServerError>;

    async fn from_file<P>(
        &self,
        reservations_csv: P,
        payments_csv: P,
        charges_csv: P,
    ) -> Result<LodgingRecords, ServerError>
    where
        P: AsRef<Path> + Send;
}

pub(crate) struct LoadUsecaseImpl<
    R1 = RecordsRepositoryImpl, // Default.
> where
    R1: RecordsRepository + Send + Sync,
{
    records_repository: R1,
}

async fn read(path: &Path) -> Result<String, ServerError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ReadError::with_debug(&e))
}

impl<R1> LoadUsecaseImpl<R1>
where
    R1: RecordsRepository + Send + Sync,
{
    fn build(
        &self,
        reservations_csv: &str,
        payments_csv: &str,
        charges_csv: &str,
    ) -> Result<LodgingRecords, ServerError> {
        let records =
            self.records_repository
                .from_string(reservations_csv, payments_csv, charges_csv)?;
        validate_records(&records)?;
        tracing::debug!(
            reservations = records.reservations.len(),
            payments = records.payments.len(),
            charges = records.charges.len(),
            "loaded lodging records"
        );
        Ok(records)
    }
}

#[async_trait]
impl<R1> LoadUsecase for LoadUsecaseImpl<R1>
where
    R1: RecordsRepository + Send + Sync,
{
    async fn from_string(
        &self,
        reservations_csv: &str,
        payments_csv: &str,
        charges_csv: &str,
    ) -> Result<LodgingRecords, ServerError> {
        self.build(reservations_csv, payments_csv, charges_csv)
    }

    async fn from_file<P>(
        &self,
        reservations_csv: P,
        payments_csv: P,
        charges_csv: P,
    ) -> Result<LodgingRecords, ServerError>
    where
        P: AsRef<Path> + Send,
    {
        let (reservations, payments, charges) = futures::try_join!(
            read(reservations_csv.as_ref()),
            read(payments_csv.as_ref()),
            read(charges_csv.as_ref()),
        )?;
        self.build(&reservations, &payments, &charges)
    }
}

impl LoadUsecaseImpl {
    pub(crate) fn new() -> Self {
        LoadUsecaseImpl {
            records_repository: RecordsRepositoryImpl::new(),
        }
    }
}
