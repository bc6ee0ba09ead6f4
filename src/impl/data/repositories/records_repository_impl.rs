use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        charges_csv_datasource::{ChargesCsvDatasource, ChargesCsvDatasourceImpl},
        payments_csv_datasource::{PaymentsCsvDatasource, PaymentsCsvDatasourceImpl},
        reservations_csv_datasource::{ReservationsCsvDatasource, ReservationsCsvDatasourceImpl},
    },
    domain::repositories::records_repository::RecordsRepository,
    entities::LodgingRecords,
};

pub(crate) struct RecordsRepositoryImpl<
    DS1 = ReservationsCsvDatasourceImpl, // Default.
    DS2 = PaymentsCsvDatasourceImpl,     // Default.
    DS3 = ChargesCsvDatasourceImpl,      // Default.
> where
    DS1: ReservationsCsvDatasource,
    DS2: PaymentsCsvDatasource,
    DS3: ChargesCsvDatasource,
{
    reservations_datasource: DS1,
    payments_datasource: DS2,
    charges_datasource: DS3,
}

impl<DS1, DS2, DS3> RecordsRepository for RecordsRepositoryImpl<DS1, DS2, DS3>
where
    DS1: ReservationsCsvDatasource,
    DS2: PaymentsCsvDatasource,
    DS3: ChargesCsvDatasource,
{
    fn from_string(
        &self,
        reservations_csv: &str,
        payments_csv: &str,
        charges_csv: &str,
    ) -> Result<LodgingRecords, ServerError> {
        Ok(LodgingRecords {
            reservations: self.reservations_datasource.from_string(reservations_csv)?,
            payments: self.payments_datasource.from_string(payments_csv)?,
            charges: self.charges_datasource.from_string(charges_csv)?,
        })
    }
}

impl RecordsRepositoryImpl {
    pub(crate) fn new() -> Self {
        RecordsRepositoryImpl {
            reservations_datasource: ReservationsCsvDatasourceImpl::new(),
            payments_datasource: PaymentsCsvDatasourceImpl::new(),
            charges_datasource: ChargesCsvDatasourceImpl::new(),
        }
    }
}
