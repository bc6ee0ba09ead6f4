use fractic_server_error::ServerError;

use crate::entities::LodgingRecords;

pub trait RecordsRepository {
    fn from_string(
        &self,
        reservations_csv: &str,
        payments_csv: &str,
        charges_csv: &str,
    ) -> Result<LodgingRecords, ServerError>;
}
