use std::str::FromStr as _;

use fractic_server_error::ServerError;

use crate::{
    data::models::{amount_model::AmountModel, iso_date_model::ISODateModel},
    entities::{Payment, PaymentId, PaymentMode, PaymentType, ReservationId},
    errors::{InvalidCsv, InvalidCsvContent, InvalidPaymentAmount},
};

pub(crate) trait PaymentsCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<Payment>, ServerError>;
}

pub(crate) struct PaymentsCsvDatasourceImpl;

impl PaymentsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl PaymentsCsvDatasource for PaymentsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<Payment>, ServerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_id = r.get(0).unwrap_or("").trim();
                    let raw_reservation_id = r.get(1).unwrap_or("");
                    let raw_type = r.get(2).unwrap_or("");
                    let raw_amount = r.get(3).unwrap_or("0");
                    let raw_mode = r.get(4).unwrap_or("");
                    let raw_payer = r.get(5).unwrap_or("");
                    let raw_reference = r.get(6).unwrap_or("").trim();
                    let raw_date = r.get(7).unwrap_or("");
                    let raw_remarks = r.get(8).unwrap_or("").trim();

                    // Parse.
                    if raw_id.is_empty() {
                        return Err(InvalidCsvContent::new("payment id is empty"));
                    }
                    let reservation_id = ReservationId::from_str(raw_reservation_id)?;
                    let kind = PaymentType::from_str(raw_type)?;
                    let amount: AmountModel = AmountModel::from_str(raw_amount)?;
                    if amount.0 <= rust_decimal::Decimal::ZERO {
                        return Err(InvalidPaymentAmount::new(raw_amount));
                    }
                    let mode = PaymentMode::from_str(raw_mode)?;
                    let date: ISODateModel = ISODateModel::from_str(raw_date)?;

                    // Build.
                    Ok(Payment {
                        id: PaymentId(raw_id.to_string()),
                        reservation_id,
                        kind,
                        amount: amount.into(),
                        mode,
                        payer: raw_payer.trim().to_string(),
                        reference: (!raw_reference.is_empty()).then(|| raw_reference.to_string()),
                        date: date.into(),
                        remarks: (!raw_remarks.is_empty()).then(|| raw_remarks.to_string()),
                    })
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const HEADER: &str = "id,reservation_id,type,amount,mode,payer,reference,date,remarks\n";

    #[test]
    fn test_parses_payment_row() {
        let csv = format!(
            "{}RCP-2025-001,RES-2025-001,Advance,\"5,000\",UPI,John Doe,UPI-88231,2025-01-03,Token advance\n",
            HEADER
        );
        let v = PaymentsCsvDatasourceImpl::new().from_string(&csv).unwrap();
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].kind, PaymentType::Advance);
        assert_eq!(v[0].amount, dec!(5000));
        assert_eq!(v[0].mode, PaymentMode::Upi);
        assert_eq!(v[0].reference.as_deref(), Some("UPI-88231"));
    }

    #[test]
    fn test_blank_optional_columns() {
        let csv = format!("{}RCP-2025-002,RES-2025-001,Full,100,Cash,Desk,,2025-01-03,\n", HEADER);
        let v = PaymentsCsvDatasourceImpl::new().from_string(&csv).unwrap();
        assert_eq!(v[0].reference, None);
        assert_eq!(v[0].remarks, None);
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        let csv = format!("{}RCP-2025-002,RES-2025-001,Full,(100),Cash,Desk,,2025-01-03,\n", HEADER);
        assert!(PaymentsCsvDatasourceImpl::new().from_string(&csv).is_err());
    }
}
