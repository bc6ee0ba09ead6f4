use std::str::FromStr as _;

use fractic_server_error::ServerError;

use crate::{
    data::models::{amount_model::AmountModel, iso_date_model::ISODateModel},
    entities::{Charge, ChargeCategory, ReservationId},
    errors::{InvalidCsv, InvalidCsvContent},
};

pub(crate) trait ChargesCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<Charge>, ServerError>;
}

pub(crate) struct ChargesCsvDatasourceImpl;

impl ChargesCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl ChargesCsvDatasource for ChargesCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<Charge>, ServerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_reservation_id = r.get(0).unwrap_or("");
                    let raw_date = r.get(1).unwrap_or("");
                    let raw_category = r.get(2).unwrap_or("");
                    let raw_description = r.get(3).unwrap_or("");
                    let raw_quantity = r.get(4).unwrap_or("1").trim();
                    let raw_unit_price = r.get(5).unwrap_or("0");
                    let raw_discount = r.get(6).unwrap_or("0");

                    // Parse.
                    let reservation_id = ReservationId::from_str(raw_reservation_id)?;
                    let date: ISODateModel = ISODateModel::from_str(raw_date)?;
                    let category = ChargeCategory::from_str(raw_category)?;
                    let quantity: u32 = if raw_quantity.is_empty() {
                        1
                    } else {
                        raw_quantity.parse().map_err(|e| {
                            InvalidCsvContent::with_debug(
                                &format!("'{}' is not a valid quantity", raw_quantity),
                                &e,
                            )
                        })?
                    };
                    let unit_price: AmountModel = AmountModel::from_str(raw_unit_price)?;
                    let discount: AmountModel = AmountModel::from_str(raw_discount)?;
                    let gross = unit_price.0 * rust_decimal::Decimal::from(quantity);
                    if discount.0.is_sign_negative() || discount.0 > gross {
                        return Err(InvalidCsvContent::new(&format!(
                            "discount {} on '{}' is outside 0..={}",
                            discount.0,
                            raw_description.trim(),
                            gross
                        )));
                    }

                    // Build.
                    Ok(Charge {
                        reservation_id,
                        date: date.into(),
                        category,
                        description: raw_description.trim().to_string(),
                        quantity,
                        unit_price: unit_price.into(),
                        discount: discount.into(),
                    })
                })
            })
            .collect()
    }
}
