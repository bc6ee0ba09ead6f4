use std::str::FromStr as _;

use fractic_server_error::ServerError;

use crate::{
    data::models::{
        amount_model::AmountModel,
        iso_date_model::{ISODateModel, ISODateTimeModel},
        label_model::FlagModel,
    },
    entities::{
        BookingMode, BookingStatus, Guest, Occupancy, Reservation, ReservationId,
    },
    errors::{InvalidCsv, InvalidCsvContent},
};

pub(crate) trait ReservationsCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<Reservation>, ServerError>;
}

pub(crate) struct ReservationsCsvDatasourceImpl;

impl ReservationsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

fn optional(raw: &str) -> Option<String> {
    match raw.trim() {
        "" => None,
        s => Some(s.to_string()),
    }
}

fn count(raw: &str, column: &str) -> Result<u32, ServerError> {
    match raw.trim() {
        "" => Ok(0),
        s => s.parse::<u32>().map_err(|e| {
            InvalidCsvContent::with_debug(&format!("'{}' is not a valid {}", s, column), &e)
        }),
    }
}

impl ReservationsCsvDatasource for ReservationsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<Reservation>, ServerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_id = r.get(0).unwrap_or("");
                    let raw_guest_name = r.get(1).unwrap_or("");
                    let raw_phone = r.get(2).unwrap_or("");
                    let raw_email = r.get(3).unwrap_or("");
                    let raw_check_in = r.get(4).unwrap_or("");
                    let raw_check_out = r.get(5).unwrap_or("");
                    let raw_room_type = r.get(6).unwrap_or("");
                    let raw_rooms = r.get(7).unwrap_or("1");
                    let raw_adults = r.get(8).unwrap_or("1");
                    let raw_children = r.get(9).unwrap_or("0");
                    let raw_rate = r.get(10).unwrap_or("0");
                    let raw_mode = r.get(11).unwrap_or("");
                    let raw_status = r.get(12).unwrap_or("");
                    let raw_created_at = r.get(13).unwrap_or("");
                    let raw_verified = r.get(14).unwrap_or("");

                    // Parse.
                    let id = ReservationId::from_str(raw_id)?;
                    let check_in: ISODateModel = ISODateModel::from_str(raw_check_in)?;
                    let check_out: ISODateModel = ISODateModel::from_str(raw_check_out)?;
                    let rooms = count(raw_rooms, "room count")?;
                    let adults = count(raw_adults, "adult count")?;
                    let children = count(raw_children, "child count")?;
                    let rate: AmountModel = AmountModel::from_str(raw_rate)?;
                    let mode = BookingMode::from_str(raw_mode)?;
                    let status = BookingStatus::from_str(raw_status)?;
                    let created_at: ISODateTimeModel = ISODateTimeModel::from_str(raw_created_at)?;
                    let verified: FlagModel = FlagModel::from_str(raw_verified)?;

                    // Build.
                    Ok(Reservation {
                        id,
                        guest: Guest {
                            name: raw_guest_name.trim().to_string(),
                            phone: optional(raw_phone),
                            email: optional(raw_email),
                        },
                        check_in: check_in.into(),
                        check_out: check_out.into(),
                        room_type: raw_room_type.trim().to_string(),
                        rooms,
                        occupancy: Occupancy { adults, children },
                        rate: rate.into(),
                        mode,
                        status,
                        created_at: created_at.into(),
                        verified: verified.0,
                    })
                })
            })
            .collect()
    }
}
