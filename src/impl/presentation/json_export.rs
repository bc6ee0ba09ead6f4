use fractic_server_error::ServerError;
use serde::Serialize;

use crate::errors::SerializationFailed;

pub(crate) fn to_json<T: Serialize>(value: &T, what: &str) -> Result<String, ServerError> {
    serde_json::to_string_pretty(value).map_err(|e| SerializationFailed::with_debug(what, &e))
}
