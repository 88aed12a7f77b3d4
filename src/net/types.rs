//! Decoding of per-plate lookup results returned by the analyze endpoint.
//!
//! DESIGN
//! ======
//! The server relays whatever the upstream RC-lookup API produced, so each
//! array element is classified defensively: a well-formed detail object, an
//! upstream error object, or something unusable. Classification is per
//! element — one malformed record never poisons its siblings. The original
//! JSON value is kept on detail records for the raw-response disclosure view.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde_json::Value;

/// Outcome of one plate lookup, in server-provided order.
#[derive(Clone, Debug, PartialEq)]
pub enum VehicleRecord {
    /// Successful lookup with the decoded detail fields.
    Details(VehicleDetails),
    /// The upstream API reported a failure for this plate.
    ApiError {
        /// Plate the lookup was attempted for, when the server knew it.
        plate: Option<String>,
        /// Human-readable failure reason from the upstream API.
        reason: String,
    },
    /// The element was not a well-formed record object.
    Invalid,
}

impl VehicleRecord {
    /// Classify one element of the analyze response array.
    pub fn from_value(value: &Value) -> VehicleRecord {
        let Some(map) = value.as_object() else {
            return VehicleRecord::Invalid;
        };
        if let Some(reason) = map.get("error").and_then(Value::as_str) {
            return VehicleRecord::ApiError {
                plate: str_field(value, "plate_number_queried"),
                reason: reason.to_owned(),
            };
        }
        VehicleRecord::Details(VehicleDetails::from_value(value))
    }

    /// Plate identifier for tab labeling, when present.
    pub fn plate(&self) -> Option<&str> {
        match self {
            VehicleRecord::Details(details) => details.plate_number.as_deref(),
            VehicleRecord::ApiError { plate, .. } => plate.as_deref(),
            VehicleRecord::Invalid => None,
        }
    }
}

/// Decoded registration details for one plate.
///
/// Every field is optional; the renderer substitutes an explicit placeholder
/// for missing values. Field names follow the upstream RC-lookup schema.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleDetails {
    pub plate_number: Option<String>,
    pub owner_name: Option<String>,
    pub maker: Option<String>,
    pub maker_model: Option<String>,
    pub vehicle_class: Option<String>,
    pub fuel_type: Option<String>,
    pub registration_date: Option<String>,
    pub insurance_valid_until: Option<String>,
    pub registered_at: Option<String>,
    pub chassis_number: Option<String>,
    pub engine_number: Option<String>,
    /// Verbatim record as received, for the raw-response disclosure view.
    pub raw: Value,
}

impl VehicleDetails {
    fn from_value(value: &Value) -> VehicleDetails {
        VehicleDetails {
            plate_number: str_field(value, "plate_number_queried"),
            owner_name: str_field(value, "rc_owner_name"),
            maker: str_field(value, "rc_maker_desc"),
            maker_model: str_field(value, "rc_maker_model"),
            vehicle_class: str_field(value, "rc_vehicle_class"),
            fuel_type: str_field(value, "rc_fuel_desc"),
            registration_date: str_field(value, "rc_regn_dt"),
            insurance_valid_until: str_field(value, "rc_insurance_upto"),
            registered_at: str_field(value, "rc_registered_at"),
            chassis_number: str_field(value, "rc_chassis_no"),
            engine_number: str_field(value, "rc_engine_no"),
            raw: value.clone(),
        }
    }
}

/// Decode a 2xx analyze response body into ordered records.
///
/// # Errors
///
/// Returns the server's `error` string when the body is an error object, or
/// a generic message when the body is neither an array nor such an object.
pub fn parse_analysis(body: &Value) -> Result<Vec<VehicleRecord>, String> {
    if let Some(items) = body.as_array() {
        return Ok(items.iter().map(VehicleRecord::from_value).collect());
    }
    if let Some(reason) = body.get("error").and_then(Value::as_str) {
        return Err(reason.to_owned());
    }
    Err("Unexpected response format from analysis.".to_owned())
}

/// Failure message for a non-2xx response: the body's `error` string when
/// present, else a status-derived fallback.
pub fn error_from_body(body: &Value, status: u16) -> String {
    body.get("error")
        .and_then(Value::as_str)
        .filter(|reason| !reason.is_empty())
        .map_or_else(|| status_message(status), str::to_owned)
}

/// Generic message for a failed response with no usable body.
pub fn status_message(status: u16) -> String {
    format!("Server responded with status: {status}")
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
