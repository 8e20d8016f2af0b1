use crate::model;
use serde_derive::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub details: Vec<FieldError>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AvailabilityResponse {
    pub available: bool,
}

/// The booking row joined with its vehicle and the billed day count,
/// exactly as the wizard's success step renders it.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct BookingReceipt {
    #[serde(flatten)]
    pub booking: model::Booking,
    pub vehicle: model::Vehicle,
    pub days: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct BookingCreatedResponse {
    pub success: bool,
    pub booking: BookingReceipt,
    pub message: String,
}
