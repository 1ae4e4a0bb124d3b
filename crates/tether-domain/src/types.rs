use chrono::{DateTime, Utc};

use crate::attribute::DeviceAttribute;

/// One row of the SIM-details join, fully hydrated.
///
/// `row_num` is the 1-based ordinal supplied by the caller that mapped the
/// row; it is stored verbatim for pagination bookkeeping and never validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimDetails {
    pub row_num: i64,
    pub device_id: String,
    pub user_id: Option<String>,
    pub imei: String,
    pub serial_number: String,
    pub iccid: Option<String>,
    pub msisdn: Option<String>,
    pub imsi: Option<String>,
    pub ssid: Option<String>,
    pub bssid: Option<String>,
    pub association_type: String,
    pub activated_at: Option<DateTime<Utc>>,
}

/// Domain representation of a device/user association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceAssociation {
    pub device_id: String,
    pub user_id: String,
    pub association_type: String,
    pub created_by: String,
    pub activated_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Current activation state of a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationState {
    pub device_id: String,
    pub state: String,
    pub changed_at: Option<DateTime<Utc>>,
}

/// Input for a SIM-details search as it arrives from a caller.
///
/// `attribute` carries the external filter identifier and is resolved by the
/// service before any query is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimDetailsQuery {
    pub attribute: String,
    pub value: String,
    pub limit: Option<i64>,
}

/// Post-validation SIM-details search handed to the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimDetailsRepoQuery {
    pub attribute: DeviceAttribute,
    pub value: String,
    pub limit: i64,
}

/// Input for creating a device/user association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociateDeviceInput {
    pub device_id: String,
    pub user_id: String,
    pub association_type: String,
    pub created_by: Option<String>,
}

/// Association input with the acting principal resolved, for the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociateDeviceRepoInput {
    pub device_id: String,
    pub user_id: String,
    pub association_type: String,
    pub created_by: String,
}

/// Input for retrieving one device/user association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAssociationInput {
    pub device_id: String,
    pub user_id: String,
}

/// Input for retrieving a device's activation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetActivationStateInput {
    pub device_id: String,
}
