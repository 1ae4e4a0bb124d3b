//! Physical names for the device-association schema.
//!
//! The schema was created with case-sensitive identifiers, so table names
//! carry their double quotes and must be embedded in SQL text verbatim.
//! Attribute columns resolved by `DeviceAttribute::qualified_column` qualify
//! under the join aliases declared here; the repository builds its FROM
//! clause from these same constants, so alias assignment has a single owner.

/// Device/user association records, one per pairing.
pub const DEVICE_ASSOCIATION_TABLE: &str = "\"DeviceAssociation\"";

/// Device master records.
pub const DEVICE_TABLE: &str = "\"Device\"";

/// Factory-provisioned hardware, radio, and SIM identifiers.
pub const DEVICE_INFO_FACTORY_DATA_TABLE: &str = "\"DeviceInfoFactoryData\"";

/// Current activation state per device.
pub const DEVICE_ACTIVATION_STATE_TABLE: &str = "\"DeviceActivationState\"";

/// Mutable device info reported after provisioning.
pub const DEVICE_INFO_TABLE: &str = "\"DeviceInfo\"";

/// Join alias for the factory-data table; `a.`-qualified columns resolve here.
pub const FACTORY_DATA_ALIAS: &str = "a";

/// Join alias for the association table; `b.`-qualified columns resolve here.
pub const ASSOCIATION_ALIAS: &str = "b";

/// Column list for the SIM-details join, in mapper read order.
pub const SIM_DETAILS_COLUMNS: &str = "b.device_id, b.user_id, a.imei, a.serial_number, \
     a.iccid, a.msisdn, a.imsi, a.ssid, a.bssid, b.association_type, b.activated_at";
