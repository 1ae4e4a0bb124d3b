use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Closed set of device attributes a caller may filter on.
///
/// Each variant binds the identifier used in external requests to the
/// alias-qualified column it resolves to in the SIM-details join
/// (`a` = device info factory data, `b` = device association). Filter keys
/// only reach SQL text after resolving through this enum, so free-form
/// request strings can never name a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceAttribute {
    Imei,
    SerialNumber,
    DeviceId,
    UserId,
    Ssid,
    Iccid,
    Msisdn,
    Imsi,
    Bssid,
    AssociationType,
}

impl DeviceAttribute {
    /// Every attribute, in declaration order.
    pub const ALL: [DeviceAttribute; 10] = [
        DeviceAttribute::Imei,
        DeviceAttribute::SerialNumber,
        DeviceAttribute::DeviceId,
        DeviceAttribute::UserId,
        DeviceAttribute::Ssid,
        DeviceAttribute::Iccid,
        DeviceAttribute::Msisdn,
        DeviceAttribute::Imsi,
        DeviceAttribute::Bssid,
        DeviceAttribute::AssociationType,
    ];

    /// Identifier as it appears in external requests.
    pub const fn identifier(&self) -> &'static str {
        match self {
            DeviceAttribute::Imei => "IMEI",
            DeviceAttribute::SerialNumber => "SERIAL_NUMBER",
            DeviceAttribute::DeviceId => "DEVICE_ID",
            DeviceAttribute::UserId => "USER_ID",
            DeviceAttribute::Ssid => "SSID",
            DeviceAttribute::Iccid => "ICCID",
            DeviceAttribute::Msisdn => "MSISDN",
            DeviceAttribute::Imsi => "IMSI",
            DeviceAttribute::Bssid => "BSSID",
            DeviceAttribute::AssociationType => "ASSOCIATION_TYPE",
        }
    }

    /// Alias-qualified column reference for use in the SIM-details join.
    ///
    /// Aliases match the canonical join built by the repository: factory-data
    /// columns qualify under `a`, association columns under `b`.
    pub const fn qualified_column(&self) -> &'static str {
        match self {
            DeviceAttribute::Imei => "a.imei",
            DeviceAttribute::SerialNumber => "a.serial_number",
            DeviceAttribute::DeviceId => "b.device_id",
            DeviceAttribute::UserId => "b.user_id",
            DeviceAttribute::Ssid => "a.ssid",
            DeviceAttribute::Iccid => "a.iccid",
            DeviceAttribute::Msisdn => "a.msisdn",
            DeviceAttribute::Imsi => "a.imsi",
            DeviceAttribute::Bssid => "a.bssid",
            DeviceAttribute::AssociationType => "b.association_type",
        }
    }
}

impl FromStr for DeviceAttribute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IMEI" => Ok(DeviceAttribute::Imei),
            "SERIAL_NUMBER" => Ok(DeviceAttribute::SerialNumber),
            "DEVICE_ID" => Ok(DeviceAttribute::DeviceId),
            "USER_ID" => Ok(DeviceAttribute::UserId),
            "SSID" => Ok(DeviceAttribute::Ssid),
            "ICCID" => Ok(DeviceAttribute::Iccid),
            "MSISDN" => Ok(DeviceAttribute::Msisdn),
            "IMSI" => Ok(DeviceAttribute::Imsi),
            "BSSID" => Ok(DeviceAttribute::Bssid),
            "ASSOCIATION_TYPE" => Ok(DeviceAttribute::AssociationType),
            other => Err(DomainError::UnknownAttribute(other.to_string())),
        }
    }
}

impl fmt::Display for DeviceAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
