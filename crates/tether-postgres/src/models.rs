use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Association row as stored, with audit metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceAssociationRow {
    pub device_id: String,
    pub user_id: String,
    pub association_type: String,
    pub created_by: String,
    pub activated_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Activation-state row as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationStateRow {
    pub device_id: String,
    pub state: String,
    pub changed_at: DateTime<Utc>,
}
