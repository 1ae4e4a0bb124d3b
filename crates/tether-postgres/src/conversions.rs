use tether_domain::{ActivationState, DeviceAssociation};

use crate::models::{ActivationStateRow, DeviceAssociationRow};

/// Convert database DeviceAssociationRow to domain DeviceAssociation
impl From<DeviceAssociationRow> for DeviceAssociation {
    fn from(row: DeviceAssociationRow) -> Self {
        DeviceAssociation {
            device_id: row.device_id,
            user_id: row.user_id,
            association_type: row.association_type,
            created_by: row.created_by,
            activated_at: row.activated_at,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        }
    }
}

/// Convert database ActivationStateRow to domain ActivationState
impl From<ActivationStateRow> for ActivationState {
    fn from(row: ActivationStateRow) -> Self {
        ActivationState {
            device_id: row.device_id,
            state: row.state,
            changed_at: Some(row.changed_at),
        }
    }
}
