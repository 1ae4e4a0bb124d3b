use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, info};

use crate::attribute::DeviceAttribute;
use crate::constants::SYSTEM_USER;
use crate::error::{DomainError, DomainResult};
use crate::repository::DeviceAssociationRepository;
use crate::types::{
    ActivationState, AssociateDeviceInput, AssociateDeviceRepoInput, DeviceAssociation,
    GetActivationStateInput, GetAssociationInput, SimDetails, SimDetailsQuery, SimDetailsRepoQuery,
};
use crate::user_lookup::UserLookupRequest;

/// Rows returned when a caller does not specify a limit.
const DEFAULT_PAGE_SIZE: i64 = 100;

/// Domain service for device-association business logic.
/// This is the orchestration layer that handlers call.
pub struct AssociationService {
    repository: Arc<dyn DeviceAssociationRepository>,
}

impl AssociationService {
    pub fn new(repository: Arc<dyn DeviceAssociationRepository>) -> Self {
        Self { repository }
    }

    /// Search SIM details by an external attribute identifier.
    ///
    /// The identifier is resolved against the closed attribute registry
    /// before the repository is touched; unknown identifiers never reach
    /// query construction.
    pub async fn find_sim_details(&self, query: SimDetailsQuery) -> DomainResult<Vec<SimDetails>> {
        if query.value.trim().is_empty() {
            return Err(DomainError::InvalidFilterValue(
                "Filter value cannot be empty".to_string(),
            ));
        }

        let attribute = DeviceAttribute::from_str(&query.attribute)?;
        let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE);

        debug!(attribute = %attribute, limit = limit, "Searching SIM details");

        let details = self
            .repository
            .find_sim_details(SimDetailsRepoQuery {
                attribute,
                value: query.value,
                limit,
            })
            .await?;

        info!(count = details.len(), "SIM details search finished");
        Ok(details)
    }

    /// Associate a device with a user.
    ///
    /// Writes without an acting principal are recorded against the system
    /// user.
    pub async fn associate_device(
        &self,
        input: AssociateDeviceInput,
    ) -> DomainResult<DeviceAssociation> {
        if input.device_id.is_empty() {
            return Err(DomainError::InvalidDeviceId(
                "Device ID cannot be empty".to_string(),
            ));
        }

        if input.user_id.is_empty() {
            return Err(DomainError::InvalidUserId(
                "User ID cannot be empty".to_string(),
            ));
        }

        if input.association_type.is_empty() {
            return Err(DomainError::InvalidAssociationType(
                "Association type cannot be empty".to_string(),
            ));
        }

        let created_by = input
            .created_by
            .unwrap_or_else(|| SYSTEM_USER.to_string());

        debug!(device_id = %input.device_id, user_id = %input.user_id, "Associating device");

        let association = self
            .repository
            .associate_device(AssociateDeviceRepoInput {
                device_id: input.device_id,
                user_id: input.user_id,
                association_type: input.association_type,
                created_by,
            })
            .await?;

        info!(device_id = %association.device_id, "Device associated");
        Ok(association)
    }

    /// Get one device/user association.
    pub async fn get_association(
        &self,
        input: GetAssociationInput,
    ) -> DomainResult<DeviceAssociation> {
        if input.device_id.is_empty() {
            return Err(DomainError::InvalidDeviceId(
                "Device ID cannot be empty".to_string(),
            ));
        }

        if input.user_id.is_empty() {
            return Err(DomainError::InvalidUserId(
                "User ID cannot be empty".to_string(),
            ));
        }

        let device_id = input.device_id.clone();

        debug!(device_id = %device_id, user_id = %input.user_id, "Getting association");

        let association = self
            .repository
            .get_association(input)
            .await?
            .ok_or(DomainError::AssociationNotFound(device_id))?;

        Ok(association)
    }

    /// Get the activation state for a device.
    pub async fn get_activation_state(
        &self,
        input: GetActivationStateInput,
    ) -> DomainResult<ActivationState> {
        if input.device_id.is_empty() {
            return Err(DomainError::InvalidDeviceId(
                "Device ID cannot be empty".to_string(),
            ));
        }

        let device_id = input.device_id.clone();

        debug!(device_id = %device_id, "Getting activation state");

        let state = self
            .repository
            .get_activation_state(input)
            .await?
            .ok_or(DomainError::ActivationStateNotFound(device_id))?;

        Ok(state)
    }

    /// Validate and normalize a user lookup request for the identity client.
    pub fn prepare_user_lookup(
        &self,
        request: UserLookupRequest,
    ) -> DomainResult<UserLookupRequest> {
        let normalized = request.normalized()?;
        debug!(
            user_names = normalized.user_names.as_ref().map_or(0, Vec::len),
            emails = normalized.emails.as_ref().map_or(0, Vec::len),
            "Prepared user lookup request"
        );
        Ok(normalized)
    }
}
