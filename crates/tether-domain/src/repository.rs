use async_trait::async_trait;

use crate::error::DomainResult;
use crate::types::{
    ActivationState, AssociateDeviceRepoInput, DeviceAssociation, GetActivationStateInput,
    GetAssociationInput, SimDetails, SimDetailsRepoQuery,
};

/// Repository trait for device-association storage operations.
/// Infrastructure layer (e.g., tether-postgres) implements this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceAssociationRepository: Send + Sync {
    /// Search the SIM-details join by a resolved attribute filter.
    async fn find_sim_details(&self, query: SimDetailsRepoQuery) -> DomainResult<Vec<SimDetails>>;

    /// Create a device/user association.
    async fn associate_device(
        &self,
        input: AssociateDeviceRepoInput,
    ) -> DomainResult<DeviceAssociation>;

    /// Fetch one device/user association, if present.
    async fn get_association(
        &self,
        input: GetAssociationInput,
    ) -> DomainResult<Option<DeviceAssociation>>;

    /// Fetch the activation state for a device, if recorded.
    async fn get_activation_state(
        &self,
        input: GetActivationStateInput,
    ) -> DomainResult<Option<ActivationState>>;
}
