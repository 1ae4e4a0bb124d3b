use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, instrument};

use tether_domain::{
    ActivationState, AssociateDeviceRepoInput, DeviceAssociation, DeviceAssociationRepository,
    DomainError, DomainResult, GetActivationStateInput, GetAssociationInput, SimDetails,
    SimDetailsRepoQuery,
};

use crate::client::PostgresClient;
use crate::models::{ActivationStateRow, DeviceAssociationRow};
use crate::schema;
use crate::sim_details_mapper::SimDetailsMapper;

/// PostgreSQL implementation of DeviceAssociationRepository trait
#[derive(Clone)]
pub struct PostgresDeviceAssociationRepository {
    client: PostgresClient,
}

impl PostgresDeviceAssociationRepository {
    pub fn new(client: PostgresClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DeviceAssociationRepository for PostgresDeviceAssociationRepository {
    #[instrument(skip(self, query), fields(attribute = %query.attribute))]
    async fn find_sim_details(&self, query: SimDetailsRepoQuery) -> DomainResult<Vec<SimDetails>> {
        let conn = self
            .client
            .get_connection()
            .await
            .map_err(DomainError::RepositoryError)?;

        // The predicate column comes from the closed attribute registry,
        // never from request text; the filter value stays a bind parameter.
        let sql = format!(
            "SELECT {columns}
             FROM {factory_data} {fa}
             INNER JOIN {association} {ba} ON {fa}.device_id = {ba}.device_id
             WHERE {predicate} = $1
             ORDER BY {ba}.created_at DESC
             LIMIT $2",
            columns = schema::SIM_DETAILS_COLUMNS,
            factory_data = schema::DEVICE_INFO_FACTORY_DATA_TABLE,
            association = schema::DEVICE_ASSOCIATION_TABLE,
            fa = schema::FACTORY_DATA_ALIAS,
            ba = schema::ASSOCIATION_ALIAS,
            predicate = query.attribute.qualified_column(),
        );

        let rows = conn
            .query(&sql, &[&query.value, &query.limit])
            .await
            .map_err(|e| DomainError::RepositoryError(e.into()))?;

        let mut details = Vec::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            details.push(SimDetailsMapper::map_row(row, (idx as i64) + 1)?);
        }

        debug!(
            count = details.len(),
            attribute = %query.attribute,
            "mapped sim details rows"
        );

        Ok(details)
    }

    #[instrument(skip(self, input), fields(device_id = %input.device_id, user_id = %input.user_id))]
    async fn associate_device(
        &self,
        input: AssociateDeviceRepoInput,
    ) -> DomainResult<DeviceAssociation> {
        let conn = self
            .client
            .get_connection()
            .await
            .map_err(DomainError::RepositoryError)?;

        let now = Utc::now();

        let result = conn
            .execute(
                &format!(
                    "INSERT INTO {} (device_id, user_id, association_type, created_by, created_at, updated_at)
                     VALUES ($1, $2, $3, $4, $5, $6)",
                    schema::DEVICE_ASSOCIATION_TABLE
                ),
                &[
                    &input.device_id,
                    &input.user_id,
                    &input.association_type,
                    &input.created_by,
                    &now,
                    &now,
                ],
            )
            .await;

        if let Err(e) = result {
            if let Some(db_err) = e.as_db_error() {
                // PostgreSQL error code 23505 is unique_violation
                if db_err.code().code() == "23505" {
                    return Err(DomainError::AssociationAlreadyExists(input.device_id));
                }
            }
            return Err(DomainError::RepositoryError(e.into()));
        }

        debug!(device_id = %input.device_id, "device association created in database");

        Ok(DeviceAssociation {
            device_id: input.device_id,
            user_id: input.user_id,
            association_type: input.association_type,
            created_by: input.created_by,
            activated_at: None,
            created_at: Some(now),
            updated_at: Some(now),
        })
    }

    #[instrument(skip(self, input), fields(device_id = %input.device_id, user_id = %input.user_id))]
    async fn get_association(
        &self,
        input: GetAssociationInput,
    ) -> DomainResult<Option<DeviceAssociation>> {
        let conn = self
            .client
            .get_connection()
            .await
            .map_err(DomainError::RepositoryError)?;

        let row = conn
            .query_opt(
                &format!(
                    "SELECT device_id, user_id, association_type, created_by, activated_at, created_at, updated_at
                     FROM {} WHERE device_id = $1 AND user_id = $2",
                    schema::DEVICE_ASSOCIATION_TABLE
                ),
                &[&input.device_id, &input.user_id],
            )
            .await
            .map_err(|e| DomainError::RepositoryError(e.into()))?;

        match row {
            Some(row) => {
                let association_row = DeviceAssociationRow {
                    device_id: row.get(0),
                    user_id: row.get(1),
                    association_type: row.get(2),
                    created_by: row.get(3),
                    activated_at: row.get(4),
                    created_at: row.get(5),
                    updated_at: row.get(6),
                };
                Ok(Some(association_row.into()))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self, input), fields(device_id = %input.device_id))]
    async fn get_activation_state(
        &self,
        input: GetActivationStateInput,
    ) -> DomainResult<Option<ActivationState>> {
        let conn = self
            .client
            .get_connection()
            .await
            .map_err(DomainError::RepositoryError)?;

        let row = conn
            .query_opt(
                &format!(
                    "SELECT device_id, state, changed_at FROM {} WHERE device_id = $1",
                    schema::DEVICE_ACTIVATION_STATE_TABLE
                ),
                &[&input.device_id],
            )
            .await
            .map_err(|e| DomainError::RepositoryError(e.into()))?;

        match row {
            Some(row) => {
                let state_row = ActivationStateRow {
                    device_id: row.get(0),
                    state: row.get(1),
                    changed_at: row.get(2),
                };
                Ok(Some(state_row.into()))
            }
            None => Ok(None),
        }
    }
}
