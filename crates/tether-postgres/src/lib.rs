mod association_repository;
mod client;
mod config;
mod conversions;
mod models;
mod row;
pub mod schema;
mod sim_details_mapper;

pub use association_repository::PostgresDeviceAssociationRepository;
pub use client::PostgresClient;
pub use config::PostgresConfig;
pub use models::{ActivationStateRow, DeviceAssociationRow};
pub use row::{CursorError, ResultRow};
pub use sim_details_mapper::SimDetailsMapper;
