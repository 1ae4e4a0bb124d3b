pub mod association_service;
pub mod attribute;
pub mod constants;
pub mod error;
pub mod repository;
pub mod telemetry;
pub mod types;
pub mod user_lookup;

pub use association_service::AssociationService;
pub use attribute::DeviceAttribute;
pub use constants::SYSTEM_USER;
pub use error::{DomainError, DomainResult};
pub use repository::DeviceAssociationRepository;
pub use telemetry::init_logging;
pub use types::*;
pub use user_lookup::UserLookupRequest;
