pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

pub use config::{SuiteConfig, ViewMode};
pub use error::StoreError;
pub use models::{Design, DesignKind};
pub use query::{DesignQuery, OwnerFilter};
pub use repo::DesignStore;
