pub mod client;
pub mod config;
pub mod types;

pub use client::{RegistryClient, RegistryError};
pub use config::load_config;
pub use types::{AppConfig, NewOrganization, Organization};
