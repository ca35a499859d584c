//! Service implementations
//!
//! In-memory implementations of the store traits, all sharing one
//! [`CrmState`](crate::state::CrmState), plus seed file loading.

pub mod activity_store;
pub mod caller_directory;
pub mod lead_store;
pub mod seed_loader;
pub mod settings_store;

#[cfg(test)]
mod tests;

// Re-export all service implementations
pub use activity_store::RealActivityStore;
pub use caller_directory::RealCallerDirectory;
pub use lead_store::RealLeadStore;
pub use seed_loader::{apply_seed, load_seed_file, SeedSummary};
pub use settings_store::RealSettingsStore;
