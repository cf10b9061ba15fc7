pub mod command;
pub mod config;
pub mod errors;
pub mod host;
pub mod loader;
pub mod models;
pub mod region;
pub mod state;
pub mod transport;

pub use command::Command;
pub use config::LoaderConfig;
pub use errors::{CommandError, ConfigError, FragmentFetchError};
pub use host::HostExit;
pub use loader::FragmentLoader;
pub use models::{FragmentRequest, RegionContent};
pub use region::{DisplayRegion, ResponsePolicy};
pub use state::SessionState;
pub use transport::{FragmentTransport, HttpTransport};
