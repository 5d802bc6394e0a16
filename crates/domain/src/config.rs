pub mod errors;
pub mod leases;
pub mod logging;
pub mod neighbors;
pub mod refresh;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use leases::LeasesConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use neighbors::{NeighborFormat, NeighborsConfig};
pub use refresh::RefreshConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
