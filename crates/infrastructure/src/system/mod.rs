pub mod lease_file;
pub mod neighbor_command;

pub use lease_file::LeaseFileReader;
pub use neighbor_command::NeighborCommandRunner;
