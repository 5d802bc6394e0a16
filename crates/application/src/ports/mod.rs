mod lease_source;
mod neighbor_diagnostic;

pub use lease_source::LeaseSource;
pub use neighbor_diagnostic::NeighborDiagnostic;
