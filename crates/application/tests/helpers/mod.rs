#![allow(dead_code)]

pub mod fixtures;
pub mod mock_sources;

pub use fixtures::*;
pub use mock_sources::{MockLeaseSource, MockNeighborDiagnostic};
