pub mod aggregation;
pub mod lease_parser;
pub mod neighbor_parser;
pub mod parse_report;
pub mod snapshot_store;

pub use aggregation::merge;
pub use lease_parser::{LeaseBlock, LeaseRecordParser};
pub use neighbor_parser::NeighborRecordParser;
pub use parse_report::{ParseReport, Parsed};
pub use snapshot_store::{SnapshotState, SnapshotStore};
