//! Knowledge base domain: chunk records and the store they are persisted to

pub mod record;
pub mod store;

pub use record::{AddRecordsResult, ChunkRecord};
pub use store::ChunkStore;
