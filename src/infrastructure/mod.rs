/// Infrastructure layer for storage and other technical concerns.
pub mod persistence;

pub use persistence::{RecordStore, SledRecordStore};
