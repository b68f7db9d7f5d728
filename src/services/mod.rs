// Service exports
pub mod cache;
pub mod dataset;

pub use cache::{CacheError, CacheStats, Dataset, DatasetCache};
pub use dataset::{load_firms, load_firms_from_reader, DatasetError};
