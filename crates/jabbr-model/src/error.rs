use thiserror::Error;

use crate::bucket::Bucket;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("bucket {bucket} is full: configured capacity is {limit} entries")]
    BucketCapacity { bucket: Bucket, limit: usize },
    #[error("query list is too long: configured capacity is {limit} rows")]
    QueryCapacity { limit: usize },
    #[error("invalid bucket index {0} (expected 0-3)")]
    InvalidBucket(usize),
}

pub type Result<T> = std::result::Result<T, ModelError>;
