use docstore::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    /// Seeding the test collection failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
