use crate::types::PropertyError;
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    SchemaError(#[from] crate::schema::Error),

    #[error(transparent)]
    PropertyError(#[from] PropertyError),
}
