pub mod build;
pub mod error;
pub mod node;
pub mod resolve;
pub mod validate;
pub mod visit;

/// Maximum length for exported widget identifiers.
pub const MAX_WIDGET_NAME_LEN: usize = 64;

/// Maximum length for member binding identifiers.
pub const MAX_MEMBER_NAME_LEN: usize = 64;

use crate::{build::BuildError, node::NodeError};
pub(crate) use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        resolve::{BindingArg, resolve_member_args},
        visit::{ValidateNode, Visitor},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    BuildError(#[from] BuildError),

    #[error(transparent)]
    NodeError(#[from] NodeError),
}
