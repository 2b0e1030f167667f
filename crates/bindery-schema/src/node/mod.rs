mod aspect;
mod binding;
mod def;
mod registry;
mod widget;

// pub use all node types
pub use self::aspect::*;
pub use self::binding::*;
pub use self::def::*;
pub use self::registry::*;
pub use self::widget::*;

use thiserror::Error as ThisError;

///
/// NodeError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum NodeError {
    #[error("aspect key cannot be empty")]
    EmptyAspectKey,

    #[error("binding for member '{member}' resolves to an empty external name")]
    EmptyBindingName { member: &'static str },

    #[error("external name must be the first argument for member '{member}'")]
    MisplacedName { member: &'static str },

    #[error("widget '{path}' has not been finalized")]
    WidgetNotDefined { path: String },

    #[error("widget '{path}' not found in registry")]
    WidgetNotFound { path: String },

    #[error("widget '{path}' is finalized; member '{member}' can no longer be bound")]
    WidgetSealed { path: String, member: &'static str },
}
