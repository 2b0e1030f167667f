//! Host contract types shared between widgets and the hosting runtime.

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Property values cross the host boundary as JSON.
pub type Value = serde_json::Value;

///
/// UpdateInfo
///
/// Context the host supplies with an externally driven property update.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInfo {
    /// External name of the property being updated.
    pub target_property: String,

    /// Identifier of the binding source, when the host knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl UpdateInfo {
    #[must_use]
    pub fn for_property(target: impl Into<String>) -> Self {
        Self {
            target_property: target.into(),
            source: None,
        }
    }
}

///
/// BindingUpdate
///
/// Outcome of a binding-driven property update.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum BindingUpdate {
    /// The value was committed; the post-update notifier (if any) has run.
    Committed,

    /// The pre-update validator refused the value; the member keeps its
    /// previous value.
    Rejected,
}

///
/// PropertyError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum PropertyError {
    #[error("property '{property}' rejected value: {message}")]
    Deserialize {
        property: &'static str,
        message: String,
    },

    #[error("no property binding for external name '{name}'")]
    UnknownProperty { name: String },
}
