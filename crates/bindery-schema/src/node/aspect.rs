use crate::{node::NodeError, prelude::*, visit::VisitableNode};
use std::{borrow::Cow, fmt};

/// Aspect key naming a method the host calls before committing a bound
/// value update.
pub const ASPECT_PRE_UPDATE_VALIDATOR: &str = "preUpdateValidator";

/// Aspect key naming a method the host calls after a bound value update
/// has been committed.
pub const ASPECT_POST_UPDATE_NOTIFIER: &str = "postUpdateNotifier";

///
/// Aspect
///
/// A single behavioral modifier attached to a binding. Immutable once
/// constructed.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Aspect {
    pub key: &'static str,
    pub value: AspectValue,
}

impl Aspect {
    /// Checked constructor for open-ended aspect keys.
    pub fn with_key_and_value(key: &'static str, value: AspectValue) -> Result<Self, NodeError> {
        if key.is_empty() {
            return Err(NodeError::EmptyAspectKey);
        }

        Ok(Self { key, value })
    }
}

impl ValidateNode for Aspect {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.key.is_empty() {
            errs.add(NodeError::EmptyAspectKey);
        }

        errs.result()
    }
}

impl VisitableNode for Aspect {
    fn route_key(&self) -> String {
        self.key.to_string()
    }
}

/// Aspect designating a pre-update validator method. Before committing an
/// externally driven update the host invokes the named method with the
/// candidate value and the update info; returning `false` discards the
/// update and the member keeps its previous value.
#[must_use]
pub const fn can_bind(method: &'static str) -> Aspect {
    Aspect {
        key: ASPECT_PRE_UPDATE_VALIDATOR,
        value: AspectValue::Str(method),
    }
}

/// Aspect designating a post-update notifier method. After the value has
/// been committed the host invokes the named method with the previous value
/// and the update info; the return value is ignored.
#[must_use]
pub const fn did_bind(method: &'static str) -> Aspect {
    Aspect {
        key: ASPECT_POST_UPDATE_NOTIFIER,
        value: AspectValue::Str(method),
    }
}

///
/// AspectValue
///
/// Open-ended value payload so new aspect keys never require shape changes.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
#[remain::sorted]
pub enum AspectValue {
    Bool(bool),
    Int(i64),
    Str(&'static str),
}

impl AspectValue {
    #[must_use]
    pub const fn as_str(&self) -> Option<&'static str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AspectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "{v}"),
        }
    }
}

///
/// AspectList
///
/// Ordered aspect sequence. Order is preserved from declaration to the
/// materialized descriptor; duplicates are kept.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AspectList(Cow<'static, [Aspect]>);

impl AspectList {
    pub const EMPTY: Self = Self(Cow::Borrowed(&[]));

    #[must_use]
    pub const fn from_static(aspects: &'static [Aspect]) -> Self {
        Self(Cow::Borrowed(aspects))
    }

    /// First aspect carrying the given key, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Aspect> {
        self.0.iter().find(|a| a.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Aspect> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Aspect>> for AspectList {
    fn from(aspects: Vec<Aspect>) -> Self {
        Self(Cow::Owned(aspects))
    }
}

impl ValidateNode for AspectList {}

impl VisitableNode for AspectList {
    fn drive<V: Visitor>(&self, v: &mut V) {
        for node in self.iter() {
            node.accept(v);
        }
    }
}

///
/// TESTS
///
