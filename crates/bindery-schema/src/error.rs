//! Aggregated validation errors with route-prefixed messages.

use serde::Serialize;
use std::fmt;

///
/// ErrorTree
///
/// Flat collection of validation messages, each prefixed with the route of
/// the node that produced it.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct ErrorTree {
    errors: Vec<String>,
}

impl ErrorTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error at the current route.
    pub fn add(&mut self, err: impl fmt::Display) {
        self.errors.push(err.to_string());
    }

    /// Fold another tree into this one, prefixing its messages with `route`.
    pub fn merge(&mut self, route: &str, other: Self) {
        for msg in other.errors {
            if route.is_empty() {
                self.errors.push(msg);
            } else {
                self.errors.push(format!("{route}: {msg}"));
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Collapse into a `Result`, erroring when any message was recorded.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.errors.join("; "))
    }
}

/// Record a formatted error into an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_resolves_ok() {
        assert!(ErrorTree::new().result().is_ok());
    }

    #[test]
    fn merge_prefixes_routes() {
        let mut inner = ErrorTree::new();
        err!(inner, "bad key");

        let mut outer = ErrorTree::new();
        outer.merge("widget.member", inner);

        let errs = outer.result().unwrap_err();
        assert_eq!(errs.to_string(), "widget.member: bad key");
    }

    #[test]
    fn merge_without_route_keeps_message() {
        let mut inner = ErrorTree::new();
        inner.add("loose end");

        let mut outer = ErrorTree::new();
        outer.merge("", inner);

        assert_eq!(outer.len(), 1);
        assert_eq!(outer.to_string(), "loose end");
    }
}
