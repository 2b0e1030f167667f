use crate::prelude::*;

///
/// Def
///
/// Identity of a widget class, captured at the declaration site.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Def {
    pub module_path: &'static str,
    pub ident: &'static str,
}

impl Def {
    #[must_use]
    /// Registry path uniquely identifying the class.
    pub fn path(&self) -> String {
        format!("{}::{}", self.module_path, self.ident)
    }
}
