use crate::{MAX_WIDGET_NAME_LEN, prelude::*, visit::VisitableNode};
use std::collections::BTreeMap;

///
/// Widget
///
/// Const node emitted by the `#[widget]` macro: one class, its optional
/// exported name, and its member bindings in declaration order.
///

#[derive(Clone, Debug, Serialize)]
pub struct Widget {
    pub def: Def,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,

    pub bindings: &'static [Binding],
}

impl Widget {
    #[must_use]
    /// Exported widget name; defaults to the class ident.
    pub const fn resolved_name(&self) -> &'static str {
        match self.name {
            Some(name) => name,
            None => self.def.ident,
        }
    }
}

impl ValidateNode for Widget {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        let name = self.resolved_name();
        if name.is_empty() {
            err!(errs, "widget name cannot be empty");
        }
        if name.len() > MAX_WIDGET_NAME_LEN {
            err!(
                errs,
                "widget name '{name}' exceeds max length {MAX_WIDGET_NAME_LEN}"
            );
        }
        if !name.is_ascii() {
            err!(errs, "widget name '{name}' must be ASCII");
        }

        errs.result()
    }
}

impl VisitableNode for Widget {
    fn route_key(&self) -> String {
        self.def.path()
    }

    fn drive<V: Visitor>(&self, v: &mut V) {
        for node in self.bindings {
            node.accept(v);
        }
    }
}

///
/// WidgetDefinition
///
/// The frozen, host-consumable registration descriptor for one widget
/// class. The host loader enumerates bindings from here without re-deriving
/// any per-member resolution.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetDefinition {
    pub name: &'static str,
    pub bindings: BTreeMap<&'static str, BindingDefinition>,
}

///
/// BindingDefinition
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingDefinition {
    pub member_name: &'static str,
    pub external_name: &'static str,
    pub kind: BindingKind,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aspects: Vec<Aspect>,
}

impl BindingDefinition {
    #[must_use]
    pub fn from_binding(binding: &Binding) -> Self {
        Self {
            member_name: binding.member,
            external_name: binding.resolved_name(),
            kind: binding.kind,
            aspects: binding.aspects.iter().copied().collect(),
        }
    }
}
