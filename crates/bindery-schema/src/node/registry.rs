use crate::{node::NodeError, prelude::*, visit::VisitableNode};
use std::collections::BTreeMap;

///
/// Registry
///
/// Process-wide mapping from widget class path to its registration table.
/// Populated during class loading, sealed per class at finalization, then
/// read-only once the host has consumed it.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct Registry {
    widgets: BTreeMap<String, WidgetRecord>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the binding for one member. The registration
    /// table is created lazily on the first binding for a class; re-binding
    /// the same member replaces its descriptor (last write wins).
    pub fn insert_binding(
        &mut self,
        widget_path: &str,
        binding: Binding,
    ) -> Result<(), NodeError> {
        let record = self.widgets.entry(widget_path.to_string()).or_default();

        if record.sealed {
            return Err(NodeError::WidgetSealed {
                path: widget_path.to_string(),
                member: binding.member,
            });
        }
        record.bindings.insert(binding.member, binding);

        Ok(())
    }

    /// Finalize a widget class: attach its exported name and seal the
    /// table. Safe to re-invoke; doing so replaces the exported name and
    /// never duplicates entries.
    pub fn define(&mut self, def: Def, name: Option<&'static str>) {
        let record = self.widgets.entry(def.path()).or_default();
        record.def = Some(def);
        record.name = name;
        record.sealed = true;
    }

    /// Consume a macro-emitted widget node: member bindings in declaration
    /// order, then finalization. Infallible; re-invocation for the same
    /// class replaces the previous snapshot wholesale instead of merging
    /// into the sealed record.
    pub fn register_widget(&mut self, widget: &Widget) {
        let record = self.widgets.entry(widget.def.path()).or_default();

        if record.sealed {
            record.bindings.clear();
        }
        for binding in widget.bindings {
            record.bindings.insert(binding.member, binding.clone());
        }

        record.def = Some(widget.def);
        record.name = widget.name;
        record.sealed = true;
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&WidgetRecord> {
        self.widgets.get(path)
    }

    /// Materialize the registration descriptor for one widget class.
    pub fn definition(&self, path: &str) -> Result<WidgetDefinition, NodeError> {
        let record = self.get(path).ok_or_else(|| NodeError::WidgetNotFound {
            path: path.to_string(),
        })?;

        record.definition(path)
    }

    /// All finalized widget definitions, for host enumeration.
    pub fn definitions(&self) -> impl Iterator<Item = (&str, WidgetDefinition)> {
        self.widgets
            .iter()
            .filter(|(_, record)| record.sealed)
            .filter_map(|(path, record)| Some((path.as_str(), record.definition(path).ok()?)))
    }

    pub fn widgets(&self) -> impl Iterator<Item = (&String, &WidgetRecord)> {
        self.widgets.iter()
    }
}

impl ValidateNode for Registry {}

impl VisitableNode for Registry {
    fn drive<V: Visitor>(&self, v: &mut V) {
        for (path, record) in &self.widgets {
            v.enter(path);
            record.accept(v);
            v.exit();
        }
    }
}

///
/// WidgetRecord
///
/// Per-class registration table. Grows monotonically across member
/// annotations, then becomes immutable once the class-level definition
/// runs.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct WidgetRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub def: Option<Def>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,

    pub bindings: BTreeMap<&'static str, Binding>,

    pub sealed: bool,
}

impl WidgetRecord {
    #[must_use]
    /// Exported name once known: explicit, or the class ident.
    pub fn resolved_name(&self) -> Option<&'static str> {
        self.name.or_else(|| self.def.map(|def| def.ident))
    }

    /// Materialize the frozen descriptor; the table must be finalized.
    pub fn definition(&self, path: &str) -> Result<WidgetDefinition, NodeError> {
        let name = self
            .resolved_name()
            .filter(|_| self.sealed)
            .ok_or_else(|| NodeError::WidgetNotDefined {
                path: path.to_string(),
            })?;

        let bindings = self
            .bindings
            .values()
            .map(|binding| (binding.member, BindingDefinition::from_binding(binding)))
            .collect();

        Ok(WidgetDefinition { name, bindings })
    }
}

impl ValidateNode for WidgetRecord {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Some(name) = self.name {
            if name.is_empty() {
                err!(errs, "widget name cannot be empty");
            }
            if name.len() > crate::MAX_WIDGET_NAME_LEN {
                err!(
                    errs,
                    "widget name '{name}' exceeds max length {}",
                    crate::MAX_WIDGET_NAME_LEN
                );
            }
            if !name.is_ascii() {
                err!(errs, "widget name '{name}' must be ASCII");
            }
        }

        errs.result()
    }
}

impl VisitableNode for WidgetRecord {
    fn drive<V: Visitor>(&self, v: &mut V) {
        for node in self.bindings.values() {
            node.accept(v);
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    const DEF: Def = Def {
        module_path: "fixtures",
        ident: "Gauge",
    };

    #[test]
    fn first_binding_creates_table_lazily() {
        let mut registry = Registry::new();
        assert!(registry.get("fixtures::Gauge").is_none());

        registry
            .insert_binding(
                "fixtures::Gauge",
                Binding::new("temperature", BindingKind::Property),
            )
            .unwrap();

        let record = registry.get("fixtures::Gauge").unwrap();
        assert_eq!(record.bindings.len(), 1);
        assert!(!record.sealed);
    }

    #[test]
    fn rebinding_a_member_replaces_its_descriptor() {
        let mut registry = Registry::new();

        registry
            .insert_binding("fixtures::Gauge", Binding::new("status", BindingKind::Property))
            .unwrap();
        registry
            .insert_binding(
                "fixtures::Gauge",
                Binding {
                    name: Some("StatusValue"),
                    ..Binding::new("status", BindingKind::Property)
                },
            )
            .unwrap();

        let record = registry.get("fixtures::Gauge").unwrap();
        assert_eq!(record.bindings.len(), 1);
        assert_eq!(record.bindings["status"].resolved_name(), "StatusValue");
    }

    #[test]
    fn sealed_table_rejects_further_bindings() {
        let mut registry = Registry::new();
        registry.define(DEF, None);

        let err = registry
            .insert_binding(
                "fixtures::Gauge",
                Binding::new("late", BindingKind::Service),
            )
            .unwrap_err();

        assert!(matches!(err, NodeError::WidgetSealed { .. }));
    }

    #[test]
    fn zero_binding_widget_materializes_empty_table() {
        let mut registry = Registry::new();
        registry.define(
            Def {
                module_path: "fixtures",
                ident: "EmptyWidget",
            },
            Some("EmptyWidget"),
        );

        let definition = registry.definition("fixtures::EmptyWidget").unwrap();
        assert_eq!(definition.name, "EmptyWidget");
        assert!(definition.bindings.is_empty());
    }

    #[test]
    fn reregistering_a_widget_replaces_its_snapshot() {
        const FIRST: &[Binding] = &[Binding::new("level", BindingKind::Property)];
        const SECOND: &[Binding] = &[
            Binding::new("depth", BindingKind::Property),
            Binding::new("reset", BindingKind::Service),
        ];

        let mut registry = Registry::new();
        registry.register_widget(&Widget {
            def: DEF,
            name: None,
            bindings: FIRST,
        });
        registry.register_widget(&Widget {
            def: DEF,
            name: Some("GaugeTwo"),
            bindings: SECOND,
        });

        let definition = registry.definition("fixtures::Gauge").unwrap();
        assert_eq!(definition.name, "GaugeTwo");
        assert_eq!(definition.bindings.len(), 2);
        assert!(definition.bindings.contains_key("depth"));
        assert!(!definition.bindings.contains_key("level"));
    }

    #[test]
    fn reregistering_the_same_widget_is_a_no_op() {
        const BINDINGS: &[Binding] = &[Binding::new("level", BindingKind::Property)];
        let widget = Widget {
            def: DEF,
            name: Some("Gauge"),
            bindings: BINDINGS,
        };

        let mut registry = Registry::new();
        registry.register_widget(&widget);
        let first = registry.definition("fixtures::Gauge").unwrap();

        registry.register_widget(&widget);
        let second = registry.definition("fixtures::Gauge").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn redefinition_replaces_name_without_duplicating() {
        let mut registry = Registry::new();
        registry
            .insert_binding("fixtures::Gauge", Binding::new("level", BindingKind::Property))
            .unwrap();
        registry.define(DEF, Some("GaugeOne"));
        registry.define(DEF, Some("GaugeTwo"));

        let definition = registry.definition("fixtures::Gauge").unwrap();
        assert_eq!(definition.name, "GaugeTwo");
        assert_eq!(definition.bindings.len(), 1);
    }

    #[test]
    fn unfinalized_widget_has_no_definition() {
        let mut registry = Registry::new();
        registry
            .insert_binding("fixtures::Gauge", Binding::new("level", BindingKind::Property))
            .unwrap();

        let err = registry.definition("fixtures::Gauge").unwrap_err();
        assert!(matches!(err, NodeError::WidgetNotDefined { .. }));
    }

    #[test]
    fn name_defaults_to_class_ident() {
        let mut registry = Registry::new();
        registry.define(DEF, None);

        let definition = registry.definition("fixtures::Gauge").unwrap();
        assert_eq!(definition.name, "Gauge");
    }

    #[test]
    fn definitions_skip_unfinalized_records() {
        let mut registry = Registry::new();
        registry
            .insert_binding("fixtures::Pending", Binding::new("x", BindingKind::Property))
            .unwrap();
        registry.define(DEF, None);

        let paths: Vec<&str> = registry.definitions().map(|(path, _)| path).collect();
        assert_eq!(paths, vec!["fixtures::Gauge"]);
    }
}
