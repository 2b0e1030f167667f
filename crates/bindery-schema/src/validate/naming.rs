use crate::{node::Registry, prelude::*};
use std::collections::BTreeMap;

/// Reject two widget classes exporting the same name.
pub fn validate_widget_naming(registry: &Registry, errs: &mut ErrorTree) {
    let mut by_name: BTreeMap<&str, &str> = BTreeMap::new();

    for (path, record) in registry.widgets() {
        let Some(name) = record.resolved_name() else {
            continue;
        };

        if let Some(prev) = by_name.insert(name, path) {
            err!(
                errs,
                "duplicate widget name '{name}' for '{prev}' and '{path}'"
            );
        }
    }
}

/// Reject two members of one widget binding the same external name.
pub fn validate_binding_naming(registry: &Registry, errs: &mut ErrorTree) {
    for (path, record) in registry.widgets() {
        let mut by_external: BTreeMap<&str, &str> = BTreeMap::new();

        for binding in record.bindings.values() {
            let external = binding.resolved_name();

            if let Some(prev) = by_external.insert(external, binding.member) {
                err!(
                    errs,
                    "duplicate external name '{external}' in widget '{path}' for members '{prev}' and '{}'",
                    binding.member
                );
            }
        }
    }
}

///
/// TESTS
///
