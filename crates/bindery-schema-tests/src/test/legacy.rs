//! Coverage for the deprecated imperative registration surface. Each test
//! works against its own widget path so ordering on the shared registry
//! does not matter.

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use bindery::{
        legacy::{
            bind_runtime_property, bind_runtime_service, register_named_runtime_widget,
            register_runtime_widget,
        },
        prelude::*,
        schema::{
            Error,
            build::get_registry,
            node::{Def, NodeError},
            resolve::BindingArg,
        },
    };

    const GAUGE_DEF: Def = Def {
        module_path: "legacy_fixture",
        ident: "LegacyGauge",
    };
    const GAUGE_PATH: &str = "legacy_fixture::LegacyGauge";

    #[test]
    fn imperative_flow_matches_the_annotated_one() {
        bind_runtime_property(
            GAUGE_PATH,
            "spin",
            &[
                BindingArg::Name("Spin"),
                BindingArg::Aspect(can_bind("check_spin")),
            ],
        )
        .unwrap();
        bind_runtime_service(GAUGE_PATH, "reset", &[]).unwrap();
        register_named_runtime_widget(GAUGE_DEF, "LegacyGauge");

        let registry = get_registry().unwrap();
        let definition = registry.definition(GAUGE_PATH).unwrap();

        assert_eq!(definition.name, "LegacyGauge");
        assert_eq!(definition.bindings.len(), 2);

        let spin = &definition.bindings["spin"];
        assert_eq!(spin.external_name, "Spin");
        assert_eq!(spin.kind, BindingKind::Property);
        assert_eq!(spin.aspects.len(), 1);
        assert_eq!(spin.aspects[0].value.as_str(), Some("check_spin"));

        assert_eq!(definition.bindings["reset"].kind, BindingKind::Service);
        assert_eq!(definition.bindings["reset"].external_name, "reset");
    }

    #[test]
    fn unnamed_registration_uses_the_ident() {
        let def = Def {
            module_path: "legacy_fixture",
            ident: "SealedPanel",
        };
        register_runtime_widget(def);

        let registry = get_registry().unwrap();
        let definition = registry.definition("legacy_fixture::SealedPanel").unwrap();
        assert_eq!(definition.name, "SealedPanel");
    }

    #[test]
    fn binding_after_registration_fails() {
        let def = Def {
            module_path: "legacy_fixture",
            ident: "FrozenPanel",
        };
        register_runtime_widget(def);

        let err = bind_runtime_property("legacy_fixture::FrozenPanel", "late", &[]).unwrap_err();
        assert!(matches!(
            err,
            Error::NodeError(NodeError::WidgetSealed { .. })
        ));
    }

    #[test]
    fn name_argument_must_come_first() {
        let err = bind_runtime_property(
            "legacy_fixture::Misordered",
            "value",
            &[
                BindingArg::Aspect(did_bind("value_did_bind")),
                BindingArg::Name("Value"),
            ],
        )
        .unwrap_err();

        assert!(matches!(
            err,
            Error::NodeError(NodeError::MisplacedName { member: "value" })
        ));
    }

    #[test]
    fn reregistration_replaces_the_name() {
        let def = Def {
            module_path: "legacy_fixture",
            ident: "RenamePanel",
        };
        register_runtime_widget(def);
        register_named_runtime_widget(def, "RenamedPanel");

        let registry = get_registry().unwrap();
        let definition = registry.definition("legacy_fixture::RenamePanel").unwrap();
        assert_eq!(definition.name, "RenamedPanel");
        assert!(definition.bindings.is_empty());
    }

    #[test]
    fn rebinding_a_member_keeps_the_last_descriptor() {
        const PATH: &str = "legacy_fixture::Overwrite";

        bind_runtime_property(PATH, "status", &[]).unwrap();
        bind_runtime_property(PATH, "status", &[BindingArg::Name("StatusValue")]).unwrap();
        register_runtime_widget(Def {
            module_path: "legacy_fixture",
            ident: "Overwrite",
        });

        let registry = get_registry().unwrap();
        let definition = registry.definition(PATH).unwrap();
        assert_eq!(definition.bindings.len(), 1);
        assert_eq!(definition.bindings["status"].external_name, "StatusValue");
    }
}
