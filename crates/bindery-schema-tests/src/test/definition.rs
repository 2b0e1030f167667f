#[cfg(test)]
mod tests {
    use crate::schema::{EmptyPanel, Gauge, StatusPanel};
    use bindery::{
        prelude::*,
        schema::node::{ASPECT_POST_UPDATE_NOTIFIER, ASPECT_PRE_UPDATE_VALIDATOR},
    };

    #[test]
    fn widget_name_defaults_to_ident() {
        assert_eq!(StatusPanel::WIDGET_NAME, "StatusPanel");
    }

    #[test]
    fn widget_name_override_wins() {
        assert_eq!(Gauge::WIDGET_NAME, "TemperatureGauge");
        assert_eq!(EmptyPanel::WIDGET_NAME, "EmptyWidget");
    }

    #[test]
    fn path_is_module_qualified() {
        assert!(Gauge::PATH.ends_with("::schema::Gauge"));
        assert_ne!(Gauge::PATH, StatusPanel::PATH);
    }

    #[test]
    fn gauge_definition_lists_every_annotated_member() {
        let def = Gauge::definition().unwrap();

        assert_eq!(def.name, "TemperatureGauge");
        assert_eq!(def.bindings.len(), 5);

        let temperature = &def.bindings["temperature"];
        assert_eq!(temperature.kind, BindingKind::Property);
        assert_eq!(temperature.external_name, "temperature");
        assert!(temperature.aspects.is_empty());

        let status = &def.bindings["status"];
        assert_eq!(status.member_name, "status");
        assert_eq!(status.external_name, "Status");

        assert_eq!(def.bindings["on_alarm"].kind, BindingKind::Event);
        assert_eq!(def.bindings["on_alarm"].external_name, "AlarmRaised");
        assert_eq!(def.bindings["reset"].kind, BindingKind::Service);
        assert_eq!(def.bindings["reset"].external_name, "Reset");
    }

    #[test]
    fn unannotated_fields_are_not_bindings() {
        let def = Gauge::definition().unwrap();
        assert!(!def.bindings.contains_key("observed_previous"));
    }

    #[test]
    fn hook_aspects_are_ordered_and_keyed() {
        let def = Gauge::definition().unwrap();
        let aspects = &def.bindings["level"].aspects;

        assert_eq!(aspects.len(), 2);
        assert_eq!(aspects[0].key, ASPECT_PRE_UPDATE_VALIDATOR);
        assert_eq!(aspects[0].value.as_str(), Some("validate_level"));
        assert_eq!(aspects[1].key, ASPECT_POST_UPDATE_NOTIFIER);
        assert_eq!(aspects[1].value.as_str(), Some("level_did_bind"));
    }

    #[test]
    fn custom_aspects_survive_to_the_definition() {
        let def = StatusPanel::definition().unwrap();
        let aspects = &def.bindings["mode"].aspects;

        assert_eq!(aspects.len(), 1);
        assert_eq!(aspects[0].key, "defaultValue");
        assert_eq!(aspects[0].value.as_str(), Some("idle"));
    }

    #[test]
    fn empty_widget_has_no_bindings() {
        let def = EmptyPanel::definition().unwrap();
        assert_eq!(def.name, "EmptyWidget");
        assert!(def.bindings.is_empty());
    }

    #[test]
    fn definition_serializes_camel_case() {
        let def = Gauge::definition().unwrap();
        let json = serde_json::to_value(&def).unwrap();

        assert_eq!(json["name"], "TemperatureGauge");
        assert_eq!(json["bindings"]["level"]["memberName"], "level");
        assert_eq!(json["bindings"]["level"]["externalName"], "level");
        assert_eq!(json["bindings"]["level"]["kind"], "Property");
        assert_eq!(
            json["bindings"]["level"]["aspects"][0]["key"],
            "preUpdateValidator"
        );
        assert_eq!(
            json["bindings"]["level"]["aspects"][0]["value"],
            "validate_level"
        );
    }

    #[test]
    fn definitions_are_equal_across_calls() {
        assert_eq!(Gauge::definition().unwrap(), Gauge::definition().unwrap());
    }
}
