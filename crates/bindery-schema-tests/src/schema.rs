use crate::prelude::*;

///
/// Gauge
///
/// Kitchen-sink widget: explicit widget name, plain and renamed properties,
/// hook-guarded property, event and service members, plus a plain field the
/// binding surface must leave alone.
///

#[widget(name = "TemperatureGauge")]
#[derive(Clone, Debug, Default)]
pub struct Gauge {
    #[property]
    pub temperature: f64,

    #[property(can_bind = "validate_level", did_bind = "level_did_bind")]
    pub level: f64,

    #[property(name = "Status")]
    pub status: String,

    #[event(name = "AlarmRaised")]
    pub on_alarm: Event,

    #[service(name = "Reset")]
    pub reset: Service,

    pub observed_previous: Option<f64>,
}

impl Gauge {
    fn validate_level(&self, candidate: &f64, _info: &UpdateInfo) -> bool {
        (0.0..=100.0).contains(candidate)
    }

    fn level_did_bind(&mut self, previous: f64, _info: &UpdateInfo) {
        self.observed_previous = Some(previous);
    }
}

///
/// StatusPanel
///
/// No explicit widget name, so the exported name falls back to the ident.
///

#[widget]
#[derive(Clone, Debug, Default)]
pub struct StatusPanel {
    #[property]
    pub message: String,

    #[property(aspect(key = "defaultValue", value = "idle"))]
    pub mode: String,
}

///
/// EmptyPanel
///

#[widget(name = "EmptyWidget")]
#[derive(Clone, Debug, Default)]
pub struct EmptyPanel {}
