//! Author- and host-facing traits implemented by the `#[widget]` macro.

use crate::{
    Error,
    schema::{build::get_registry, node::WidgetDefinition},
    types::{BindingUpdate, PropertyError, UpdateInfo, Value},
};

///
/// WidgetKind
///
/// Implemented for every registered widget class.
///

pub trait WidgetKind {
    /// Registry path uniquely identifying the class.
    const PATH: &'static str;

    /// Exported widget name (explicit, or the class ident).
    const WIDGET_NAME: &'static str;

    /// Materialized registration descriptor for this widget class.
    fn definition() -> Result<WidgetDefinition, Error> {
        let registry = get_registry()?;
        let definition = registry
            .definition(Self::PATH)
            .map_err(crate::schema::Error::from)?;

        Ok(definition)
    }
}

///
/// EventKind
///
/// Marker for types that can back an event member. Event bindings are
/// rejected at compile time unless the member type implements this.
///

pub trait EventKind {}

///
/// PropertyAccess
///
/// Synthetic accessor surface generated for every widget class. All
/// external reads and writes of property members funnel through these
/// methods, keyed by external name.
///

pub trait PropertyAccess {
    /// Read a bound property.
    fn get_property(&self, name: &str) -> Option<Value>;

    /// Write a bound property directly, bypassing binding hooks.
    fn set_property(&mut self, name: &str, value: Value) -> Result<(), PropertyError>;

    /// Apply an externally driven update, honoring the property's binding
    /// aspects: the pre-update validator may reject the value, and the
    /// post-update notifier observes the previous value after commit.
    fn update_property(
        &mut self,
        name: &str,
        value: Value,
        info: &UpdateInfo,
    ) -> Result<BindingUpdate, PropertyError>;
}
