//! Deprecated registration entry points.
//!
//! Kept as name-preserving aliases for widget code written against the old
//! imperative surface. They delegate to the same registry operations as
//! the `#[widget]` macro and must not fork behavior.

use crate::schema::{
    Error,
    build::registry_write,
    node::{Binding, BindingKind, Def},
    resolve::{BindingArg, resolve_member_args},
};

/// Finalize a widget class under its own ident.
#[deprecated(note = "use the #[widget] attribute")]
pub fn register_runtime_widget(def: Def) {
    registry_write().define(def, None);
}

/// Finalize a widget class under an explicit exported name.
#[deprecated(note = "use the #[widget] attribute")]
pub fn register_named_runtime_widget(def: Def, name: &'static str) {
    registry_write().define(def, Some(name));
}

/// Bind a member to a property definition.
#[deprecated(note = "use #[property] inside a #[widget] block")]
pub fn bind_runtime_property(
    widget_path: &str,
    member: &'static str,
    args: &[BindingArg],
) -> Result<(), Error> {
    bind_member(widget_path, member, BindingKind::Property, args)
}

/// Bind a member to a service definition.
#[deprecated(note = "use #[service] inside a #[widget] block")]
pub fn bind_runtime_service(
    widget_path: &str,
    member: &'static str,
    args: &[BindingArg],
) -> Result<(), Error> {
    bind_member(widget_path, member, BindingKind::Service, args)
}

fn bind_member(
    widget_path: &str,
    member: &'static str,
    kind: BindingKind,
    args: &[BindingArg],
) -> Result<(), Error> {
    let (name, aspects) = resolve_member_args(member, args)?;

    let binding = Binding {
        member,
        name,
        kind,
        aspects: aspects.into(),
    };
    registry_write().insert_binding(widget_path, binding)?;

    Ok(())
}
