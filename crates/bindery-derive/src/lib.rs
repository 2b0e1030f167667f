//! Attribute macro that attaches binding metadata to widget classes.

mod helper;
mod imp;
mod node;
mod prelude;
mod validate;

use proc_macro::TokenStream;

/// Registers a widget class with the global binding registry.
///
/// Members annotated with `#[property]`, `#[service]`, or `#[event]` are
/// collected into the class registration table; the class itself is
/// finalized under `name` (or its own ident when `name` is omitted).
#[proc_macro_attribute]
pub fn widget(args: TokenStream, input: TokenStream) -> TokenStream {
    node::expand(args.into(), input.into())
        .unwrap_or_else(darling::Error::write_errors)
        .into()
}
