//! ## Crate layout
//! - `legacy`: deprecated registration entry points kept for older widget code.
//! - `member`: opaque member slot types (`Event`, `Service`).
//! - `schema`: binding metadata nodes, registry, and validation (re-export).
//! - `traits`: author- and host-facing traits (`WidgetKind`, `PropertyAccess`).
//! - `types`: host contract types (`UpdateInfo`, `BindingUpdate`, errors).
//!
//! The `prelude` module mirrors the surface used inside widget code.

pub use bindery_schema as schema;

pub mod legacy;
pub mod member;
pub mod traits;
pub mod types;

mod error;

pub use error::Error;

// export so things just work inside this crate's own code
extern crate self as bindery;

/// re-exports
///
/// macros can use these, stops the user having to specify all the dependencies
/// in the Cargo.toml file manually
pub mod __reexports {
    pub use ctor;
    pub use serde;
    pub use serde_json;
}

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use bindery_derive::widget;

pub use schema::node::{can_bind, did_bind};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        can_bind, did_bind,
        member::{Event, Service},
        schema::node::{
            Aspect, AspectValue, BindingDefinition, BindingKind, WidgetDefinition,
        },
        traits::{EventKind, PropertyAccess, WidgetKind},
        types::{BindingUpdate, PropertyError, UpdateInfo, Value},
        widget,
    };
    pub use serde::{Deserialize, Serialize};
}
