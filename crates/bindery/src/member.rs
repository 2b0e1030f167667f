//! Opaque member slot types bound to host-managed signals and operations.

use crate::traits::EventKind;
use serde::{Deserialize, Serialize};

///
/// Event
///
/// An event slot. Widget code declares the slot and binds it with
/// `#[event]`; the host wires delivery at runtime.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Event;

impl EventKind for Event {}

///
/// Service
///
/// A service slot. The host dispatches invocations to the bound member by
/// its external name.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Service;
