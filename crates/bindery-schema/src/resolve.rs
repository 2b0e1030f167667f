//! Name resolution for member binding registration.
//!
//! The legacy surface lets callers pass an explicit external name and any
//! number of aspects as one argument list. The discrimination between
//! "first argument is a name" and "first argument is an aspect" happens
//! here, once, as a tagged-union dispatch; call sites never branch on it
//! themselves.

use crate::node::{Aspect, NodeError};

///
/// BindingArg
///

#[derive(Clone, Copy, Debug)]
pub enum BindingArg {
    /// Explicit external name; only valid as the first argument.
    Name(&'static str),
    Aspect(Aspect),
}

/// Split an argument list into the explicit external name (if any) and the
/// ordered aspect list. `None` means the external name defaults to the
/// member's own name. A name anywhere past the first position fails fast.
pub fn resolve_member_args(
    member: &'static str,
    args: &[BindingArg],
) -> Result<(Option<&'static str>, Vec<Aspect>), NodeError> {
    let (name, rest) = match args.first() {
        Some(BindingArg::Name(name)) => (Some(*name), &args[1..]),
        _ => (None, args),
    };

    if let Some(name) = name
        && name.is_empty()
    {
        return Err(NodeError::EmptyBindingName { member });
    }

    let mut aspects = Vec::with_capacity(rest.len());
    for arg in rest {
        match arg {
            BindingArg::Aspect(aspect) => aspects.push(*aspect),
            BindingArg::Name(_) => return Err(NodeError::MisplacedName { member }),
        }
    }

    Ok((name, aspects))
}

///
/// TESTS
///
