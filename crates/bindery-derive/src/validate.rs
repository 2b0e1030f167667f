use crate::prelude::*;
use bindery_schema::{MAX_MEMBER_NAME_LEN, MAX_WIDGET_NAME_LEN};

/// Validate and return the resolved widget name for downstream codegen.
pub fn validate_widget_name(
    name: Option<&LitStr>,
    def_ident: &Ident,
) -> Result<String, DarlingError> {
    // Prefer explicit name override when provided.
    if let Some(name) = name {
        let value = name.value();
        if value.is_empty() {
            return Err(DarlingError::custom("widget name cannot be empty").with_span(name));
        }
        if value.len() > MAX_WIDGET_NAME_LEN {
            return Err(DarlingError::custom(format!(
                "widget name '{value}' exceeds max length {MAX_WIDGET_NAME_LEN}"
            ))
            .with_span(name));
        }
        if !value.is_ascii() {
            return Err(
                DarlingError::custom(format!("widget name '{value}' must be ASCII"))
                    .with_span(name),
            );
        }

        return Ok(value);
    }

    // Fall back to the struct identifier.
    let value = def_ident.to_string();
    if value.len() > MAX_WIDGET_NAME_LEN {
        return Err(DarlingError::custom(format!(
            "widget name '{value}' exceeds max length {MAX_WIDGET_NAME_LEN}"
        ))
        .with_span(def_ident));
    }

    Ok(value)
}

/// Validate an explicit external name on a member annotation.
pub fn validate_external_name(name: &LitStr) -> Result<(), DarlingError> {
    let value = name.value();

    if value.is_empty() {
        return Err(DarlingError::custom("external name cannot be empty").with_span(name));
    }
    if value.len() > MAX_MEMBER_NAME_LEN {
        return Err(DarlingError::custom(format!(
            "external name '{value}' exceeds max length {MAX_MEMBER_NAME_LEN}"
        ))
        .with_span(name));
    }
    if !value.is_ascii() {
        return Err(
            DarlingError::custom(format!("external name '{value}' must be ASCII")).with_span(name),
        );
    }

    Ok(())
}

/// Resolve a hook name literal to a method ident.
pub fn hook_ident(method: &LitStr) -> Result<Ident, DarlingError> {
    syn::parse_str::<Ident>(&method.value()).map_err(|_| {
        DarlingError::custom(format!(
            "'{}' is not a valid method name",
            method.value()
        ))
        .with_span(method)
    })
}
