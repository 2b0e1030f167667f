use crate::prelude::*;

///
/// AspectArg
///
/// Open-ended `aspect(key = "...", value = "...")` attached to a property
/// annotation.
///

#[derive(Debug, FromMeta)]
pub struct AspectArg {
    pub key: LitStr,
    pub value: LitStr,
}

impl AspectArg {
    pub fn validate(&self) -> Result<(), DarlingError> {
        if self.key.value().is_empty() {
            return Err(DarlingError::custom("aspect key cannot be empty").with_span(&self.key));
        }

        Ok(())
    }

    pub fn schema_part(&self) -> TokenStream {
        let key = &self.key;
        let value = &self.value;

        quote! {
            ::bindery::schema::node::Aspect {
                key: #key,
                value: ::bindery::schema::node::AspectValue::Str(#value),
            }
        }
    }
}
