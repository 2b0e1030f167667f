use crate::{
    node::{MemberBinding, MemberKind},
    prelude::*,
    validate,
};

/// Emit the synthetic accessor surface for a widget class.
///
/// All external reads and writes of property members funnel through this
/// impl, keyed by external name. Hook names from `can_bind`/`did_bind`
/// aspects are resolved to direct method calls here, at expansion time.
pub fn generate(ident: &Ident, members: &[MemberBinding]) -> Result<TokenStream, DarlingError> {
    let mut get_arms = Vec::new();
    let mut set_arms = Vec::new();
    let mut update_arms = Vec::new();

    for member in members {
        let MemberKind::Property(args) = &member.kind else {
            continue;
        };

        let field = &member.member;
        let ty = &member.ty;
        let external = member.external_name();

        get_arms.push(quote! {
            #external => ::bindery::__reexports::serde_json::to_value(&self.#field).ok(),
        });

        set_arms.push(quote! {
            #external => {
                self.#field = ::bindery::__reexports::serde_json::from_value::<#ty>(value)
                    .map_err(|e| ::bindery::types::PropertyError::Deserialize {
                        property: #external,
                        message: e.to_string(),
                    })?;
                Ok(())
            }
        });

        let can_bind = match &args.can_bind {
            Some(method) => {
                let hook = validate::hook_ident(method)?;
                quote! {
                    if !self.#hook(&candidate, info) {
                        return Ok(::bindery::types::BindingUpdate::Rejected);
                    }
                }
            }
            None => quote!(),
        };

        let did_bind = match &args.did_bind {
            Some(method) => {
                let hook = validate::hook_ident(method)?;
                quote!(self.#hook(previous, info);)
            }
            None => quote!(let _ = previous;),
        };

        update_arms.push(quote! {
            #external => {
                let candidate: #ty = ::bindery::__reexports::serde_json::from_value(value)
                    .map_err(|e| ::bindery::types::PropertyError::Deserialize {
                        property: #external,
                        message: e.to_string(),
                    })?;
                #can_bind
                let previous = ::core::mem::replace(&mut self.#field, candidate);
                #did_bind
                Ok(::bindery::types::BindingUpdate::Committed)
            }
        });
    }

    Ok(quote! {
        impl ::bindery::traits::PropertyAccess for #ident {
            fn get_property(&self, name: &str) -> Option<::bindery::types::Value> {
                match name {
                    #(#get_arms)*
                    _ => None,
                }
            }

            fn set_property(
                &mut self,
                name: &str,
                value: ::bindery::types::Value,
            ) -> Result<(), ::bindery::types::PropertyError> {
                match name {
                    #(#set_arms)*
                    _ => {
                        let _ = value;
                        Err(::bindery::types::PropertyError::UnknownProperty {
                            name: name.to_string(),
                        })
                    }
                }
            }

            fn update_property(
                &mut self,
                name: &str,
                value: ::bindery::types::Value,
                info: &::bindery::types::UpdateInfo,
            ) -> Result<::bindery::types::BindingUpdate, ::bindery::types::PropertyError> {
                match name {
                    #(#update_arms)*
                    _ => {
                        let _ = (value, info);
                        Err(::bindery::types::PropertyError::UnknownProperty {
                            name: name.to_string(),
                        })
                    }
                }
            }
        }
    })
}
