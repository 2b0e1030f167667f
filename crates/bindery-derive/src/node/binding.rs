use crate::{node::AspectArg, prelude::*, validate};
use syn::Type;

///
/// PropertyArgs
///
/// `#[property]`, `#[property(name = "...")]`, with optional binding
/// aspects.
///

#[derive(Debug, Default, FromMeta)]
#[darling(default)]
pub struct PropertyArgs {
    pub name: Option<LitStr>,

    /// Method invoked with the candidate value before an externally driven
    /// update commits; returning `false` discards the update.
    pub can_bind: Option<LitStr>,

    /// Method invoked with the previous value after an externally driven
    /// update has committed.
    pub did_bind: Option<LitStr>,

    #[darling(multiple, rename = "aspect")]
    pub aspects: Vec<AspectArg>,
}

///
/// ServiceArgs
///

#[derive(Debug, Default, FromMeta)]
#[darling(default)]
pub struct ServiceArgs {
    pub name: Option<LitStr>,
}

///
/// EventArgs
///

#[derive(Debug, Default, FromMeta)]
#[darling(default)]
pub struct EventArgs {
    pub name: Option<LitStr>,
}

///
/// MemberKind
///

#[derive(Debug)]
pub enum MemberKind {
    Property(PropertyArgs),
    Service(ServiceArgs),
    Event(EventArgs),
}

///
/// MemberBinding
///
/// One annotated class member, harvested from the struct body.
///

#[derive(Debug)]
pub struct MemberBinding {
    pub member: Ident,
    pub ty: Type,
    pub kind: MemberKind,
}

impl MemberBinding {
    pub fn explicit_name(&self) -> Option<&LitStr> {
        match &self.kind {
            MemberKind::Property(args) => args.name.as_ref(),
            MemberKind::Service(args) => args.name.as_ref(),
            MemberKind::Event(args) => args.name.as_ref(),
        }
    }

    /// External name the host will see for this member.
    pub fn external_name(&self) -> String {
        self.explicit_name()
            .map_or_else(|| self.member.to_string(), LitStr::value)
    }

    pub fn validate(&self) -> Result<(), DarlingError> {
        if let Some(name) = self.explicit_name() {
            validate::validate_external_name(name)?;
        }

        if let MemberKind::Property(args) = &self.kind {
            for aspect in &args.aspects {
                aspect.validate()?;
            }
        }

        Ok(())
    }

    pub fn schema_part(&self) -> TokenStream {
        let member = self.member.to_string();
        let name = quote_option(self.explicit_name(), |lit| quote!(#lit));
        let kind = self.kind_part();
        let aspects = self.aspects_part();

        quote! {
            ::bindery::schema::node::Binding {
                member: #member,
                name: #name,
                kind: #kind,
                aspects: #aspects,
            }
        }
    }

    fn kind_part(&self) -> TokenStream {
        let variant = match &self.kind {
            MemberKind::Property(_) => format_ident!("Property"),
            MemberKind::Service(_) => format_ident!("Service"),
            MemberKind::Event(_) => format_ident!("Event"),
        };

        quote!(::bindery::schema::node::BindingKind::#variant)
    }

    // Well-known aspects first, declaration order for the open-ended rest.
    fn aspects_part(&self) -> TokenStream {
        let MemberKind::Property(args) = &self.kind else {
            return quote!(::bindery::schema::node::AspectList::EMPTY);
        };

        let mut parts = Vec::new();
        if let Some(method) = &args.can_bind {
            parts.push(quote!(::bindery::schema::node::can_bind(#method)));
        }
        if let Some(method) = &args.did_bind {
            parts.push(quote!(::bindery::schema::node::did_bind(#method)));
        }
        for aspect in &args.aspects {
            parts.push(aspect.schema_part());
        }

        if parts.is_empty() {
            return quote!(::bindery::schema::node::AspectList::EMPTY);
        }

        let slice = quote_slice(&parts, Clone::clone);
        quote!(::bindery::schema::node::AspectList::from_static(#slice))
    }
}
