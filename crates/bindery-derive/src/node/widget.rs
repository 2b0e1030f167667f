use crate::{
    imp,
    node::{MemberBinding, MemberKind},
    prelude::*,
    validate,
};
use convert_case::{Case, Casing};
use darling::ast::NestedMeta;
use syn::{Fields, ItemStruct, Meta};

///
/// WidgetArgs
///

#[derive(Debug, Default, FromMeta)]
#[darling(default)]
pub struct WidgetArgs {
    pub name: Option<LitStr>,
}

/// Expand `#[widget(...)]` on a struct into the original item plus its
/// schema constant, load-time registration, and generated trait impls.
pub fn expand(args: TokenStream, input: TokenStream) -> Result<TokenStream, DarlingError> {
    let attr_args = NestedMeta::parse_meta_list(args)?;
    let widget_args = WidgetArgs::from_list(&attr_args)?;

    let mut item: ItemStruct = syn::parse2(input).map_err(DarlingError::from)?;
    if !item.generics.params.is_empty() {
        return Err(
            DarlingError::custom("generic widget classes are not supported")
                .with_span(&item.generics),
        );
    }

    let members = harvest_members(&mut item)?;
    let widget_name = validate::validate_widget_name(widget_args.name.as_ref(), &item.ident)?;

    let ident = item.ident.clone();
    let widget_const = format_ident!("{}_WIDGET", ident.to_string().to_case(Case::UpperSnake));

    let name = quote_option(widget_args.name.as_ref(), |lit| quote!(#lit));
    let bindings = quote_slice(&members, MemberBinding::schema_part);

    let widget_kind = imp::widget_kind::generate(&ident, &widget_name);
    let property_access = imp::property_access::generate(&ident, &members)?;
    let event_asserts = imp::event_assert::generate(&members);

    Ok(quote! {
        #item

        // SCHEMA CONSTANT
        const #widget_const: ::bindery::schema::node::Widget = ::bindery::schema::node::Widget {
            def: ::bindery::schema::node::Def {
                module_path: module_path!(),
                ident: stringify!(#ident),
            },
            name: #name,
            bindings: #bindings,
        };

        #[::bindery::__reexports::ctor::ctor(anonymous, crate_path = ::bindery::__reexports::ctor)]
        unsafe fn __ctor() {
            ::bindery::schema::build::registry_write().register_widget(&#widget_const);
        }

        // IMPLEMENTATIONS
        #widget_kind

        #property_access

        #event_asserts
    })
}

// Collect member annotations, stripping them from the emitted struct.
// A member annotated more than once keeps only its last annotation.
fn harvest_members(item: &mut ItemStruct) -> Result<Vec<MemberBinding>, DarlingError> {
    let mut members = Vec::new();

    // unit and tuple structs legitimately expose zero bindings
    let Fields::Named(fields) = &mut item.fields else {
        return Ok(members);
    };

    for field in &mut fields.named {
        let Some(member) = field.ident.clone() else {
            continue;
        };
        let ty = field.ty.clone();
        let attrs = std::mem::take(&mut field.attrs);
        let mut binding: Option<MemberBinding> = None;

        for attr in attrs {
            let kind = match attr.path().get_ident().map(ToString::to_string).as_deref() {
                Some("property") => MemberKind::Property(parse_member_args(&attr.meta)?),
                Some("service") => MemberKind::Service(parse_member_args(&attr.meta)?),
                Some("event") => MemberKind::Event(parse_member_args(&attr.meta)?),
                _ => {
                    field.attrs.push(attr);
                    continue;
                }
            };

            binding = Some(MemberBinding {
                member: member.clone(),
                ty: ty.clone(),
                kind,
            });
        }

        if let Some(binding) = binding {
            binding.validate()?;
            members.push(binding);
        }
    }

    Ok(members)
}

// Bare `#[property]` arrives as a plain path; everything else goes through
// darling.
fn parse_member_args<T: FromMeta + Default>(meta: &Meta) -> Result<T, DarlingError> {
    match meta {
        Meta::Path(_) => Ok(T::default()),
        _ => T::from_meta(meta),
    }
}
