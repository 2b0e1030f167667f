use crate::node::{MemberBinding, MemberKind};
use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;

/// Emit a compile-time assertion per event member: the member's type must
/// implement `EventKind`, so incompatible event bindings are rejected at
/// the type-checking boundary rather than at runtime.
pub fn generate(members: &[MemberBinding]) -> TokenStream {
    let asserts = members.iter().filter_map(|member| {
        let MemberKind::Event(_) = &member.kind else {
            return None;
        };

        let ty = &member.ty;
        Some(quote_spanned! {ty.span()=>
            const _: fn() = || {
                fn assert_event_member<T: ::bindery::traits::EventKind>() {}
                assert_event_member::<#ty>();
            };
        })
    });

    quote!(#(#asserts)*)
}
