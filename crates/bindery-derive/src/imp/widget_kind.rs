use crate::prelude::*;

/// Emit the `WidgetKind` impl carrying the registry path and the resolved
/// exported name.
pub fn generate(ident: &Ident, widget_name: &str) -> TokenStream {
    quote! {
        impl ::bindery::traits::WidgetKind for #ident {
            const PATH: &'static str = concat!(module_path!(), "::", stringify!(#ident));
            const WIDGET_NAME: &'static str = #widget_name;
        }
    }
}
