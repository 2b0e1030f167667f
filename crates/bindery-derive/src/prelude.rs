pub use crate::helper::{quote_option, quote_slice};
pub use darling::{Error as DarlingError, FromMeta};
pub use proc_macro2::TokenStream;
pub use quote::{format_ident, quote};
pub use syn::{Ident, LitStr};
