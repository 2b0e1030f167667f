pub mod definition;
pub mod legacy;
