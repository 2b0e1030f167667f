pub use bindery::prelude::*;
