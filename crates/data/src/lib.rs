//! Card files and rule config loading.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
