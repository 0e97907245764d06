//! Data types for the grid prototype.

mod row;
mod selection;
mod styling;

pub use row::*;
pub use selection::*;
pub use styling::*;
