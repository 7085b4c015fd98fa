//! Remote option loading for the country selection.

mod list;
mod loader;
mod source;

pub use list::*;
pub use loader::*;
pub use source::*;
