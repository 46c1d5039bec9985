//! Placeholder content catalog.
//!
//! All catalog data is fixture data compiled into the binary. This module
//! exposes the tagged item model, the fixtures grouped by page and the id
//! lookups pages use to turn a clicked item into a playable `Track`.

mod fixtures;
mod lookup;
mod model;

pub use fixtures::*;
pub use lookup::*;
pub use model::*;
