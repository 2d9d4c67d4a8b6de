//! The "make all properties optional" transform.

mod engine;
mod mapped;

pub use engine::partial;
pub use mapped::{partial_from_deferred, partial_from_mapped_result};
