//! Resource identity management
//!
//! Every native handle or index must map to exactly one canonical wrapper
//! for as long as the handle is valid. The handle registries guarantee
//! that for pointer-identified resources; the lazy collections cover
//! resources the native layer exposes only as a count plus an indexed
//! accessor.

pub mod collection;
pub mod handle;

pub use collection::LazyCollection;
pub use handle::{HandleRegistry, HandleResource, ResourceCore};
