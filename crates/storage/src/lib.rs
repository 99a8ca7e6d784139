//! Where downloaded course files go, and what they're called.

pub mod error;
mod local;
mod naming;
mod path;

pub use crate::local::LocalBackend;
pub use crate::naming::{STEM_LIMIT, file_name, slug};
pub use crate::path::validate as validate_path;
