//! Pieces shared by every crate in the workspace: log setup and the small
//! response types that are not tied to an entity.

pub mod types;
pub mod utils;
