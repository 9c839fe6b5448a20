//! Shared value types for the bounce workspace.

mod types;

pub use types::{Bounds, Color};
