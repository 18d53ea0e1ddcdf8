//! CLI Commands
//!
//! All xoshiro-jump CLI commands organized as separate modules.

mod apply;
mod derive;
mod verify;

pub use apply::apply_jump;
pub use derive::{derive_constants, Format};
pub use verify::verify_mode;
