//! termcompat: ANSI escape sequence generation plus a small flag-grammar
//! command dispatcher, wired together in a terminal compatibility checker.

pub mod cli;
pub mod compat;
pub mod effects;
pub mod exitcode;
pub mod input;
pub mod util;

pub use effects::{apply_format, Effect, EffectCode};
