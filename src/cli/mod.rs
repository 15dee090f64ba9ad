//! CLI layer: argument tokenization and command dispatch

pub mod args;
pub mod dispatch;
pub mod error;
pub mod output;

pub use args::{tokenize, Command};
pub use dispatch::{dispatch, CommandSpec, CommandTemplate, ParameterSpec, Value};
pub use error::{DispatchError, DispatchResult};
