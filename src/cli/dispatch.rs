//! Template-driven command dispatch
//!
//! The caller registers commands in a [`CommandTemplate`]; [`dispatch`]
//! validates tokenized input against it and runs the callbacks. Validation of
//! every command completes before the first callback executes, so an abort
//! partway through a run never leaves partial effects behind.

use tracing::{debug, instrument};

use crate::cli::args::Command;
use crate::cli::error::{DispatchError, DispatchResult};

/// A typed positional parameter, as handed to callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    /// Optional parameter that was absent from the input.
    None,
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Value::Int(n) => Some(n),
            _ => None,
        }
    }
}

/// Turn a raw string into a typed value; `None` signals a malformed input.
pub type CoercionFn = fn(&str) -> Option<Value>;

/// Accept or reject a successfully coerced value.
pub type ValidityFn = fn(&Value) -> bool;

/// Stock coercion: string to integer.
pub fn coerce_int(raw: &str) -> Option<Value> {
    raw.parse::<i64>().ok().map(Value::Int)
}

/// Stock coercion: string to float.
pub fn coerce_float(raw: &str) -> Option<Value> {
    raw.parse::<f64>().ok().map(Value::Float)
}

/// Stock coercion: pass the string through unchanged.
pub fn coerce_text(raw: &str) -> Option<Value> {
    Some(Value::Text(raw.to_string()))
}

/// Declares how one positional parameter is typed and checked.
pub struct ParameterSpec {
    pub coerce: CoercionFn,
    pub validate: ValidityFn,
    pub required: bool,
}

/// Everything the dispatcher knows about one registered command.
pub struct CommandSpec {
    pub help: &'static str,
    pub syntax: &'static str,
    pub params: Vec<ParameterSpec>,
    pub callback: Box<dyn Fn(&[Value])>,
}

/// Registry of supported commands. Backed by an ordered list of pairs so the
/// help listing iterates in definition order.
#[derive(Default)]
pub struct CommandTemplate {
    entries: Vec<(String, CommandSpec)>,
}

impl CommandTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, spec: CommandSpec) {
        self.entries.push((name.into(), spec));
    }

    fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, spec)| spec)
    }

    /// Print the help listing for every registered command, in definition
    /// order, to stdout.
    pub fn print_help(&self) {
        println!("Help:");
        for (name, spec) in &self.entries {
            println!("--{} - {}\n  Syntax: {}", name, spec.help, spec.syntax);
        }
    }
}

/// Validate one command's positional parameters against its spec, returning
/// the typed values in declaration order.
fn validate_parameters(name: &str, spec: &CommandSpec, command: &Command) -> DispatchResult<Vec<Value>> {
    let mut values = Vec::with_capacity(spec.params.len());
    for (index, param_spec) in spec.params.iter().enumerate() {
        let Some(raw) = command.params.get(index) else {
            if param_spec.required {
                return Err(DispatchError::MissingParameter {
                    command: name.to_string(),
                    syntax: spec.syntax.to_string(),
                });
            }
            values.push(Value::None);
            continue;
        };
        let Some(value) = (param_spec.coerce)(raw) else {
            return Err(DispatchError::TypeMismatch {
                command: name.to_string(),
                index,
                value: raw.clone(),
            });
        };
        if !(param_spec.validate)(&value) {
            return Err(DispatchError::FailedValidation {
                command: name.to_string(),
                index,
                value: raw.clone(),
            });
        }
        values.push(value);
    }
    Ok(values)
}

/// Validate every command against the template, then run the callbacks in
/// input order.
///
/// A `help` command anywhere in the input short-circuits: the help listing is
/// printed and nothing executes. Any validation error aborts the run before
/// any callback has fired.
#[instrument(skip(template, commands))]
pub fn dispatch(template: &CommandTemplate, commands: &[Command]) -> DispatchResult<()> {
    if commands.iter().any(|command| command.name == "help") {
        template.print_help();
        return Ok(());
    }

    let mut bound: Vec<(&CommandSpec, Vec<Value>)> = Vec::with_capacity(commands.len());
    for command in commands {
        let spec = template
            .lookup(&command.name)
            .ok_or_else(|| DispatchError::UnknownCommand(command.name.clone()))?;
        let values = validate_parameters(&command.name, spec, command)?;
        debug!("bound '--{}' with {:?}", command.name, values);
        bound.push((spec, values));
    }

    for (spec, values) in bound {
        (spec.callback)(&values);
    }
    Ok(())
}
