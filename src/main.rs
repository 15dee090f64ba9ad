use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use termcompat::cli::args::{read_command_line, tokenize};
use termcompat::cli::dispatch::{coerce_int, CommandSpec, CommandTemplate, ParameterSpec, Value};
use termcompat::cli::{dispatch, output};
use termcompat::compat;

fn main() {
    setup_logging();

    let commands = tokenize(&read_command_line());
    let template = build_template();
    if let Err(e) = dispatch(&template, &commands) {
        output::error(&e);
        std::process::exit(e.exit_code());
    }
}

/// The registry of every supported command. `--help` derives its listing
/// from this.
fn build_template() -> CommandTemplate {
    let mut template = CommandTemplate::new();
    template.register(
        "test-compability",
        CommandSpec {
            help: "prints lots of sample effects, so you can check which effects your \
                   terminal supports. Optionally add mode [0-3], to only print a subset \
                   of the samples.\n\t0 - font effects,\n\t1 - alternate fonts,\n\t2 - \
                   foreground color,\n\t3 - background color.",
            syntax: "--test-compability [number]",
            params: vec![ParameterSpec {
                coerce: coerce_int,
                validate: |value| matches!(value.as_int(), Some(0..=3)),
                required: false,
            }],
            callback: Box::new(|params| match params.first() {
                Some(Value::Int(mode)) => output::info(&compat::sample(*mode)),
                _ => {
                    for mode in 0..4 {
                        output::info(&compat::sample(mode));
                    }
                }
            }),
        },
    );
    template
}

fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(env_filter))
        .init();
}
