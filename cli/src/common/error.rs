//! Error handling utilities for the CLI.

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, SourceSpan};
use thiserror::Error;
use vistas::ElementKind;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[diagnostic(code(vistas::parse_element))]
    #[error("cannot parse {token:?} as {kind}")]
    Parse {
        #[source_code]
        src: String,

        #[label("not a valid element")]
        span: SourceSpan,

        token: String,
        kind: ElementKind,
    },

    #[diagnostic(
        code(vistas::remove),
        help("the container is unchanged; check the value against the input")
    )]
    #[error("cannot remove {value:?}")]
    Remove {
        value: String,
        #[source]
        source: vistas::Error,
    },

    #[diagnostic(code(vistas::view))]
    #[error(transparent)]
    View(#[from] vistas::Error),

    #[diagnostic(code(vistas::input))]
    #[error("{0}")]
    Input(String),
}

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError, no_color: bool) -> ! {
    let theme = if no_color {
        GraphicalTheme::unicode_nocolor()
    } else {
        GraphicalTheme::unicode()
    };
    let mut out = String::new();
    match GraphicalReportHandler::new_themed(theme).render_report(&mut out, &error) {
        Ok(()) => eprint!("{out}"),
        Err(_) => eprintln!("Error: {error}"),
    }
    std::process::exit(1);
}
