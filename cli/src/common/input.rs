//! Element input utilities.

use std::io::Read;

use vistas::{Element, ElementKind};

use super::{CliError, CliResult};

/// Read the element list from the argument, or from stdin if it is "-".
pub fn read_input(arg: &str) -> CliResult<String> {
    if !is_stdin(arg) {
        return Ok(arg.to_string());
    }
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .map_err(|e| CliError::Input(format!("<stdin>: {}", e)))?;
    Ok(content)
}

/// Check if the argument represents stdin.
pub fn is_stdin(arg: &str) -> bool {
    arg == "-"
}

/// Split comma-separated input into trimmed tokens with their byte offsets.
///
/// Blank input yields no tokens. Otherwise every comma separates a token,
/// so `"1,,2"` yields an empty middle token.
pub fn tokenize(input: &str) -> Vec<(usize, &str)> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    let mut tokens = Vec::new();
    let mut offset = 0;
    for piece in input.split(',') {
        let leading = piece.len() - piece.trim_start().len();
        tokens.push((offset + leading, piece.trim()));
        offset += piece.len() + 1;
    }
    tokens
}

/// Parse every token of `input` as a `T`, pointing at the first bad one.
pub fn parse_elements<T: Element>(input: &str) -> CliResult<Vec<T>> {
    tokenize(input)
        .into_iter()
        .map(|(offset, token)| {
            T::parse_element(token).map_err(|e| CliError::Parse {
                src: input.to_string(),
                span: (offset, token.len()).into(),
                token: e.token,
                kind: e.kind,
            })
        })
        .collect()
}

/// Parse a single value (e.g. a `--remove` argument) as a `T`.
///
/// The value is taken whole: text may be empty or contain commas, numbers
/// are trimmed first.
pub fn parse_value<T: Element>(value: &str) -> CliResult<T> {
    let token = match T::KIND {
        ElementKind::Text => value,
        ElementKind::Int | ElementKind::Float => value.trim(),
    };
    T::parse_element(token).map_err(|e| CliError::Parse {
        src: value.to_string(),
        span: (0, value.len()).into(),
        token: e.token,
        kind: e.kind,
    })
}
