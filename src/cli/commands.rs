//! CLI command implementations
//!
//! All command functions return `CliResult<String>` holding what should be printed, instead of
//! printing or calling `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use crate::lexer::{self, Token};
use crate::parser::{self, ParseOptions};

use super::{CliError, CliResult};

/// Maximum source file size accepted by the CLI (16 MiB).
const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Filename reported for expressions given on the command line.
const EXPR_FILENAME: &str = "<expr>";

/// Read a source file, rejecting oversized inputs.
pub fn read_source(file_path: &str) -> CliResult<String> {
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Tokenize a file and render one token per line.
pub fn tokens_file(file_path: &str) -> CliResult<String> {
    let source = read_source(file_path)?;
    tokens_source(file_path, &source)
}

/// Render the token stream of `source` as `line: spelling` rows.
pub fn tokens_source(filename: &str, source: &str) -> CliResult<String> {
    let tokens = lexer::lex(filename, source).map_err(CliError::diagnostic)?;
    Ok(render_tokens(&tokens))
}

fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|t| format!("{:>4}: {}\n", t.line, t)).collect()
}

/// Parse a file and render its AST.
pub fn parse_file(file_path: &str, options: &ParseOptions) -> CliResult<String> {
    let source = read_source(file_path)?;
    let file = parser::parse_source(file_path, &source, options).map_err(CliError::diagnostic)?;
    tracing::debug!(declarations = file.declarations.len(), "parsed file");
    Ok(format!("{:#?}\n", file))
}

/// Parse a single expression and render its AST.
pub fn parse_expr_source(source: &str, options: &ParseOptions) -> CliResult<String> {
    let tokens = lexer::lex(EXPR_FILENAME, source).map_err(CliError::diagnostic)?;
    let expr = parser::parse_expr(EXPR_FILENAME, &tokens, options).map_err(CliError::diagnostic)?;
    Ok(format!("{:#?}\n", expr))
}
