//! Miette-based error diagnostics for CLI error presentation.
//!
//! Renders configuration errors with the offending TOML snippet, a label at
//! the problematic location, and a help suggestion when one is known.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError, Error};
use crate::infrastructure::config::scan::{MAX_MIN_PROFIT, MAX_TOTAL_STAKE, MIN_TOTAL_STAKE};

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(arbradar::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// The configuration file content.
    #[source_code]
    pub src: NamedSource<String>,

    /// Byte offset and length of the problematic region, when known.
    #[label("here")]
    pub span: Option<SourceSpan>,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    /// Build a diagnostic for `error` raised while loading `src` from `path`.
    ///
    /// Returns `None` for errors that carry no useful location.
    #[must_use]
    pub fn from_error(path: &Path, src: &str, error: &Error) -> Option<Self> {
        let Error::Config(config_error) = error else {
            return None;
        };

        let (message, span, help) = match config_error {
            ConfigError::Parse(e) => (
                e.message().to_string(),
                e.span().map(|r| SourceSpan::from((r.start, r.end.saturating_sub(r.start)))),
                None,
            ),
            ConfigError::InvalidValue { field, reason } => (
                format!("invalid value for {field}: {reason}"),
                locate_key(src, field),
                help_for(field),
            ),
            ConfigError::MissingField { field } => (
                format!("missing required field: {field}"),
                locate_key(src, field),
                help_for(field),
            ),
            ConfigError::ReadFile(_) => return None,
        };

        Some(Self {
            message,
            src: NamedSource::new(path.display().to_string(), src.to_string()),
            span,
            help,
        })
    }

    /// Print the diagnostic to stderr using the installed miette handler.
    pub fn render(self) {
        eprintln!("{:?}", miette::Report::new(self));
    }
}

/// Span of the first `key = ...` assignment in `src`.
fn locate_key(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key) {
            if rest.trim_start().starts_with('=') {
                let start = offset + (line.len() - trimmed.len());
                let len = line.trim_end().len() - (line.len() - trimmed.len());
                return Some(SourceSpan::from((start, len)));
            }
        }
        offset += line.len();
    }
    None
}

fn help_for(field: &str) -> Option<String> {
    let help = match field {
        "total_stake" => {
            format!("total_stake must be between {MIN_TOTAL_STAKE} and {MAX_TOTAL_STAKE}")
        }
        "min_profit" => format!("min_profit must be between 0 and {MAX_MIN_PROFIT}"),
        "max_concurrent" => "use at least 1 concurrent fetch".to_string(),
        "format" => "use \"pretty\" or \"json\"".to_string(),
        "path" => "point source.path at an odds fixture JSON file".to_string(),
        _ => return None,
    };
    Some(help)
}
