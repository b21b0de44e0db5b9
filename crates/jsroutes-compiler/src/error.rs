/// Error types for route helper generation

use std::path::PathBuf;

use jsroutes_parser::PatternError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenerateError>;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Route file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid route table in {file}: {source}")]
    RouteTable {
        file: PathBuf,
        source: serde_json::Error,
    },

    #[error("Route '{route}' has a malformed path '{path}': {source}")]
    MalformedPattern {
        route: String,
        path: String,
        source: PatternError,
    },

    #[error("Route name '{name}' cannot form a function name")]
    InvalidRouteName { name: String },

    #[error("Unknown casing style '{0}' (expected 'lower' or 'upper')")]
    UnknownCasingStyle(String),

    #[error("Unknown target language '{0}' (expected 'js' or 'ts')")]
    UnknownTarget(String),
}

impl GenerateError {
    pub fn malformed_pattern(
        route: impl Into<String>,
        path: impl Into<String>,
        source: PatternError,
    ) -> Self {
        GenerateError::MalformedPattern {
            route: route.into(),
            path: path.into(),
            source,
        }
    }

    pub fn route_table(file: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        GenerateError::RouteTable {
            file: file.into(),
            source,
        }
    }
}
