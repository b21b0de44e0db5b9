/// Route helper generator
///
/// Turns a Rails-style route table into JavaScript or TypeScript URL
/// helpers: one function per route plus a shared query-string runtime,
/// concatenated into a single source file.

pub mod config;
pub mod driver;
pub mod error;
pub mod javascript;
pub mod language;
pub mod routes;
pub mod runtime;
pub mod typescript;

pub use config::{CasingStyle, Config, camelize};
pub use driver::{GenerateOptions, GenerateOutput, Generator, Target};
pub use error::{GenerateError, Result};
pub use javascript::JavaScript;
pub use language::{Language, function_name, render_path_expr};
pub use routes::{Route, parse_routes};
pub use typescript::TypeScript;
