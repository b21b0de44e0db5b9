/// Generation driver that orchestrates the pipeline
///
/// Reads the route table file, filters it, hands the survivors to the
/// selected language backend and returns the generated unit.

use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{GenerateError, Result};
use crate::javascript::JavaScript;
use crate::language::Language;
use crate::routes::{Route, parse_routes};
use crate::typescript::TypeScript;

/// Target language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target {
    #[default]
    JavaScript,
    TypeScript,
}

impl Target {
    pub fn language(&self) -> &'static dyn Language {
        match self {
            Target::JavaScript => &JavaScript,
            Target::TypeScript => &TypeScript,
        }
    }
}

impl FromStr for Target {
    type Err = GenerateError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "js" | "javascript" => Ok(Target::JavaScript),
            "ts" | "typescript" => Ok(Target::TypeScript),
            other => Err(GenerateError::UnknownTarget(other.to_string())),
        }
    }
}

/// Options for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Route table JSON file
    pub input: PathBuf,
    /// Target language
    pub target: Target,
    /// Casing and filtering configuration
    pub config: Config,
}

impl GenerateOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            target: Target::default(),
            config: Config::default(),
        }
    }

    pub fn target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }
}

/// Output of a generation run.
#[derive(Debug)]
pub struct GenerateOutput {
    /// Route table file the run consumed
    pub source_file: PathBuf,
    /// Routes that survived filtering, in table order
    pub routes: Vec<Route>,
    /// Generated source text
    pub code: String,
    /// File suffix the code should be saved under
    pub ext: &'static str,
}

/// The route helper generator.
pub struct Generator {
    options: GenerateOptions,
}

impl Generator {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Run the full pipeline: read the table, filter, emit.
    pub fn generate(&self) -> Result<GenerateOutput> {
        let json = self.read_table()?;
        let all = parse_routes(&json)
            .map_err(|source| GenerateError::route_table(&self.options.input, source))?;

        let total = all.len();
        let routes: Vec<Route> = all
            .into_iter()
            .filter(|route| self.options.config.keep(route))
            .collect();
        debug!(total, kept = routes.len(), "filtered route table");

        let language = self.options.target.language();
        let code = language.generate(&routes, &self.options.config)?;
        info!(routes = routes.len(), ext = language.ext(), "generated route helpers");

        Ok(GenerateOutput {
            source_file: self.options.input.clone(),
            routes,
            code,
            ext: language.ext(),
        })
    }

    fn read_table(&self) -> Result<String> {
        if !self.options.input.exists() {
            return Err(GenerateError::FileNotFound(self.options.input.clone()));
        }
        std::fs::read_to_string(&self.options.input).map_err(GenerateError::from)
    }
}
