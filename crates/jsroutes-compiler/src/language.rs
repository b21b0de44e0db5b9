/// Language backend seam and the shared expression renderer
///
/// A backend supplies syntax only (file suffix, runtime helper text,
/// function header); turning segments into a path-construction expression
/// is shared, so a new target language implements three methods.

use jsroutes_parser::{CompiledPattern, Segment, parse};
use tracing::debug;

use crate::config::{Config, camelize};
use crate::error::{GenerateError, Result};
use crate::routes::Route;

pub trait Language {
    /// File suffix the generated unit should be saved under.
    fn ext(&self) -> &'static str;

    /// Runtime helper emitted once at the top of the unit. Ends with its
    /// own newline, so the join below leaves a blank line after it.
    fn runtime_helper(&self) -> &'static str;

    /// Function header up to and including the opening brace.
    fn function_header(&self, name: &str) -> String;

    /// One route function on a single line: required-parameter guards, then
    /// the path expression handed to `process` with the consumed-key list.
    fn route_function(&self, name: &str, pattern: &CompiledPattern<'_>) -> String {
        format!(
            "{} {}return process({}, params, [{}]); }}",
            self.function_header(name),
            render_guards(name, pattern),
            render_path_expr(pattern),
            render_keys(pattern),
        )
    }

    /// Emit the full unit for a route set: the runtime helper, then one
    /// function per route in table order, joined by single newlines and
    /// newline-terminated. Any bad route fails the whole run.
    fn generate(&self, routes: &[Route], config: &Config) -> Result<String> {
        let mut parts = vec![self.runtime_helper().to_string()];
        for route in routes {
            if !is_identifier(&route.name) {
                return Err(GenerateError::InvalidRouteName {
                    name: route.name.clone(),
                });
            }
            let pattern = parse(&route.path).map_err(|source| {
                GenerateError::malformed_pattern(&route.name, &route.path, source)
            })?;
            let name = function_name(&route.name, config);
            debug!(route = %route.name, function = %name, "compiled route");
            parts.push(self.route_function(&name, &pattern));
        }
        Ok(parts.join("\n") + "\n")
    }
}

/// Derive the exported function name from a route name: a `_path` suffix,
/// then the configured casing transform if any.
pub fn function_name(route_name: &str, config: &Config) -> String {
    let name = format!("{}_path", route_name);
    match config.camelize {
        Some(style) => camelize(&name, style),
        None => name,
    }
}

/// Render the path-construction expression for a pattern.
///
/// Literal runs collapse into one quoted string carrying their leading
/// separators; a required parameter flushes the run with its trailing slash
/// and appends `params.<name>`; an optional tail appends a parenthesized
/// conditional so the separator vanishes with the parameter. An empty
/// pattern renders as `''`.
pub fn render_path_expr(pattern: &CompiledPattern<'_>) -> String {
    let mut terms: Vec<String> = Vec::new();
    let mut literal = String::new();

    for segment in &pattern.segments {
        match segment {
            Segment::Literal(text) => {
                literal.push('/');
                literal.push_str(text);
            }
            Segment::Required(name) => {
                literal.push('/');
                terms.push(quote(&literal));
                literal.clear();
                terms.push(format!("params.{}", name));
            }
            Segment::OptionalTail(name) => {
                if !literal.is_empty() {
                    terms.push(quote(&literal));
                    literal.clear();
                }
                terms.push(format!(
                    "(params.hasOwnProperty('{}') ? '/' + params.{} : '')",
                    name, name
                ));
            }
        }
    }

    if !literal.is_empty() {
        terms.push(quote(&literal));
    }
    if terms.is_empty() {
        return "''".to_string();
    }
    terms.join(" + ")
}

fn render_guards(name: &str, pattern: &CompiledPattern<'_>) -> String {
    let mut guards = String::new();
    for key in pattern.required_keys() {
        guards.push_str(&format!(
            "if (!params.hasOwnProperty('{}')) throw new Error(\"{}: missing required parameter '{}'\"); ",
            key, name, key
        ));
    }
    guards
}

fn render_keys(pattern: &CompiledPattern<'_>) -> String {
    pattern
        .param_keys
        .iter()
        .map(|key| format!("'{}'", key))
        .collect::<Vec<_>>()
        .join(", ")
}

fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CasingStyle;

    fn expr(path: &str) -> String {
        render_path_expr(&parse(path).unwrap())
    }

    #[test]
    fn test_render_literal_only() {
        assert_eq!(expr("/status"), "'/status'");
        assert_eq!(expr("/admin/users"), "'/admin/users'");
        assert_eq!(expr("/"), "'/'");
        assert_eq!(expr(""), "''");
    }

    #[test]
    fn test_render_required() {
        assert_eq!(expr("/users/:id"), "'/users/' + params.id");
        assert_eq!(expr("/a/:b/:c"), "'/a/' + params.b + '/' + params.c");
        assert_eq!(expr("/:id"), "'/' + params.id");
    }

    #[test]
    fn test_render_optional_tail() {
        assert_eq!(
            expr("/users/:id(/:format)"),
            "'/users/' + params.id + (params.hasOwnProperty('format') ? '/' + params.format : '')"
        );
    }

    #[test]
    fn test_render_leading_group() {
        assert_eq!(
            expr("(/:locale)/about"),
            "(params.hasOwnProperty('locale') ? '/' + params.locale : '') + '/about'"
        );
    }

    #[test]
    fn test_render_preserves_empty_chunks() {
        assert_eq!(expr("/users//edit"), "'/users//edit'");
        assert_eq!(expr("/users/"), "'/users/'");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("it's"), "'it\\'s'");
        assert_eq!(quote("a\\b"), "'a\\\\b'");
    }

    #[test]
    fn test_function_name_styles() {
        let mut config = Config::default();
        assert_eq!(function_name("admin_user", &config), "admin_user_path");
        config.camelize = Some(CasingStyle::Lower);
        assert_eq!(function_name("admin_user", &config), "adminUserPath");
        config.camelize = Some(CasingStyle::Upper);
        assert_eq!(function_name("admin_user", &config), "AdminUserPath");
    }

    #[test]
    fn test_identifier_check() {
        assert!(is_identifier("user"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("v2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("9lives"));
        assert!(!is_identifier("user-profile"));
    }
}
