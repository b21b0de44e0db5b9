/// JavaScript backend
///
/// ES5-compatible output so the generated file drops into any bundler
/// setup: `var`, `hasOwnProperty`, `indexOf`, string concatenation.

use crate::language::Language;

/// Query-string helper emitted once at the top of every unit. Unused
/// parameter keys go in verbatim; values pass through encodeURIComponent.
const PROCESS_FUNC: &str = r#"function process(route, params, keys) {
  var query = [];
  for (var param in params) if (params.hasOwnProperty(param)) {
    if (keys.indexOf(param) === -1) {
      query.push(param + "=" + encodeURIComponent(params[param]));
    }
  }
  return query.length ? route + "?" + query.join("&") : route;
}
"#;

pub struct JavaScript;

impl Language for JavaScript {
    fn ext(&self) -> &'static str {
        "js"
    }

    fn runtime_helper(&self) -> &'static str {
        PROCESS_FUNC
    }

    fn function_header(&self, name: &str) -> String {
        format!("export function {}(params) {{", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::routes::Route;

    #[test]
    fn test_ext() {
        assert_eq!(JavaScript.ext(), "js");
    }

    #[test]
    fn test_helper_text() {
        let helper = JavaScript.runtime_helper();
        assert!(helper.starts_with("function process(route, params, keys) {"));
        assert!(helper.contains("encodeURIComponent(params[param])"));
        assert!(helper.contains("keys.indexOf(param) === -1"));
        assert!(helper.ends_with("}\n"));
    }

    #[test]
    fn test_static_route_function() {
        let js = JavaScript
            .generate(&[Route::new("status", "/status")], &Config::default())
            .unwrap();
        assert!(js.contains(
            "export function status_path(params) { return process('/status', params, []); }"
        ));
    }

    #[test]
    fn test_required_route_guards() {
        let js = JavaScript
            .generate(&[Route::new("user", "/users/:id")], &Config::default())
            .unwrap();
        assert!(js.contains(
            "export function user_path(params) { \
             if (!params.hasOwnProperty('id')) throw new Error(\"user_path: missing required parameter 'id'\"); \
             return process('/users/' + params.id, params, ['id']); }"
        ));
    }

    #[test]
    fn test_optional_route_function() {
        let js = JavaScript
            .generate(&[Route::new("page", "/pages/:slug(/:version)")], &Config::default())
            .unwrap();
        assert!(js.contains("(params.hasOwnProperty('version') ? '/' + params.version : '')"));
        assert!(js.contains("['slug', 'version']"));
    }
}
