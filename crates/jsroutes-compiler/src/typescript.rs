/// TypeScript backend
///
/// Same expression grammar as the JavaScript backend with typed framing: a
/// `RouteParams` alias, a typed `process` helper and typed signatures.

use crate::language::Language;

const PROCESS_FUNC: &str = r#"type RouteParams = { [key: string]: string | number };

function process(route: string, params: RouteParams, keys: string[]): string {
  var query: string[] = [];
  for (var param in params) if (params.hasOwnProperty(param)) {
    if (keys.indexOf(param) === -1) {
      query.push(param + "=" + encodeURIComponent(params[param]));
    }
  }
  return query.length ? route + "?" + query.join("&") : route;
}
"#;

pub struct TypeScript;

impl Language for TypeScript {
    fn ext(&self) -> &'static str {
        "ts"
    }

    fn runtime_helper(&self) -> &'static str {
        PROCESS_FUNC
    }

    fn function_header(&self, name: &str) -> String {
        format!("export function {}(params: RouteParams): string {{", name)
    }
}
