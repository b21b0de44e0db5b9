/// Runtime semantics of the generated helpers, modeled in Rust
///
/// Generated functions substitute path parameters by key presence and hand
/// query building to a `process` helper. The same semantics live here so
/// route behavior can be exercised without a JavaScript engine. Parameters
/// travel as an ordered slice of pairs because the query keeps the
/// mapping's insertion order.

use jsroutes_parser::{CompiledPattern, Segment};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use thiserror::Error;

/// Bytes encodeURIComponent leaves verbatim: ASCII alphanumerics plus
/// `-_.!~*'()`. Everything else percent-encodes per UTF-8 byte.
const URI_COMPONENT: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a query value the way `encodeURIComponent` does.
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, &URI_COMPONENT).to_string()
}

/// Mirror of the required-parameter guard emitted into generated code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("missing required parameter '{name}'")]
pub struct MissingParameter {
    pub name: String,
}

/// Append unused parameters as a query string.
///
/// Keys already consumed by the path are skipped; the rest render in the
/// order given, keys verbatim and values encoded. A fully consumed mapping
/// returns the route unchanged.
pub fn process(route: &str, params: &[(&str, &str)], keys: &[&str]) -> String {
    let query: Vec<String> = params
        .iter()
        .filter(|(name, _)| !keys.contains(name))
        .map(|(name, value)| format!("{}={}", name, encode_uri_component(value)))
        .collect();
    if query.is_empty() {
        route.to_string()
    } else {
        format!("{}?{}", route, query.join("&"))
    }
}

/// Build the URL a generated function would return for this pattern.
///
/// Required values substitute raw (the path is not encoded, matching the
/// emitted concatenation); an optional tail appears only when its key is
/// present; everything left over goes through [`process`].
pub fn resolve(
    pattern: &CompiledPattern<'_>,
    params: &[(&str, &str)],
) -> Result<String, MissingParameter> {
    let lookup = |name: &str| {
        params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    };

    let mut path = String::new();
    for segment in &pattern.segments {
        match segment {
            Segment::Literal(text) => {
                path.push('/');
                path.push_str(text);
            }
            Segment::Required(name) => {
                let value = lookup(name).ok_or_else(|| MissingParameter {
                    name: (*name).to_string(),
                })?;
                path.push('/');
                path.push_str(value);
            }
            Segment::OptionalTail(name) => {
                if let Some(value) = lookup(name) {
                    path.push('/');
                    path.push_str(value);
                }
            }
        }
    }

    Ok(process(&path, params, &pattern.param_keys))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsroutes_parser::parse;

    #[test]
    fn test_encode_unreserved_passthrough() {
        assert_eq!(encode_uri_component("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
    }

    #[test]
    fn test_encode_reserved() {
        assert_eq!(encode_uri_component("a b"), "a%20b");
        assert_eq!(encode_uri_component("a/b"), "a%2Fb");
        assert_eq!(encode_uri_component("k=v&x"), "k%3Dv%26x");
        assert_eq!(encode_uri_component("100%"), "100%25");
        assert_eq!(encode_uri_component("a+b"), "a%2Bb");
    }

    #[test]
    fn test_encode_non_ascii() {
        assert_eq!(encode_uri_component("über"), "%C3%BCber");
    }

    #[test]
    fn test_process_fully_consumed() {
        assert_eq!(process("/users/42", &[("id", "42")], &["id"]), "/users/42");
        assert_eq!(process("/status", &[], &[]), "/status");
    }

    #[test]
    fn test_process_unused_become_query() {
        let params = [("id", "42"), ("tab", "posts"), ("q", "a b")];
        assert_eq!(
            process("/users/42", &params, &["id"]),
            "/users/42?tab=posts&q=a%20b"
        );
    }

    #[test]
    fn test_process_keeps_mapping_order() {
        let params = [("z", "1"), ("a", "2")];
        assert_eq!(process("/x", &params, &[]), "/x?z=1&a=2");
    }

    #[test]
    fn test_resolve_required_and_optional() {
        let pattern = parse("/users/:id(/:format)").unwrap();
        assert_eq!(
            resolve(&pattern, &[("id", "42"), ("format", "json")]).unwrap(),
            "/users/42/json"
        );
        assert_eq!(resolve(&pattern, &[("id", "42")]).unwrap(), "/users/42");
    }

    #[test]
    fn test_resolve_missing_required() {
        let pattern = parse("/users/:id").unwrap();
        let err = resolve(&pattern, &[("tab", "posts")]).unwrap_err();
        assert_eq!(err, MissingParameter { name: "id".to_string() });
    }

    #[test]
    fn test_resolve_keeps_path_values_raw() {
        // Substitution mirrors the emitted concatenation, which does not
        // encode path values. Only query values are encoded.
        let pattern = parse("/files/:name").unwrap();
        assert_eq!(resolve(&pattern, &[("name", "a b")]).unwrap(), "/files/a b");
    }

    #[test]
    fn test_resolve_root() {
        let pattern = parse("/").unwrap();
        assert_eq!(resolve(&pattern, &[]).unwrap(), "/");
        assert_eq!(resolve(&pattern, &[("utm", "x")]).unwrap(), "/?utm=x");
    }
}
