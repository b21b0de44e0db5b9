/// Generation configuration
///
/// Casing and route filtering travel as an explicit value through the
/// driver and the language backends; nothing here is process-global.

use std::str::FromStr;

use regex::Regex;

use crate::error::GenerateError;
use crate::routes::Route;

/// Casing transform applied to generated function names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasingStyle {
    /// `admin_user_path` becomes `adminUserPath`
    Lower,
    /// `admin_user_path` becomes `AdminUserPath`
    Upper,
}

impl FromStr for CasingStyle {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lower" => Ok(CasingStyle::Lower),
            "upper" => Ok(CasingStyle::Upper),
            other => Err(GenerateError::UnknownCasingStyle(other.to_string())),
        }
    }
}

/// Camel-case a snake_case identifier.
pub fn camelize(name: &str, style: CasingStyle) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upcase_next = matches!(style, CasingStyle::Upper);
    for ch in name.chars() {
        if ch == '_' {
            upcase_next = true;
        } else if upcase_next {
            out.push(ch.to_ascii_uppercase());
            upcase_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Options for one generation run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Casing transform for generated function names; `None` leaves
    /// `<name>_path` untouched.
    pub camelize: Option<CasingStyle>,
    /// Keep only routes whose path matches.
    pub include_paths: Option<Regex>,
    /// Drop routes whose path matches.
    pub exclude_paths: Option<Regex>,
    /// Keep only routes whose name matches.
    pub include_names: Option<Regex>,
    /// Drop routes whose name matches.
    pub exclude_names: Option<Regex>,
}

impl Config {
    /// Whether a route survives the configured filters. A route is kept
    /// when it matches every configured include and no configured exclude.
    pub fn keep(&self, route: &Route) -> bool {
        let include = |re: &Option<Regex>, s: &str| re.as_ref().is_none_or(|re| re.is_match(s));
        let exclude = |re: &Option<Regex>, s: &str| re.as_ref().is_some_and(|re| re.is_match(s));
        include(&self.include_paths, &route.path)
            && include(&self.include_names, &route.name)
            && !exclude(&self.exclude_paths, &route.path)
            && !exclude(&self.exclude_names, &route.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camelize_lower() {
        assert_eq!(camelize("admin_user_path", CasingStyle::Lower), "adminUserPath");
        assert_eq!(camelize("path", CasingStyle::Lower), "path");
    }

    #[test]
    fn test_camelize_upper() {
        assert_eq!(camelize("admin_user_path", CasingStyle::Upper), "AdminUserPath");
        assert_eq!(camelize("path", CasingStyle::Upper), "Path");
    }

    #[test]
    fn test_camelize_swallows_doubled_underscores() {
        assert_eq!(camelize("a__b", CasingStyle::Lower), "aB");
        assert_eq!(camelize("v2_api_path", CasingStyle::Lower), "v2ApiPath");
    }

    #[test]
    fn test_casing_style_from_str() {
        assert_eq!("lower".parse::<CasingStyle>().unwrap(), CasingStyle::Lower);
        assert_eq!("upper".parse::<CasingStyle>().unwrap(), CasingStyle::Upper);
        assert!(matches!(
            "camel".parse::<CasingStyle>().unwrap_err(),
            GenerateError::UnknownCasingStyle(style) if style == "camel"
        ));
    }

    #[test]
    fn test_keep_unfiltered() {
        let config = Config::default();
        assert!(config.keep(&Route::new("user", "/users/:id")));
    }

    #[test]
    fn test_keep_with_filters() {
        let config = Config {
            include_paths: Some(Regex::new("^/api").unwrap()),
            exclude_names: Some(Regex::new("^internal_").unwrap()),
            ..Config::default()
        };
        assert!(config.keep(&Route::new("user", "/api/users/:id")));
        assert!(!config.keep(&Route::new("legacy", "/users/:id")));
        assert!(!config.keep(&Route::new("internal_user", "/api/internal/users/:id")));
    }

    #[test]
    fn test_exclude_paths() {
        let config = Config {
            exclude_paths: Some(Regex::new("^/rails").unwrap()),
            ..Config::default()
        };
        assert!(config.keep(&Route::new("user", "/users/:id")));
        assert!(!config.keep(&Route::new("info", "/rails/info/properties")));
    }
}
