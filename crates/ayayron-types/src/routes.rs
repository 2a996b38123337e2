// crates/ayayron-types/src/routes.rs
// Static route table and location matching

use thiserror::Error;

/// View components a route can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Homepage,
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Homepage => "Homepage",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    /// Match the full path only, not a prefix of it
    pub exact: bool,
    pub view: View,
}

impl Route {
    pub const fn new(path: &'static str, exact: bool, view: View) -> Self {
        Self { path, exact, view }
    }

    pub fn matches(&self, location: &Location) -> bool {
        let pattern = normalize_pathname(self.path);
        let pathname = location.pathname();

        if pathname.eq_ignore_ascii_case(&pattern) {
            return true;
        }
        if self.exact {
            return false;
        }

        // Prefix match must end on a segment boundary: "/a" matches "/a/b" but not "/ab"
        if pattern == "/" {
            return true;
        }
        pathname.len() > pattern.len()
            && pathname.as_bytes()[pattern.len()] == b'/'
            && pathname[..pattern.len()].eq_ignore_ascii_case(&pattern)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),

    #[error("route path must start with '/': {0:?}")]
    InvalidPattern(String),
}

/// Ordered, immutable list of routes. Lookup is first match.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteError> {
        let mut seen: Vec<String> = Vec::with_capacity(routes.len());
        for route in &routes {
            if !route.path.starts_with('/') {
                return Err(RouteError::InvalidPattern(route.path.to_string()));
            }
            let key = normalize_pathname(route.path).to_ascii_lowercase();
            if seen.contains(&key) {
                return Err(RouteError::DuplicatePath(route.path.to_string()));
            }
            seen.push(key);
        }
        Ok(Self { routes })
    }

    /// The application's route table: `/` (exact) renders the homepage.
    /// No fallback route is declared.
    pub fn default_table() -> Self {
        Self {
            routes: vec![Route::new("/", true, View::Homepage)],
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn match_location(&self, location: &Location) -> Option<&Route> {
        let route = self.routes.iter().find(|r| r.matches(location));
        match route {
            Some(r) => log::debug!("route {} matched {}", r.path, location.pathname()),
            None => log::debug!("no route matched {}", location.pathname()),
        }
        route
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::default_table()
    }
}

// ============================================================================
// Location
// ============================================================================

/// The browser location as seen by the router: just the normalized pathname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pathname: String,
}

impl Location {
    /// Parse a path or path-with-query (`/a/b?x=1#top`). Query and fragment are
    /// ignored for routing.
    pub fn parse(raw: &str) -> Self {
        let end = raw.find(['?', '#']).unwrap_or(raw.len());
        Self {
            pathname: normalize_pathname(&raw[..end]),
        }
    }

    pub fn root() -> Self {
        Self::parse("/")
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

fn normalize_pathname(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_root_selects_homepage() {
        let table = RouteTable::default_table();
        let route = table.match_location(&Location::parse("/")).unwrap();
        assert_eq!(route.view, View::Homepage);
        assert!(route.exact);
    }

    #[test]
    fn test_default_table_other_paths_select_nothing() {
        let table = RouteTable::default_table();
        for path in ["/unknown", "/home", "/a/b/c", "/index.html", "//x"] {
            assert!(
                table.match_location(&Location::parse(path)).is_none(),
                "{} should not match",
                path
            );
        }
    }

    #[test]
    fn test_root_variants_match_homepage() {
        let table = RouteTable::default_table();
        for path in ["", "/", "/?tab=1", "/#top", "//"] {
            let route = table.match_location(&Location::parse(path));
            assert_eq!(route.map(|r| r.view), Some(View::Homepage), "{:?}", path);
        }
    }

    #[test]
    fn test_location_parse_strips_query_fragment_and_trailing_slash() {
        assert_eq!(Location::parse("/about/?q=1#x").pathname(), "/about");
        assert_eq!(Location::parse("about").pathname(), "/about");
        assert_eq!(Location::parse("").pathname(), "/");
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let route = Route::new("/about", true, View::Homepage);
        assert!(route.matches(&Location::parse("/About")));
        assert!(!route.matches(&Location::parse("/about/team")));
    }

    #[test]
    fn test_prefix_match_respects_segment_boundary() {
        let route = Route::new("/about", false, View::Homepage);
        assert!(route.matches(&Location::parse("/about/team")));
        assert!(!route.matches(&Location::parse("/aboutus")));
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::new(vec![
            Route::new("/", false, View::Homepage),
            Route::new("/about", true, View::Homepage),
        ])
        .unwrap();
        let route = table.match_location(&Location::parse("/about")).unwrap();
        assert_eq!(route.path, "/");
    }

    #[test]
    fn test_duplicate_paths_rejected() {
        let err = RouteTable::new(vec![
            Route::new("/about", true, View::Homepage),
            Route::new("/About/", false, View::Homepage),
        ])
        .unwrap_err();
        assert_eq!(err, RouteError::DuplicatePath("/About/".to_string()));
    }

    #[test]
    fn test_relative_pattern_rejected() {
        let err = RouteTable::new(vec![Route::new("about", true, View::Homepage)]).unwrap_err();
        assert!(matches!(err, RouteError::InvalidPattern(_)));
    }
}
