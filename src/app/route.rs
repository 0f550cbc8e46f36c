//! Route type mapping paths to views.
//!
//! Two logical routes exist: `/` for the search view and `/company/{id}`
//! for the detail view. The route is the navigation currency between the
//! controllers and doubles as the deep-link grammar accepted on the command
//! line (`firmscout /company/42`). No guards, no redirects, no nesting;
//! unknown paths parse to `None`.

/// The view the application is currently presenting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The company search view, at `/`.
    Search,
    /// The detail view for one company, at `/company/{id}`.
    CompanyDetail {
        /// Opaque company identifier bound from the path segment.
        id: String,
    },
}

impl Route {
    /// Parses a path into a route.
    ///
    /// Accepts exactly `/` and `/company/{id}` with a single non-empty id
    /// segment. Anything else returns `None`.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        if path == "/" {
            return Some(Self::Search);
        }
        let id = path.strip_prefix("/company/")?;
        if id.is_empty() || id.contains('/') {
            return None;
        }
        Some(Self::CompanyDetail { id: id.to_string() })
    }

    /// Formats the route back into its path.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Search => "/".to_string(),
            Self::CompanyDetail { id } => format!("/company/{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_parses_to_search() {
        assert_eq!(Route::parse("/"), Some(Route::Search));
    }

    #[test]
    fn company_path_binds_id_segment() {
        assert_eq!(
            Route::parse("/company/42"),
            Some(Route::CompanyDetail {
                id: "42".to_string()
            })
        );
    }

    #[test]
    fn malformed_paths_are_rejected() {
        assert_eq!(Route::parse(""), None);
        assert_eq!(Route::parse("/company/"), None);
        assert_eq!(Route::parse("/company/1/extra"), None);
        assert_eq!(Route::parse("/about"), None);
    }

    #[test]
    fn paths_round_trip_through_parse() {
        for path in ["/", "/company/acme-1"] {
            let route = Route::parse(path).expect("path should parse");
            assert_eq!(route.path(), path);
        }
    }
}
