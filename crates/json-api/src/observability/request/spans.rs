//! HTTP span and metric route naming.

/// Routes served by the API, used verbatim as span and metric labels.
const KNOWN_ROUTES: [&str; 6] = [
    "/",
    "/healthcheck",
    "/packs",
    "/calculations",
    "/docs",
    "/api-doc/openapi.json",
];

/// Label shared by every path outside [`KNOWN_ROUTES`].
const UNMATCHED_ROUTE: &str = "{unmatched}";

/// Collapse a request path to a bounded route label.
pub(super) fn route_for_path(path: &str) -> &'static str {
    let trimmed = path.trim_end_matches('/');
    let path = if trimmed.is_empty() { "/" } else { trimmed };

    KNOWN_ROUTES
        .into_iter()
        .find(|route| *route == path)
        .or_else(|| path.starts_with("/docs/").then_some("/docs"))
        .unwrap_or(UNMATCHED_ROUTE)
}

pub(super) fn span_name(method: &str, route: &str) -> String {
    format!("{method} {route}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_routes_keep_their_path() {
        assert_eq!(route_for_path("/packs"), "/packs");
        assert_eq!(route_for_path("/calculations/"), "/calculations");
        assert_eq!(route_for_path("/"), "/");
    }

    #[test]
    fn swagger_assets_share_docs_route() {
        assert_eq!(route_for_path("/docs/index.css"), "/docs");
    }

    #[test]
    fn unknown_paths_are_collapsed() {
        assert_eq!(route_for_path("/packs/250"), UNMATCHED_ROUTE);
        assert_eq!(route_for_path("/wp-admin"), UNMATCHED_ROUTE);
    }

    #[test]
    fn span_name_joins_method_and_route() {
        assert_eq!(span_name("POST", "/calculations"), "POST /calculations");
    }
}
