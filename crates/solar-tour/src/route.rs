use crate::bodies::BodyId;

/// What the page shell should show for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Body(BodyId),
    /// Static not-found page; no scene is mounted.
    NotFound,
}

impl Route {
    /// Match a location path against the tour's routes.
    ///
    /// Query strings and fragments are ignored, as are a trailing slash and
    /// letter case: `/Earth/?x=1` is the Earth route.
    pub fn parse(path: &str) -> Route {
        let path = path
            .split(&['?', '#'][..])
            .next()
            .unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() {
            "/".to_string()
        } else {
            trimmed.to_ascii_lowercase()
        };

        BodyId::ALL
            .iter()
            .find(|id| id.route() == normalized)
            .map_or(Route::NotFound, |&id| Route::Body(id))
    }

    pub fn body(self) -> Option<BodyId> {
        match self {
            Route::Body(id) => Some(id),
            Route::NotFound => None,
        }
    }
}
