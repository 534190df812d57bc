//! Status-code dispatch for failed requests

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::RouterConfig;
use crate::error::HttpFailure;

/// Classification of a failed request's status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    /// 401: the session is missing or expired
    Unauthorized,
    /// 403: the user lacks permission
    Forbidden,
    Other(u16),
}

impl FailureKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => FailureKind::Unauthorized,
            403 => FailureKind::Forbidden,
            other => FailureKind::Other(other),
        }
    }

    /// Where the user should be sent, if anywhere
    pub fn destination(self) -> Option<Destination> {
        match self {
            FailureKind::Unauthorized => Some(Destination::Login),
            FailureKind::Forbidden => Some(Destination::Forbidden),
            FailureKind::Other(_) => None,
        }
    }
}

/// Pages the router can send the user to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    Login,
    Forbidden,
}

/// Navigation capability supplied by the host application
pub trait Navigator {
    fn navigate(&self, destination: Destination, route: &str);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, destination: Destination, route: &str) {
        (**self).navigate(destination, route)
    }
}

impl<N: Navigator + ?Sized> Navigator for Arc<N> {
    fn navigate(&self, destination: Destination, route: &str) {
        (**self).navigate(destination, route)
    }
}

/// Redirects on 401/403 and hands the failure back unchanged
#[derive(Debug, Clone)]
pub struct AuthFailureRouter<N> {
    navigator: N,
    config: RouterConfig,
}

impl<N: Navigator> AuthFailureRouter<N> {
    pub fn new(navigator: N) -> Self {
        Self::with_config(navigator, RouterConfig::default())
    }

    pub fn with_config(navigator: N, config: RouterConfig) -> Self {
        Self { navigator, config }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// React to a failed request. The returned failure is the one passed in;
    /// callers re-raise it.
    pub fn handle(&self, failure: HttpFailure) -> HttpFailure {
        match failure.kind().destination() {
            Some(destination) => {
                let route = self.config.route_for(destination);
                tracing::warn!(
                    status = failure.status,
                    route,
                    "request failed, redirecting"
                );
                self.navigator.navigate(destination, route);
            }
            None => {
                tracing::debug!(status = failure.status, "request failed, no redirect");
            }
        }

        failure
    }

    /// Pass successes through; route on failures and re-raise them
    pub fn intercept<T>(&self, result: Result<T, HttpFailure>) -> Result<T, HttpFailure> {
        result.map_err(|failure| self.handle(failure))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNavigator {
        visits: Mutex<Vec<(Destination, String)>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, destination: Destination, route: &str) {
            self.visits
                .lock()
                .unwrap()
                .push((destination, route.to_string()));
        }
    }

    #[test]
    fn test_failure_kind_from_status() {
        assert_eq!(FailureKind::from_status(401), FailureKind::Unauthorized);
        assert_eq!(FailureKind::from_status(403), FailureKind::Forbidden);
        assert_eq!(FailureKind::from_status(404), FailureKind::Other(404));
        assert_eq!(FailureKind::from_status(500), FailureKind::Other(500));
    }

    #[test]
    fn test_unauthorized_goes_to_login() {
        let router = AuthFailureRouter::new(RecordingNavigator::default());
        let failure = HttpFailure::new(401, "Unauthorized");

        let returned = router.handle(failure.clone());

        assert_eq!(returned, failure);
        assert_eq!(
            *router.navigator().visits.lock().unwrap(),
            vec![(Destination::Login, "/login".to_string())]
        );
    }

    #[test]
    fn test_forbidden_goes_to_error_page() {
        let router = AuthFailureRouter::new(RecordingNavigator::default());
        router.handle(HttpFailure::new(403, "Forbidden"));

        assert_eq!(
            *router.navigator().visits.lock().unwrap(),
            vec![(Destination::Forbidden, "/error/403".to_string())]
        );
    }

    #[test]
    fn test_other_status_does_not_navigate() {
        let router = AuthFailureRouter::new(RecordingNavigator::default());
        let failure = HttpFailure::new(500, "Internal Server Error");

        assert_eq!(router.handle(failure.clone()), failure);
        assert!(router.navigator().visits.lock().unwrap().is_empty());
    }

    #[test]
    fn test_intercept_passes_success_through() {
        let router = AuthFailureRouter::new(RecordingNavigator::default());

        assert_eq!(router.intercept(Ok::<_, HttpFailure>(42)), Ok(42));
        assert!(router.navigator().visits.lock().unwrap().is_empty());
    }

    #[test]
    fn test_custom_routes() {
        let config = RouterConfig {
            login_route: "/auth/signin".to_string(),
            forbidden_route: "/denied".to_string(),
        };
        let router = AuthFailureRouter::with_config(RecordingNavigator::default(), config);

        router.handle(HttpFailure::new(401, ""));
        router.handle(HttpFailure::new(403, ""));

        assert_eq!(
            *router.navigator().visits.lock().unwrap(),
            vec![
                (Destination::Login, "/auth/signin".to_string()),
                (Destination::Forbidden, "/denied".to_string()),
            ]
        );
    }
}
