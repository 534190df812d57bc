//! Tower middleware wrapping a request service with the auth-failure router

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tower::{Layer, Service};

use crate::error::HttpFailure;
use crate::router::{AuthFailureRouter, Navigator};

/// Applies [`AuthFailure`] to an inner service
pub struct AuthFailureLayer<N> {
    router: Arc<AuthFailureRouter<N>>,
}

impl<N> AuthFailureLayer<N> {
    pub fn new(router: AuthFailureRouter<N>) -> Self {
        Self {
            router: Arc::new(router),
        }
    }
}

impl<N> Clone for AuthFailureLayer<N> {
    fn clone(&self) -> Self {
        Self {
            router: Arc::clone(&self.router),
        }
    }
}

impl<S, N> Layer<S> for AuthFailureLayer<N> {
    type Service = AuthFailure<S, N>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthFailure {
            inner,
            router: Arc::clone(&self.router),
        }
    }
}

/// Service that routes on 401/403 failures, including readiness failures,
/// and re-raises every failure
pub struct AuthFailure<S, N> {
    inner: S,
    router: Arc<AuthFailureRouter<N>>,
}

impl<S: Clone, N> Clone for AuthFailure<S, N> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            router: Arc::clone(&self.router),
        }
    }
}

impl<S, N, Req> Service<Req> for AuthFailure<S, N>
where
    S: Service<Req, Error = HttpFailure>,
    S::Future: Send + 'static,
    S::Response: Send + 'static,
    N: Navigator + Send + Sync + 'static,
{
    type Response = S::Response;
    type Error = HttpFailure;
    type Future = Pin<Box<dyn Future<Output = Result<S::Response, HttpFailure>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner
            .poll_ready(cx)
            .map_err(|failure| self.router.handle(failure))
    }

    fn call(&mut self, req: Req) -> Self::Future {
        let response = self.inner.call(req);
        let router = Arc::clone(&self.router);

        Box::pin(async move { router.intercept(response.await) })
    }
}
