use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use futures::future::BoxFuture;

/// Externally built server-side-rendering collaborator. The catch-all hands
/// the whole request over and returns whatever the renderer produces; its
/// build artifact and internals are not this crate's concern. `node_env`
/// from [`crate::config::Config`] is available to the embedder constructing
/// one.
pub trait SsrHandler: Send + Sync + 'static {
    fn render(&self, req: Request<Body>) -> BoxFuture<'static, Response>;
}
