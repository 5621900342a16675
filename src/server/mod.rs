pub mod handlers;
pub mod router;
pub mod ssr;

pub use router::{AppState, app_router};
pub use ssr::SsrHandler;
