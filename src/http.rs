use crate::{Clock, Config, Server};
use rmcp::transport::{
    StreamableHttpService, streamable_http_server::session::local::LocalSessionManager,
};
use std::sync::Arc;

/// Builds the axum router serving MCP streamable HTTP under `config.path`.
///
/// Every session gets its own [`Server`] sharing `clock`.
pub fn router(config: &Config, clock: Arc<dyn Clock>) -> axum::Router {
    let service = StreamableHttpService::new(
        move || Ok(Server::new(clock.clone())),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    match config.path.as_str() {
        // axum cannot nest at the root
        "/" => axum::Router::new().fallback_service(service),
        path => axum::Router::new().nest_service(path, service),
    }
}
