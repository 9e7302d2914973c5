use crate::api::routes;
use crate::config::ServerConfig;
use crate::updater::SharedUpdater;
use std::future::Future;

#[derive(Clone)]
pub(super) struct AppState {
    pub updater: SharedUpdater,
}

/// Bind the configured address and return the future serving the API on it.
///
/// # Errors
///
/// Returns the [`hyper::Error`] raised if the address can't be bound.
pub fn new(
    config: &ServerConfig,
    updater: SharedUpdater,
) -> hyper::Result<impl Future<Output = hyper::Result<()>>> {
    Ok(axum::Server::try_bind(&config.api_bind_addr)?
        .serve(routes::new(updater, config.api_timeout).into_make_service()))
}
