use axum::{Router, routing::get};
use std::{io::Error, net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;

use armory_app::{app::AppBus, config::Config};
use armory_types::{Result, errors::ApplicationError};

use crate::handlers::{
    create_hero, delete_hero, get_hero, list_heroes, partial_update_hero, replace_hero,
};

#[derive(Clone)]
pub struct AppState {
    pub app_bus: Arc<AppBus>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(app_bus: Arc<AppBus>, config: Arc<Config>) -> AppState {
        AppState { app_bus, config }
    }
}

pub struct WebRouter {}

impl WebRouter {
    /// Builds the hero API router. Kept separate from `serve` so tests can
    /// drive the exact same routes.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/api/heroes", get(list_heroes).post(create_hero))
            .route(
                "/api/heroes/{id}",
                get(get_hero)
                    .put(replace_hero)
                    .patch(partial_update_hero)
                    .delete(delete_hero),
            )
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let router = Self::router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            let err = format!("{:#?}", e);
            ApplicationError::Infrastructure(err)
        })?;

        tracing::info!(
            "HTTP Server started, listening on http://{}",
            addr.to_string()
        );
        axum::serve(listener, router).await.map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
