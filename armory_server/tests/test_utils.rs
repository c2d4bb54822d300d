#[cfg(test)]
pub mod tests {
    use std::{net::SocketAddr, sync::Arc};

    use armory_app::{
        app::AppBus,
        config::Config,
        test_utils::tests::{MockHeroRepository, MockUnitOfWorkProvider},
    };
    use armory_types::errors::ApplicationError;
    use armory_web::{AppState, WebRouter};

    /// Boots the hero API on an ephemeral local port, backed by the shared
    /// in-memory store. Returns the base url and a handle on the store so
    /// tests can seed and assert directly.
    pub async fn setup_web_app() -> Result<(String, MockHeroRepository), ApplicationError> {
        let config = Arc::new(Config::from_env());
        let uow_provider = MockUnitOfWorkProvider::new();
        let heroes = uow_provider.heroes();

        let app_bus = Arc::new(AppBus::new(config.clone(), Arc::new(uow_provider)));
        let state = AppState::new(app_bus, config);
        let router = WebRouter::router(state);

        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .map_err(|e| ApplicationError::Infrastructure(format!("{:#?}", e)))?;
        let addr = listener
            .local_addr()
            .map_err(|e| ApplicationError::Infrastructure(format!("{:#?}", e)))?;

        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok((format!("http://{}", addr), heroes))
    }

    pub fn setup_http_client() -> reqwest::Client {
        reqwest::Client::new()
    }
}
