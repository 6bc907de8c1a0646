use crate::api::{build_routes, ApiDoc};
use crate::core::app_state::AppState;
use crate::core::configure::app::AppConfig;
use crate::infrastructure::error::AppResult;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub struct AppServer {
    pub state: AppState,
    tcp: TcpListener,
}

impl AppServer {
    pub async fn new(mut config: AppConfig) -> AppResult<Self> {
        let tcp = TcpListener::bind(config.server.get_socket_addr()).await?;
        let addr = tcp.local_addr()?;
        log::info!("The server is listening on: {addr}");
        config.server.port = addr.port();

        let state = AppState::new(config).await?;
        Ok(Self { state, tcp })
    }

    pub async fn run(self) -> AppResult<()> {
        let router = build_router(self.state);
        axum::serve(self.tcp, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        log::info!("Server stopped");
        Ok(())
    }
}

pub fn build_router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(build_routes())
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for ctrl-c: {err}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(err) => log::error!("Failed to listen for SIGTERM: {err}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    log::info!("Shutdown signal received");
}
