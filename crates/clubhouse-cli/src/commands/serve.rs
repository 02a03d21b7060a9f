use axum::{routing::get, Json};
use clap::Args;
use clubhouse_analytics::AnalyticsPlugin;
use clubhouse_assistant::{AssistantConfig, AssistantPlugin};
use clubhouse_auth::{auth_middleware, AuthPlugin, AuthState};
use clubhouse_content::ContentPlugin;
use clubhouse_core::plugin::PluginManager;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[derive(Args)]
pub struct ServeCommand {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1:8000", env = "CLUBHOUSE_ADDRESS")]
    pub address: String,

    /// Database connection URL
    #[arg(long, env = "CLUBHOUSE_DATABASE_URL")]
    pub database_url: String,

    /// Base URL of the language model provider (OpenAI-compatible)
    #[arg(
        long,
        default_value = "https://api.openai.com/v1",
        env = "CLUBHOUSE_ASSISTANT_BASE_URL"
    )]
    pub assistant_base_url: String,

    /// API key for the language model provider
    #[arg(long, default_value = "", env = "CLUBHOUSE_ASSISTANT_API_KEY")]
    pub assistant_api_key: String,

    /// Model to use for the assistant
    #[arg(long, default_value = "gpt-4o-mini", env = "CLUBHOUSE_ASSISTANT_MODEL")]
    pub assistant_model: String,
}

impl ServeCommand {
    pub fn execute(self) -> anyhow::Result<()> {
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(self.run())
    }

    async fn run(self) -> anyhow::Result<()> {
        let db = clubhouse_database::establish_connection(&self.database_url).await?;

        let mut plugin_manager = PluginManager::new();
        plugin_manager.service_context().register_service(db);

        // Registration order is dependency order
        plugin_manager.register_plugin(Box::new(AuthPlugin::new()));
        plugin_manager.register_plugin(Box::new(ContentPlugin::new()));
        plugin_manager.register_plugin(Box::new(AnalyticsPlugin::new()));
        plugin_manager.register_plugin(Box::new(AssistantPlugin::new(AssistantConfig {
            base_url: self.assistant_base_url.clone(),
            api_key: self.assistant_api_key.clone(),
            model: self.assistant_model.clone(),
        })));

        plugin_manager.initialize_plugins().await?;

        let auth_state = plugin_manager
            .service_context()
            .require_service::<AuthState>();

        let openapi = serde_json::to_value(plugin_manager.get_unified_openapi()?)?;

        let app = plugin_manager
            .build_application()?
            .route(
                "/api/openapi.json",
                get(move || {
                    let openapi = openapi.clone();
                    async move { Json(openapi) }
                }),
            )
            .route("/healthz", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn_with_state(
                auth_state,
                auth_middleware,
            ))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http());

        let listener = tokio::net::TcpListener::bind(&self.address).await?;
        info!("Clubhouse API listening on {}", self.address);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
