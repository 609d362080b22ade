use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use callcoach::application::services::AnalysisService;
use callcoach::domain::Playbook;
use callcoach::infrastructure::llm::GeminiClient;
use callcoach::infrastructure::observability::{TracingConfig, init_tracing};
use callcoach::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    if settings.gemini.api_key.is_none() {
        tracing::warn!(
            "GOOGLE_API_KEY is not set; /api/analisar will reject requests until it is configured"
        );
    }

    let playbook = Playbook::load(&settings.playbook.path);
    if playbook.is_fallback() {
        tracing::warn!("Running with fallback playbook instructions");
    }

    let model = Arc::new(GeminiClient::new(
        settings.gemini.api_key.clone().unwrap_or_default(),
        settings.gemini.model.clone(),
        settings.gemini.base_url.clone(),
    ));

    let analysis_service = Arc::new(AnalysisService::new(model, playbook, settings.poll_config()));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        analysis_service,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
