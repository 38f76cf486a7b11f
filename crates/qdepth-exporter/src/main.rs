//! qdepth exporter binary.
//!
//! - Loads `qdepth.yaml` (strict parsing + validation)
//! - Connects the SQS-backed queue service
//! - Spawns the collection scheduler
//! - Serves `/metrics`, `/healthz`, `/readyz`

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use qdepth_exporter::{app_state, config, router, scheduler, service};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("qdepth.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .exporter
        .listen
        .parse()
        .expect("exporter.listen must be a valid SocketAddr");

    let sqs = Arc::new(service::SqsQueueService::connect(&cfg.sqs).await);
    let state = app_state::AppState::new(cfg);

    tokio::spawn(scheduler::run(
        state.clone(),
        Arc::clone(&sqs) as Arc<dyn service::QueueDirectory>,
        sqs as Arc<dyn service::AttributeFetcher>,
    ));

    let app = router::build_router(state);

    tracing::info!(%listen, "qdepth-exporter starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
