use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use lead_intent::config::AppConfig;
use lead_intent::error::AppError;
use lead_intent::telemetry;
use lead_intent::workflows::leads::{
    ingest, scoring, scoring_router, GeminiOracle, LeadScoringService, Offer, ScoringSession,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct OpsState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Lead Intent Scorer",
    about = "Score sales leads against an offer with rule-based and AI intent classification",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the deterministic rule-score breakdown for a lead CSV, without calling
    /// the classifier
    Audit(AuditArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct AuditArgs {
    /// Offer definition (JSON with name, value_props, ideal_use_cases)
    #[arg(long)]
    offer: PathBuf,
    /// Lead batch (CSV with name,role,company,industry,location,linkedin_bio)
    #[arg(long)]
    leads: PathBuf,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Audit(args) => run_audit(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let api_key = config.classifier.require_api_key()?;
    let oracle = Arc::new(GeminiOracle::new(api_key, &config.classifier)?);
    let session = Arc::new(ScoringSession::new());
    let service = Arc::new(LeadScoringService::new(session, oracle));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = OpsState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(scoring_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "lead intent scorer ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_audit(args: AuditArgs) -> Result<(), AppError> {
    let offer_raw = std::fs::read_to_string(&args.offer)?;
    let offer: Offer = serde_json::from_str(&offer_raw)?;
    let file = std::fs::File::open(&args.leads)?;
    let import = ingest::parse_leads(file);

    println!("Rule score audit for offer '{}'", offer.name);
    if import.skipped > 0 {
        println!("Skipped {} row(s) with missing fields", import.skipped);
    }

    if import.leads.is_empty() {
        println!("No scoreable leads in {}", args.leads.display());
        return Ok(());
    }

    for lead in &import.leads {
        let rules = scoring::score_lead(lead, &offer);
        println!(
            "- {} | role {} | industry {} | completeness {} | total {}",
            lead.display_name(),
            rules.role,
            rules.industry,
            rules.completeness,
            rules.total()
        );
    }

    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<OpsState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<OpsState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
