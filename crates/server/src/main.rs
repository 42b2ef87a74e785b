// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::State as AxumState,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use import_cost_api::{
    ApiError, EXPORT_FILE_NAME, ExportRequest, ListModelsResponse, QuoteConfig, QuoteRequest,
    QuoteResponse, ReloadResponse, calculate_quote, export_breakdown, list_models,
    reload_catalog,
};
use import_cost_catalog::{
    CatalogSnapshot, CatalogSource, CatalogStore, CsvFileSource, XlsxFileSource,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use time::{Date, OffsetDateTime};
use tracing::{error, info, warn};

/// Import Cost Server - HTTP server for vehicle import quotes
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the vehicle catalog (`.csv` or `.xlsx`)
    #[arg(short, long, default_value = "tablas.csv")]
    catalog: PathBuf,

    /// Field delimiter of a CSV catalog
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Optional quote settings file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The catalog and its current snapshot.
    catalog: Arc<CatalogStore>,
    /// Quote settings, fixed at startup.
    config: Arc<QuoteConfig>,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Always true.
    error: bool,
    /// The error message.
    message: String,
}

/// Wrapper mapping API errors to HTTP responses.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(error = %err, "Request failed");
        } else {
            warn!(error = %err, "Request rejected");
        }
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Server settings file layout.
#[derive(Debug, Deserialize)]
struct Settings {
    /// The `[quote]` table.
    #[serde(default)]
    quote: QuoteConfig,
}

/// Loads quote settings from an optional file layered with
/// `IMPORT_COST__*` environment variables, e.g.
/// `IMPORT_COST__QUOTE__INCLUDE_SENTINEL=false`.
fn load_config(path: Option<&PathBuf>) -> Result<QuoteConfig, config::ConfigError> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path.as_path()).required(true));
    }
    let settings: config::Config = builder
        .add_source(config::Environment::with_prefix("IMPORT_COST").separator("__"))
        .build()?;

    let settings: Settings = settings.try_deserialize()?;
    Ok(settings.quote)
}

/// Picks the catalog reader from the file extension. Anything other than
/// `.xlsx` is read as CSV.
fn catalog_source(path: &Path, delimiter: u8) -> Box<dyn CatalogSource> {
    let is_workbook: bool = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));
    if is_workbook {
        Box::new(XlsxFileSource::new(path))
    } else {
        Box::new(CsvFileSource::new(path).with_delimiter(delimiter))
    }
}

/// The date vehicle ages are measured against.
fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> &'static str {
    "ok"
}

/// Handler for GET `/models` endpoint.
///
/// Lists selectable model labels from the current snapshot.
async fn handle_list_models(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListModelsResponse> {
    let snapshot: Arc<CatalogSnapshot> = app_state.catalog.snapshot();
    Json(list_models(&snapshot, &app_state.config))
}

/// Handler for POST `/quote` endpoint.
async fn handle_quote(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, HttpError> {
    info!(model = %request.model, "Handling quote request");

    let snapshot: Arc<CatalogSnapshot> = app_state.catalog.snapshot();
    let response: QuoteResponse = calculate_quote(&snapshot, &app_state.config, &request, today())?;

    Ok(Json(response))
}

/// Handler for POST `/quote/export` endpoint.
///
/// Returns the posted breakdown as a CSV attachment.
async fn handle_export(Json(request): Json<ExportRequest>) -> Result<Response, HttpError> {
    let bytes: Vec<u8> = export_breakdown(request.breakdown)?;
    let disposition: String = format!("attachment; filename=\"{EXPORT_FILE_NAME}\"");

    Ok((
        [
            (header::CONTENT_TYPE, String::from("text/csv; charset=utf-8")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

/// Handler for POST `/catalog/reload` endpoint.
///
/// Re-reads the catalog file off the async workers. On failure the previous
/// snapshot keeps serving.
async fn handle_reload(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ReloadResponse>, HttpError> {
    info!(source = %app_state.catalog.describe(), "Handling catalog reload");

    let catalog: Arc<CatalogStore> = Arc::clone(&app_state.catalog);
    let response: ReloadResponse = tokio::task::spawn_blocking(move || reload_catalog(&catalog))
        .await
        .map_err(|e| {
            error!(error = %e, "Catalog reload task failed");
            HttpError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: format!("Catalog reload task failed: {e}"),
            }
        })??;
    Ok(Json(response))
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/models", get(handle_list_models))
        .route("/quote", post(handle_quote))
        .route("/quote/export", post(handle_export))
        .route("/catalog/reload", post(handle_reload))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Import Cost Server");

    let config: QuoteConfig = load_config(args.config.as_ref())?;
    info!(
        include_sentinel = config.include_sentinel,
        components = config.components.components().len(),
        "Loaded quote settings"
    );

    let delimiter: u8 = u8::try_from(args.delimiter)
        .map_err(|_| format!("Delimiter '{}' is not a single-byte character", args.delimiter))?;
    let catalog: CatalogStore = CatalogStore::open(catalog_source(&args.catalog, delimiter))?;

    let app_state: AppState = AppState {
        catalog: Arc::new(catalog),
        config: Arc::new(config),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
