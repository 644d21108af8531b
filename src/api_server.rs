// Axum API Server Module
//
// Purpose: content read/edit API over the markdown content store, plus the
// contact form mailer, resume download and health check.

use axum::{
    body::Body,
    extract::{Path, Request, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post, put},
    Router,
};

use tower_http::{cors::CorsLayer, services::ServeFile, trace::TraceLayer};

use serde::{Deserialize, Serialize};

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::document::{Config, ConfigUpdate, Sections};
use crate::error::ContentError;
use crate::mailer::{ContactMessage, DisabledMailer, HttpMailer, Mailer, OutgoingMail};
use crate::store::{ContentStore, SharedStore};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub mailer: Arc<dyn Mailer>,
    pub resume_file: PathBuf,
    pub resume_download_name: String,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        tracing::info!("Opening content store at {}", config.data_file.display());
        let store = Arc::new(ContentStore::new(
            &config.data_file,
            &config.fallback_contact_email,
        ));

        let mailer: Arc<dyn Mailer> = match &config.mail {
            Some(mail) => {
                tracing::info!("Mail relay: {}", mail.api_url);
                Arc::new(HttpMailer::new(
                    &mail.api_url,
                    &mail.api_key,
                    &mail.from,
                    mail.timeout,
                )?)
            }
            None => {
                tracing::warn!("No mail relay configured; contact form will report failures");
                Arc::new(DisabledMailer)
            }
        };

        Ok(Self {
            store,
            mailer,
            resume_file: config.resume_file.clone(),
            resume_download_name: config.resume_download_name.clone(),
        })
    }

    /// Assemble state from already-built parts.
    pub fn from_parts(
        store: ContentStore,
        mailer: Arc<dyn Mailer>,
        resume_file: impl Into<PathBuf>,
        resume_download_name: impl Into<String>,
    ) -> Self {
        Self {
            store: Arc::new(store),
            mailer,
            resume_file: resume_file.into(),
            resume_download_name: resume_download_name.into(),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health_check))

        // Content endpoints
        .route("/api/content", get(get_content))
        .route("/api/content/:section", get(get_section).put(update_section))
        .route("/api/config", put(update_config))

        // Contact + resume
        .route("/api/send-email", post(send_email))
        .route("/api/download-resume", get(download_resume))

        // Middleware (applied in reverse order)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Portfolio API is running",
        "status": "ok"
    }))
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "Backend is running",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Whole document: config, parsed sections and the raw body.
async fn get_content(State(state): State<AppState>) -> Json<ContentResponse> {
    let doc = state.store.load().await;
    let sections = doc.sections();
    Json(ContentResponse {
        config: doc.config,
        sections,
        content: doc.body,
    })
}

async fn get_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<SectionResponse>, AppError> {
    match state.store.section(&section).await {
        Ok(content) => Ok(Json(SectionResponse { content })),
        Err(ContentError::NotFound(_)) => {
            tracing::debug!("Section {:?} not found", section);
            Err(AppError::NotFound("Section not found".to_string()))
        }
        Err(e) => {
            tracing::error!("Error reading section {:?}: {}", section, e);
            Err(AppError::Internal("Failed to read section".to_string()))
        }
    }
}

async fn update_config(
    State(state): State<AppState>,
    Json(update): Json<ConfigUpdate>,
) -> Result<Json<UpdateConfigResponse>, AppError> {
    let config = state.store.update_config(&update).await.map_err(|e| {
        tracing::error!("Error updating config: {}", e);
        AppError::Internal("Failed to update config".to_string())
    })?;

    Ok(Json(UpdateConfigResponse {
        success: true,
        config,
    }))
}

async fn update_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
    Json(payload): Json<UpdateSectionRequest>,
) -> Result<Json<UpdateSectionResponse>, AppError> {
    let new_content = payload
        .new_content
        .ok_or_else(|| AppError::BadRequest("newContent is required".to_string()))?;

    let content = state
        .store
        .update_section(&section, &new_content)
        .await
        .map_err(|e| {
            tracing::error!("Error updating section {:?}: {}", section, e);
            AppError::Internal("Failed to update section".to_string())
        })?;

    Ok(Json(UpdateSectionResponse {
        success: true,
        section,
        content,
    }))
}

async fn send_email(
    State(state): State<AppState>,
    Json(contact): Json<ContactMessage>,
) -> Result<Json<serde_json::Value>, AppError> {
    let missing = contact.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let doc = state.store.load().await;
    let recipient = doc
        .contact_email()
        .unwrap_or(state.store.fallback_email())
        .to_string();

    let mail = OutgoingMail::from_contact(&contact, &recipient);
    state.mailer.send(&mail).await.map_err(|e| {
        tracing::error!("Error sending email: {}", e);
        AppError::Mail(e.to_string())
    })?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Email sent successfully"
    })))
}

/// Streams the resume from disk as a PDF attachment.
async fn download_resume(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, AppError> {
    match tokio::fs::metadata(&state.resume_file).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Err(AppError::NotFound("Resume not found".to_string())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound("Resume not found".to_string()));
        }
        Err(e) => {
            tracing::error!("Error downloading resume: {}", e);
            return Err(AppError::Internal("Failed to download resume".to_string()));
        }
    }

    let served = ServeFile::new(&state.resume_file)
        .try_call(request)
        .await
        .map_err(|e| {
            tracing::error!("Error downloading resume: {}", e);
            AppError::Internal("Failed to download resume".to_string())
        })?;

    // Removed between the metadata check and the open
    if served.status() == StatusCode::NOT_FOUND {
        return Err(AppError::NotFound("Resume not found".to_string()));
    }

    let disposition = format!(
        "attachment; filename=\"{}\"",
        state.resume_download_name.replace('"', "")
    );
    let mut response = served.map(Body::new);
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/pdf"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition).map_err(|e| {
            tracing::error!("Invalid resume download name: {}", e);
            AppError::Internal("Failed to download resume".to_string())
        })?,
    );
    Ok(response)
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct ContentResponse {
    pub config: Config,
    pub sections: Sections,
    /// Raw markdown body.
    pub content: String,
}

#[derive(Serialize)]
pub struct SectionResponse {
    pub content: String,
}

#[derive(Serialize)]
pub struct UpdateConfigResponse {
    pub success: bool,
    pub config: Config,
}

#[derive(Deserialize)]
struct UpdateSectionRequest {
    #[serde(rename = "newContent")]
    new_content: Option<String>,
}

#[derive(Serialize)]
pub struct UpdateSectionResponse {
    pub success: bool,
    pub section: String,
    pub content: String,
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
    /// Mail delivery failed; the provider detail is passed to the caller.
    Mail(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, serde_json::json!({ "error": msg })),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, serde_json::json!({ "error": msg }))
            }
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": msg }),
            ),
            AppError::Mail(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": "Failed to send email", "details": details }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
