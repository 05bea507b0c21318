use axum::Json;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::{AudioFetcher, AudioNormalizer, TranscriptionEngine};
use crate::application::services::PipelineError;
use crate::domain::{TranscribeRequest, UploadedAudio};
use crate::presentation::state::AppState;

pub const AUTH_HEADER: &str = "x-whisper-key";
const UPLOAD_FIELD: &str = "file";

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub text: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct TranscribeBody {
    audio_url: Option<String>,
    audio_base64: Option<String>,
}

#[tracing::instrument(skip(state, request))]
pub async fn transcribe_handler<F, N, E>(
    State(state): State<AppState<F, N, E>>,
    request: Request,
) -> Response
where
    F: AudioFetcher + 'static,
    N: AudioNormalizer + 'static,
    E: TranscriptionEngine + 'static,
{
    // Authorization runs before any file I/O or process spawning.
    if let Some(secret) = &state.settings.auth.secret {
        let provided = request
            .headers()
            .get(AUTH_HEADER)
            .and_then(|v| v.to_str().ok());
        if provided != Some(secret.as_str()) {
            tracing::warn!("Unauthorized transcription request");
            return error_response(StatusCode::UNAUTHORIZED, "Unauthorized", None);
        }
    }

    let parsed = match parse_request(request).await {
        Ok(r) => r,
        Err(response) => return response,
    };

    match state.transcription_service.transcribe(&parsed).await {
        Ok(text) => (StatusCode::OK, Json(TranscribeResponse { text })).into_response(),
        Err(e) => pipeline_error_response(e),
    }
}

/// A request carries its audio as a multipart `file` field or as a JSON
/// body with `audioUrl` / `audioBase64`. Body size limits are enforced by
/// the layer in front of this service.
async fn parse_request(request: Request) -> Result<TranscribeRequest, Response> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, &()).await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to read multipart");
            error_response(
                StatusCode::BAD_REQUEST,
                &format!("Failed to read multipart: {}", e),
                None,
            )
        })?;
        return parse_multipart(multipart).await;
    }

    let body = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Failed to read request body");
            error_response(
                StatusCode::BAD_REQUEST,
                &format!("Failed to read body: {}", e),
                None,
            )
        })?;

    if body.is_empty() {
        return Ok(TranscribeRequest::default());
    }

    let body: TranscribeBody = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "Request body is not valid JSON");
        error_response(
            StatusCode::BAD_REQUEST,
            &format!("Invalid JSON body: {}", e),
            None,
        )
    })?;

    Ok(TranscribeRequest {
        upload: None,
        audio_url: body.audio_url,
        audio_base64: body.audio_base64,
    })
}

async fn parse_multipart(mut multipart: Multipart) -> Result<TranscribeRequest, Response> {
    let mut request = TranscribeRequest::default();

    loop {
        let field = multipart.next_field().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to read multipart field");
            error_response(
                StatusCode::BAD_REQUEST,
                &format!("Failed to read multipart: {}", e),
                None,
            )
        })?;

        let Some(field) = field else { break };
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().map(String::from);
        let data = field.bytes().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to read uploaded file");
            error_response(
                StatusCode::BAD_REQUEST,
                &format!("Failed to read file: {}", e),
                None,
            )
        })?;

        request.upload = Some(UploadedAudio {
            data: data.to_vec(),
            filename,
        });
        break;
    }

    Ok(request)
}

fn pipeline_error_response(error: PipelineError) -> Response {
    match error {
        PipelineError::NoAudio => {
            error_response(StatusCode::BAD_REQUEST, "No audio provided", None)
        }
        PipelineError::InvalidPayload(reason) => error_response(
            StatusCode::BAD_REQUEST,
            &format!("Invalid audio payload: {}", reason),
            None,
        ),
        PipelineError::UpstreamFetch(reason) => {
            tracing::error!(error = %reason, "Remote audio fetch failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &reason, None)
        }
        PipelineError::Configuration(reason) => {
            tracing::error!(error = %reason, "Server misconfigured");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &reason, None)
        }
        PipelineError::Normalization { details } => {
            tracing::error!("Audio normalization failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Audio normalization failed",
                Some(details),
            )
        }
        PipelineError::Engine { details } => {
            tracing::error!("Transcription failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Transcription failed",
                Some(details),
            )
        }
        PipelineError::Io(e) => {
            tracing::error!(error = %e, "Unexpected pipeline failure");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string(), None)
        }
    }
}

fn error_response(status: StatusCode, error: &str, details: Option<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            details,
        }),
    )
        .into_response()
}
