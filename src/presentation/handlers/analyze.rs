use axum::Json;
use axum::RequestExt;
use axum::extract::{Multipart, Request, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::application::ports::GenerativeModel;
use crate::application::services::AnalysisError;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeTextRequest {
    pub texto: String,
}

#[derive(Serialize)]
pub struct FeedbackResponse {
    pub feedback: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub erro: String,
}

/// Single analysis endpoint. Routes on the declared content type: multipart
/// bodies take the audio flow, JSON bodies the text flow.
#[tracing::instrument(skip(state, request))]
pub async fn analyze_handler<M>(State(state): State<AppState<M>>, request: Request) -> Response
where
    M: GenerativeModel + 'static,
{
    if state.settings.gemini.api_key.is_none() {
        tracing::error!("Analyze request rejected: GOOGLE_API_KEY is not configured");
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "A chave de API do Google não está configurada no servidor.",
        );
    }

    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if content_type.starts_with("multipart/form-data") {
        analyze_audio(state, request).await
    } else if content_type.starts_with("application/json") {
        analyze_text(state, request).await
    } else {
        tracing::warn!(content_type = %content_type, "Unsupported content type");
        error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            format!("Tipo de conteúdo não suportado: {}", content_type),
        )
    }
}

async fn analyze_audio<M>(state: AppState<M>, request: Request) -> Response
where
    M: GenerativeModel + 'static,
{
    let mut multipart = match request.extract::<Multipart, _>().await {
        Ok(m) => m,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read multipart body");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Falha ao ler multipart: {}", e),
            );
        }
    };

    let mut audio: Option<Bytes> = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some("audio") {
                    continue;
                }
                match field.bytes().await {
                    Ok(data) => {
                        audio = Some(data);
                        break;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read audio field");
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            format!("Falha ao ler o arquivo de áudio: {}", e),
                        );
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart field");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Falha ao ler multipart: {}", e),
                );
            }
        }
    }

    let Some(audio) = audio else {
        tracing::warn!("Multipart request without audio field");
        return error_response(
            StatusCode::BAD_REQUEST,
            "Nenhum arquivo de áudio foi enviado.",
        );
    };

    tracing::debug!(bytes = audio.len(), "Audio payload received");

    respond(state.analysis_service.analyze_audio(&audio).await)
}

async fn analyze_text<M>(state: AppState<M>, request: Request) -> Response
where
    M: GenerativeModel + 'static,
{
    let body = match request.extract::<Json<AnalyzeTextRequest>, _>().await {
        Ok(Json(body)) => body,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid JSON body");
            return error_response(
                StatusCode::BAD_REQUEST,
                "Nenhum texto foi enviado no corpo da requisição.",
            );
        }
    };

    if body.texto.trim().is_empty() {
        tracing::warn!("JSON request with blank texto field");
        return error_response(
            StatusCode::BAD_REQUEST,
            "Nenhum texto foi enviado no corpo da requisição.",
        );
    }

    tracing::debug!(transcript = %sanitize_prompt(&body.texto), "Transcript received");

    respond(state.analysis_service.analyze_transcript(&body.texto).await)
}

fn respond(result: Result<String, AnalysisError>) -> Response {
    match result {
        Ok(feedback) => (StatusCode::OK, Json(FeedbackResponse { feedback })).into_response(),
        Err(e) if e.is_processing_failure() => {
            tracing::error!(error = %e, "Audio processing failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Falha ao processar o arquivo de áudio.",
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Analysis failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Ocorreu um erro no servidor. Detalhes: {}", e),
            )
        }
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            erro: message.into(),
        }),
    )
        .into_response()
}
