//! Text-to-speech and speech-to-text handlers.

use axum::{
    body::Body,
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use relay_adapters::AUDIO_MEDIA_TYPE;
use tracing::{debug, warn};

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::{SpeechRequest, TranscriptResponse};

/// Message for any synthesis failure other than a missing key.
const TTS_FAILURE: &str = "Failed to generate speech.";

/// Message for any transcription failure other than a missing key.
const STT_FAILURE: &str = "Failed to transcribe speech.";

/// Multipart field carrying the recording.
const AUDIO_FIELD: &str = "audio_file";

/// POST /api/text-to-speech - Stream synthesized speech as `audio/mpeg`.
pub async fn text_to_speech(
    State(state): State<AppState>,
    Json(req): Json<SpeechRequest>,
) -> Result<Response> {
    let audio = state
        .tts
        .synthesize(&req.text)
        .await
        .map_err(|e| ApiError::speech(e, TTS_FAILURE))?;

    Ok((
        [(header::CONTENT_TYPE, AUDIO_MEDIA_TYPE)],
        Body::from_stream(audio),
    )
        .into_response())
}

/// POST /api/speech-to-text - Transcribe an uploaded recording.
///
/// Reads the `audio_file` field, or the first field carrying a file name.
pub async fn speech_to_text(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<TranscriptResponse>> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!(error = %e, "Malformed multipart upload");
        ApiError::Aborted(STT_FAILURE.to_string())
    })? {
        let is_audio = field.name() == Some(AUDIO_FIELD) || field.file_name().is_some();
        if !is_audio {
            continue;
        }
        let file_name = field.file_name().unwrap_or("audio.webm").to_string();
        let data = field.bytes().await.map_err(|e| {
            warn!(error = %e, "Failed to read uploaded audio");
            ApiError::Aborted(STT_FAILURE.to_string())
        })?;
        upload = Some((file_name, data));
        break;
    }

    let (file_name, data) =
        upload.ok_or_else(|| ApiError::Aborted("No audio file was uploaded.".to_string()))?;
    debug!(file_name = %file_name, bytes = data.len(), "Transcribing upload");

    let text = state
        .stt
        .transcribe(data.to_vec(), &file_name)
        .await
        .map_err(|e| ApiError::speech(e, STT_FAILURE))?;
    Ok(Json(TranscriptResponse { text }))
}
