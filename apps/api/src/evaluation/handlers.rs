//! Axum route handlers for the document evaluation API.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;

use crate::errors::AppError;
use crate::evaluation::{self, Evaluation};
use crate::fairness::{FairnessResult, PublicStatus};
use crate::state::AppState;
use crate::storage::DocumentRecord;

/// Uploads above this size are rejected before evaluation.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// How many records the history endpoint returns at most.
const HISTORY_LIMIT: usize = 50;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub hash: String,
    pub evaluation: Evaluation,
    pub fairness_result: FairnessResult,
    pub public_status: PublicStatus,
}

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub hash: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PublicStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub hash: String,
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
    pub status: PublicStatus,
    pub score: u8,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub documents: Vec<HistoryEntry>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/documents
///
/// Accepts a multipart upload, evaluates it, and stores the verdict under its
/// content hash. Identical bytes always produce the same hash, so re-uploads
/// overwrite in place.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        // "resume" is accepted for compatibility with older clients.
        let name = field.name().unwrap_or_default();
        if name != "document" && name != "resume" {
            continue;
        }
        let file_name = field
            .file_name()
            .unwrap_or("document")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
        upload = Some((file_name, data));
        break;
    }

    let (file_name, data) = upload.ok_or_else(|| {
        AppError::Validation("no file uploaded: expected a 'document' field".to_string())
    })?;

    if data.is_empty() {
        return Err(AppError::Validation("uploaded file is empty".to_string()));
    }
    if data.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation(format!(
            "file exceeds the {}MB upload limit",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        )));
    }

    let hash = content_hash(&data);
    let text = decode_document_text(&data, &file_name);

    info!(
        file_name = %file_name,
        size = data.len(),
        hash = %hash,
        "processing uploaded document"
    );

    let verdict =
        evaluation::process_document(&text, &file_name, state.evaluator.as_ref(), &state.profile)
            .await?;

    let record = DocumentRecord {
        hash: hash.clone(),
        file_name,
        file_size: data.len(),
        uploaded_at: Utc::now(),
        evaluation: verdict.evaluation.clone(),
        fairness_result: verdict.fairness_result.clone(),
        public_status: verdict.public_status.clone(),
    };
    state.store.put(record)?;

    Ok(Json(UploadResponse {
        success: true,
        hash,
        evaluation: verdict.evaluation,
        fairness_result: verdict.fairness_result,
        public_status: verdict.public_status,
    }))
}

/// POST /api/v1/verify
///
/// Looks an evaluated document up by its content hash. An unknown hash is a
/// `found: false` answer, not an error.
pub async fn handle_verify(
    State(state): State<AppState>,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, AppError> {
    if request.hash.trim().is_empty() {
        return Err(AppError::Validation("hash is required".to_string()));
    }

    let response = match state.store.get(&request.hash)? {
        Some(record) => VerifyResponse {
            found: true,
            status: Some(record.public_status),
            evaluated_at: Some(record.uploaded_at),
            message: None,
        },
        None => VerifyResponse {
            found: false,
            status: None,
            evaluated_at: None,
            message: Some(
                "Hash not found in the system. This document has not been evaluated.".to_string(),
            ),
        },
    };

    Ok(Json(response))
}

/// GET /api/v1/documents/history
///
/// Returns the most recently evaluated documents, newest first.
pub async fn handle_history(
    State(state): State<AppState>,
) -> Result<Json<HistoryResponse>, AppError> {
    let documents = state
        .store
        .recent(HISTORY_LIMIT)?
        .into_iter()
        .map(|record| HistoryEntry {
            hash: record.hash,
            file_name: record.file_name,
            uploaded_at: record.uploaded_at,
            status: record.public_status,
            score: record.evaluation.score,
        })
        .collect();

    Ok(Json(HistoryResponse { documents }))
}

// ────────────────────────────────────────────────────────────────────────────
// Upload decoding
// ────────────────────────────────────────────────────────────────────────────

/// Hex SHA-256 of the uploaded bytes.
pub fn content_hash(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

/// Decodes uploaded bytes into evaluable text: PDF extraction first, then
/// plain UTF-8, then a metadata stub so binary uploads still get a verdict.
pub fn decode_document_text(data: &[u8], file_name: &str) -> String {
    if let Ok(text) = pdf_extract::extract_text_from_mem(data) {
        return text;
    }
    match std::str::from_utf8(data) {
        Ok(text) => text.to_string(),
        Err(_) => format!("Document: {file_name}, Size: {} bytes", data.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_hash_is_hex_sha256() {
        assert_eq!(
            content_hash(b"hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
        assert_eq!(content_hash(b"hello").len(), 64);
    }

    #[test]
    fn test_content_hash_changes_with_a_single_byte() {
        assert_ne!(content_hash(b"hello"), content_hash(b"hellp"));
    }

    #[test]
    fn test_plain_text_uploads_decode_as_utf8() {
        let text = decode_document_text(b"Python developer, 5 years experience", "cv.txt");
        assert_eq!(text, "Python developer, 5 years experience");
    }

    #[test]
    fn test_binary_uploads_fall_back_to_metadata_stub() {
        let data = [0xff, 0xfe, 0x00, 0x01];
        let text = decode_document_text(&data, "photo.bin");
        assert_eq!(text, "Document: photo.bin, Size: 4 bytes");
    }
}
