use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::response::ApiResponse;
use common::model::source::{SourceRecord, SourceSubmission};
use log::info;

use super::error::SourceStoreError;
use super::store::SourceStore;

/// `POST /api/projects/{project_id}/sources`
///
/// - `201 Created` with the stored source.
/// - `400 Bad Request` when the submission breaks a verifier rule.
/// - `503 Service Unavailable` when the database cannot be reached.
pub async fn process(
    project_id: web::Path<String>,
    payload: web::Json<SourceSubmission>,
    store: web::Data<SourceStore>,
) -> impl Responder {
    match create_source(project_id.into_inner(), payload.into_inner(), store).await {
        Ok(record) => {
            HttpResponse::Created().json(ApiResponse::success("Source created successfully", record))
        }
        Err(e) => e.error_response(),
    }
}

pub async fn create_source(
    project_id: String,
    submission: SourceSubmission,
    store: web::Data<SourceStore>,
) -> Result<SourceRecord, SourceStoreError> {
    submission.validate()?;

    let record =
        tokio::task::spawn_blocking(move || store.insert(&project_id, &submission)).await??;
    info!(
        "created source {} ({}, verifier {})",
        record.uid,
        record.name,
        record.verifier.canonical_type()
    );
    Ok(record)
}
