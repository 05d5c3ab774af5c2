use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::response::ApiResponse;
use common::model::source::{SourceRecord, SourceSubmission};
use log::info;

use super::error::SourceStoreError;
use super::store::SourceStore;

/// `PUT /api/projects/{project_id}/sources/{source_id}`
///
/// Replaces name, type, state and verifier; the uid and mask id are kept.
pub async fn process(
    path: web::Path<(String, String)>,
    payload: web::Json<SourceSubmission>,
    store: web::Data<SourceStore>,
) -> impl Responder {
    let (project_id, source_id) = path.into_inner();
    match update_source(project_id, source_id, payload.into_inner(), store).await {
        Ok(record) => HttpResponse::Ok().json(ApiResponse::success("Source updated successfully", record)),
        Err(e) => e.error_response(),
    }
}

pub async fn update_source(
    project_id: String,
    source_id: String,
    submission: SourceSubmission,
    store: web::Data<SourceStore>,
) -> Result<SourceRecord, SourceStoreError> {
    submission.validate()?;

    let record =
        tokio::task::spawn_blocking(move || store.update(&project_id, &source_id, &submission))
            .await??;
    info!("updated source {} ({})", record.uid, record.name);
    Ok(record)
}
