use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::response::ApiResponse;
use common::model::source::SourceRecord;

use super::error::SourceStoreError;
use super::store::SourceStore;

/// `GET /api/projects/{project_id}/sources/{source_id}`
///
/// `200 OK` with the source, `404 Not Found` if the project has no such source.
pub async fn process(
    path: web::Path<(String, String)>,
    store: web::Data<SourceStore>,
) -> impl Responder {
    let (project_id, source_id) = path.into_inner();
    match get_source(project_id, source_id, store).await {
        Ok(record) => HttpResponse::Ok().json(ApiResponse::success("Source fetched successfully", record)),
        Err(e) => e.error_response(),
    }
}

pub async fn get_source(
    project_id: String,
    source_id: String,
    store: web::Data<SourceStore>,
) -> Result<SourceRecord, SourceStoreError> {
    tokio::task::spawn_blocking(move || store.get(&project_id, &source_id)).await?
}
