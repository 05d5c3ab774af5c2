pub mod sources;

use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};
use common::model::response::ApiResponse;

/// JSON extractor settings shared by every API scope: bodies above `limit`
/// bytes or bodies that fail to deserialize get a 400 in the response envelope.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let body = ApiResponse::<()>::failure(err.to_string());
            InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
        })
}
