//! # Source Service Module
//!
//! Persists webhook sources for a project. Every body goes through the same
//! verifier rules the dashboard form applies before it submits, so a client
//! cannot store an incomplete verifier or a provider source whose signature
//! settings differ from the provider's.
//!
//! Registered routes, under `/api/projects/{project_id}/sources`:
//!
//! *   **`POST`** → `create::process`: validates and stores a `SourceSubmission`.
//! *   **`GET /{source_id}`** → `get::process`: returns the stored `SourceRecord`.
//! *   **`PUT /{source_id}`** → `update::process`: validates and replaces a source.
//!
//! Responses are wrapped in `ApiResponse`; failures carry the error message
//! with status 400 (invalid body), 404 (unknown source) or 503 (database).

mod create;
mod error;
mod get;
mod store;
mod update;

use actix_web::web::{get, post, put, scope};
use actix_web::Scope;

pub use store::SourceStore;

const API_PATH: &str = "/api/projects/{project_id}/sources";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("/{source_id}", get().to(get::process))
        .route("/{source_id}", put().to(update::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::response::ApiResponse;
    use common::model::source::{
        CanonicalVerifierType, SourceClass, SourceDraft, SourceRecord, VerifierType,
    };
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, SourceStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SourceStore::new(dir.path().join("sources.sqlite"));
        store.init().unwrap();
        (dir, store)
    }

    fn github_body() -> Value {
        let mut draft = SourceDraft {
            name: "github".into(),
            source_class: Some(SourceClass::Http),
            ..SourceDraft::default()
        };
        draft.verifier.verifier_type = Some(VerifierType::Github);
        draft.verifier.hmac.secret = "s3cret".into();
        serde_json::to_value(draft.prepare_submission().unwrap()).unwrap()
    }

    macro_rules! init_app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(crate::services::json_config(64 * 1024))
                    .app_data(web::Data::new($store.clone()))
                    .service(configure_routes()),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn created_sources_can_be_fetched() {
        let (_dir, store) = temp_store();
        let app = init_app!(store);

        let req = test::TestRequest::post()
            .uri("/api/projects/p1/sources")
            .set_json(github_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: ApiResponse<SourceRecord> = test::read_body_json(resp).await;
        let created = created.into_data().unwrap();
        assert_eq!(created.verifier.canonical_type(), CanonicalVerifierType::Hmac);
        assert!(!created.mask_id.is_empty());

        let req = test::TestRequest::get()
            .uri(&format!("/api/projects/p1/sources/{}", created.uid))
            .to_request();
        let fetched: ApiResponse<SourceRecord> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched.into_data().unwrap(), created);
    }

    #[actix_web::test]
    async fn incomplete_verifiers_are_rejected() {
        let (_dir, store) = temp_store();
        let app = init_app!(store);

        let body = json!({
            "name": "orders",
            "type": "http",
            "is_disabled": false,
            "provider": "",
            "verifier": { "type": "api_key", "api_key": { "header_name": "X-Key", "header_value": "" } }
        });
        let req = test::TestRequest::post()
            .uri("/api/projects/p1/sources")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let failure: ApiResponse<Value> = test::read_body_json(resp).await;
        assert!(!failure.status);
        assert!(failure.message.contains("api_key"));
    }

    #[actix_web::test]
    async fn malformed_bodies_get_an_enveloped_400() {
        let (_dir, store) = temp_store();
        let app = init_app!(store);

        let req = test::TestRequest::post()
            .uri("/api/projects/p1/sources")
            .set_json(json!({ "name": "x", "type": "smtp" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let failure: ApiResponse<Value> = test::read_body_json(resp).await;
        assert!(!failure.status);
    }

    #[actix_web::test]
    async fn updates_replace_the_verifier() {
        let (_dir, store) = temp_store();
        let app = init_app!(store);

        let req = test::TestRequest::post()
            .uri("/api/projects/p1/sources")
            .set_json(github_body())
            .to_request();
        let created: ApiResponse<SourceRecord> = test::call_and_read_body_json(&app, req).await;
        let created = created.into_data().unwrap();

        let body = json!({
            "name": "renamed",
            "type": "http",
            "is_disabled": true,
            "provider": "",
            "verifier": { "type": "basic_auth", "basic_auth": { "username": "u", "password": "p" } }
        });
        let req = test::TestRequest::put()
            .uri(&format!("/api/projects/p1/sources/{}", created.uid))
            .set_json(body)
            .to_request();
        let updated: ApiResponse<SourceRecord> = test::call_and_read_body_json(&app, req).await;
        let updated = updated.into_data().unwrap();

        assert_eq!(updated.uid, created.uid);
        assert_eq!(updated.mask_id, created.mask_id);
        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.provider, None);
        assert_eq!(updated.verifier.canonical_type(), CanonicalVerifierType::BasicAuth);
    }

    #[actix_web::test]
    async fn unknown_sources_are_not_found() {
        let (_dir, store) = temp_store();
        let app = init_app!(store);

        let req = test::TestRequest::get()
            .uri("/api/projects/p1/sources/missing")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::put()
            .uri("/api/projects/p1/sources/missing")
            .set_json(github_body())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn sources_are_scoped_to_their_project() {
        let (_dir, store) = temp_store();
        let app = init_app!(store);

        let req = test::TestRequest::post()
            .uri("/api/projects/p1/sources")
            .set_json(github_body())
            .to_request();
        let created: ApiResponse<SourceRecord> = test::call_and_read_body_json(&app, req).await;
        let created = created.into_data().unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/api/projects/p2/sources/{}", created.uid))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}
