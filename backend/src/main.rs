mod config;
mod services;

use crate::config::ServerConfig;
use crate::services::sources::SourceStore;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info};
use mime_guess::from_path;
use std::io;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded dashboard. Unknown paths get `index.html` so the
/// dashboard can resolve its own routes (`/projects/{id}/sources/new`, ...).
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::from_env();
    let url = config.url();

    let store = SourceStore::new(&config.database_path);
    if let Err(e) = store.init() {
        error!(
            "cannot open source database {}: {}",
            config.database_path.display(),
            e
        );
        return Err(io::Error::other(e.to_string()));
    }
    info!("Source database at {}", config.database_path.display());

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                info!("could not open a browser ({}), visit {} manually", e, url);
            }
        });
    }

    info!("Dashboard running at {}", url);

    let store = web::Data::new(store);
    let json_limit = config.json_limit;

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(services::json_config(json_limit))
            .app_data(store.clone())
            .service(services::sources::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
