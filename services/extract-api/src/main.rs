//! HTTP service that accepts a PDF upload plus a JSON list of textual
//! pointers and returns the best-matching sentence snippets for each
//! pointer, with page numbers and a similarity rationale.

use actix_cors::Cors;
use actix_multipart::Multipart;
use actix_web::web::Bytes;
use actix_web::{web, App, Error, HttpResponse, HttpServer, Responder};
use futures_util::StreamExt as _;
use serde::Serialize;
use serde_json::json;
use shared::config::Settings;
use shared::dto::DocumentReport;
use shared::report::analyze_document;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{error, info};
use uuid::Uuid;

mod pdf;

#[derive(Serialize)]
struct ExtractResponse {
    #[serde(rename = "storedPath")]
    stored_path: String,
    #[serde(flatten)]
    report: DocumentReport,
}

/// Decode the `pointers` form field: a JSON array with at least one
/// element, all of them strings. Empty-string pointers are legal and
/// simply score poorly.
fn parse_pointers(raw: &str) -> std::result::Result<Vec<String>, &'static str> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|_| "`pointers` must be a JSON array of strings")?;
    let items = value
        .as_array()
        .ok_or("`pointers` must be a JSON array of strings")?;
    if items.is_empty() {
        return Err("At least one pointer is required");
    }

    let mut pointers = Vec::with_capacity(items.len());
    for item in items {
        match item.as_str() {
            Some(s) => pointers.push(s.to_string()),
            None => return Err("All pointers must be strings"),
        }
    }
    Ok(pointers)
}

fn bad_request(detail: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "detail": detail }))
}

async fn extract(
    mut payload: Multipart,
    settings: web::Data<Settings>,
) -> Result<HttpResponse, Error> {
    info!("handling extract request");

    let mut file_data: Vec<u8> = Vec::new();
    let mut filename = String::new();
    let mut pointers_raw: Option<String> = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        match field.name() {
            "file" => {
                filename = field
                    .content_disposition()
                    .get_filename()
                    .map(|f| f.to_string())
                    .unwrap_or_else(|| "upload.pdf".into());
                while let Some(chunk) = field.next().await {
                    let bytes: Bytes = chunk?;
                    file_data.extend_from_slice(&bytes);
                }
            }
            "pointers" => {
                let mut buf = Vec::new();
                while let Some(chunk) = field.next().await {
                    let bytes: Bytes = chunk?;
                    buf.extend_from_slice(&bytes);
                }
                pointers_raw = Some(String::from_utf8_lossy(&buf).to_string());
            }
            _ => {
                while let Some(_chunk) = field.next().await {
                    // drain unknown fields
                }
            }
        }
    }

    let Some(raw) = pointers_raw else {
        return Ok(bad_request("`pointers` must be a JSON array of strings"));
    };
    let pointers = match parse_pointers(&raw) {
        Ok(pointers) => pointers,
        Err(detail) => return Ok(bad_request(detail)),
    };
    if file_data.is_empty() {
        return Ok(bad_request("A PDF file upload is required"));
    }

    // persist the upload before analysis
    if let Err(e) = tokio::fs::create_dir_all(&settings.upload_dir).await {
        return Err(actix_web::error::ErrorInternalServerError(e));
    }
    let stored_path = format!("{}/{}_{}", settings.upload_dir, Uuid::new_v4(), filename);
    let mut f = File::create(&stored_path)
        .await
        .map_err(actix_web::error::ErrorInternalServerError)?;
    f.write_all(&file_data)
        .await
        .map_err(actix_web::error::ErrorInternalServerError)?;

    info!(path = %stored_path, bytes = file_data.len(), "stored upload");

    let pages = match pdf::load_pdf_pages_async(file_data).await {
        Ok(pages) => pages,
        Err(e) => {
            error!(%e, "failed to read uploaded pdf");
            return Ok(bad_request("Failed to read PDF document"));
        }
    };

    let max_snippets = settings.max_snippets;
    let file_name = filename.clone();
    let report = tokio::task::spawn_blocking(move || {
        analyze_document(&file_name, &pages, &pointers, max_snippets)
    })
    .await
    .map_err(actix_web::error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().json(ExtractResponse {
        stored_path,
        report,
    }))
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let settings = match Settings::new() {
        Ok(s) => s,
        Err(e) => {
            error!(%e, "failed to load settings");
            std::process::exit(1);
        }
    };
    let port = settings.port;
    let data = web::Data::new(settings);

    info!(port, "starting extract-api service");
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(data.clone())
            .route("/api/extract", web::post().to(extract))
            .route("/api/health", web::get().to(health))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
