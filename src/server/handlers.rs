use super::{ApiResponse, AppState};
use crate::licensing::{expiring_within, sort_by_expiration, ExpiringLicense, LicenseRecord};
use crate::validation::pipeline::{failure_message, MSG_PROCESSING_FAILED};
use crate::validation::{
    results_to_csv, run_upload, ResultFilter, UploadedFile, ValidationResponse, ValidationResult,
};
use axum::{
    extract::{
        multipart::MultipartRejection, rejection::QueryRejection, Multipart, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, warn};

/// Multipart field carrying the uploaded file
pub const UPLOAD_FIELD: &str = "csvFile";

#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    #[serde(default)]
    view: ResultFilter,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    results: Vec<ValidationResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiringQuery {
    days: Option<u32>,
    as_of: Option<NaiveDate>,
}

pub async fn health_check() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::success("ok"))
}

pub async fn validate_upload(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ViewQuery>, QueryRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> (StatusCode, Json<ValidationResponse>) {
    let view = match query {
        Ok(Query(query)) => query.view,
        Err(rejection) => {
            warn!("Rejected validation query: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(ValidationResponse::failure(rejection.body_text())),
            );
        }
    };

    let upload = match multipart {
        Ok(multipart) => match read_upload(multipart).await {
            Ok(upload) => upload,
            Err(e) => {
                warn!("Failed to read multipart upload: {}", e);
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationResponse::failure(MSG_PROCESSING_FAILED)),
                );
            }
        },
        // not a form post at all, so there is no file
        Err(_) => None,
    };

    match run_upload(upload.as_ref(), state.source.as_ref(), &state.policy).await {
        Ok(mut outcome) => {
            outcome.results.retain(|r| view.matches(r));
            (StatusCode::OK, Json(ValidationResponse::success(outcome)))
        }
        Err(e) => {
            let status = if e.is_client_error() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Json(ValidationResponse::failure(failure_message(&e))))
        }
    }
}

async fn read_upload(
    mut multipart: Multipart,
) -> Result<Option<UploadedFile>, axum::extract::multipart::MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        return Ok(Some(UploadedFile::new(filename, bytes.to_vec())));
    }
    Ok(None)
}

pub async fn export_results(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExportRequest>,
) -> Response {
    match results_to_csv(&request.results) {
        Ok(csv) => (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", state.config.export_filename),
                ),
            ],
            csv,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to export results: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(e.user_message())),
            )
                .into_response()
        }
    }
}

pub async fn list_licenses(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ApiResponse<Vec<LicenseRecord>>>) {
    match state.source.lookup_all().await {
        Ok(mut records) => {
            sort_by_expiration(&mut records);
            (StatusCode::OK, Json(ApiResponse::success(records)))
        }
        Err(e) => {
            error!("Failed to list licenses: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(e.user_message())),
            )
        }
    }
}

pub async fn expiring_licenses(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExpiringQuery>,
) -> (StatusCode, Json<ApiResponse<Vec<ExpiringLicense>>>) {
    let days = query.days.unwrap_or(state.config.expiring_days);
    if days == 0 {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("days must be greater than 0")),
        );
    }
    let as_of = query.as_of.unwrap_or_else(|| Utc::now().date_naive());

    match state.source.lookup_all().await {
        Ok(records) => (
            StatusCode::OK,
            Json(ApiResponse::success(expiring_within(&records, as_of, days))),
        ),
        Err(e) => {
            error!("Failed to load licenses for expiry report: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(e.user_message())),
            )
        }
    }
}
