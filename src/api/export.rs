//! CSV export endpoint

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::{error::AppResult, services::export::ExportKind};

use super::AuthenticatedUser;

/// Export a whole collection as a CSV attachment
#[utoipa::path(
    get,
    path = "/export/{kind}",
    tag = "export",
    security(("bearer_auth" = [])),
    params(
        ("kind" = String, Path, description = "Collection to export: all-book, all-author, all-category or all-publisher")
    ),
    responses(
        (status = 200, description = "CSV file", body = String, content_type = "text/csv"),
        (status = 400, description = "Unknown export kind"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn export_collection(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(kind): Path<String>,
) -> AppResult<Response> {
    let kind: ExportKind = kind.parse()?;

    let mut csv = Vec::new();
    state.services.export.export_csv(kind, &mut csv).await?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}.csv\"", kind),
        ),
    ];

    Ok((headers, csv).into_response())
}
