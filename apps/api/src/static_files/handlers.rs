use std::io::ErrorKind;

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::static_files::{DEFAULT_DOWNLOAD_NAME, DOCX_MIME, INDEX_HTML};

/// GET /
pub async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /download
///
/// Sends the saved contract as an attachment, or reports in-band that there is none.
pub async fn handle_download(State(state): State<AppState>) -> Result<Response, AppError> {
    let path = &state.config.download_path;

    let contents = match tokio::fs::read(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(AppError::MissingFile),
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("Failed to read {}", path.display()))
                .into())
        }
    };

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(DEFAULT_DOWNLOAD_NAME);
    info!("Serving {} ({} bytes)", path.display(), contents.len());

    Ok((
        [
            (header::CONTENT_TYPE, DOCX_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        Bytes::from(contents),
    )
        .into_response())
}
