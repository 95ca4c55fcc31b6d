use std::io::Write;

use base64::engine::general_purpose;
use base64::Engine as _;
use url::Url;

use crate::error::ApiError;

/// Parse the link, strip its query string and infer the MIME type from the
/// path extension. Unsupported extensions are rejected here, before any
/// network traffic.
fn prepare_link(link: &str) -> Result<(Url, &'static str), ApiError> {
    let mut url = Url::parse(link).map_err(|e| ApiError::DownloadFailed(e.to_string()))?;
    url.set_query(None);
    let mime = mime_for_path(url.path()).ok_or(ApiError::UnsupportedType)?;
    Ok((url, mime))
}

fn mime_for_path(path: &str) -> Option<&'static str> {
    let path = path.to_ascii_lowercase();
    if path.ends_with(".jpg") || path.ends_with(".jpeg") {
        Some("image/jpeg")
    } else if path.ends_with(".png") {
        Some("image/png")
    } else {
        None
    }
}

/// Download the image behind `link` and return it as a base64 data URI.
/// The body is spooled through a uniquely named temp file which is removed
/// on drop, success or failure.
pub async fn fetch_as_inline(client: &reqwest::Client, link: &str) -> Result<String, ApiError> {
    let (url, mime) = prepare_link(link)?;

    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(|e| ApiError::DownloadFailed(e.to_string()))?;
    if !response.status().is_success() {
        return Err(ApiError::DownloadFailed(format!(
            "unexpected status {}",
            response.status()
        )));
    }
    let body = response
        .bytes()
        .await
        .map_err(|e| ApiError::DownloadFailed(e.to_string()))?;

    let mut spool = tempfile::NamedTempFile::new()?;
    spool.write_all(&body)?;
    spool.flush()?;
    let data = std::fs::read(spool.path())?;

    Ok(format!(
        "data:{};base64,{}",
        mime,
        general_purpose::STANDARD.encode(data)
    ))
}
