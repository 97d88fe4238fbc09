//! Image upload strategies
//!
//! Three independent best-effort ways to turn a picked file into a URL the
//! catalog can carry. Each has its own size limit and failure message, and
//! none is load-bearing: a failed upload only means typing a URL by hand.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use thiserror::Error;

/// Inline data-URLs ride inside the catalog rows, so they stay small
pub const MAX_DATA_URL_BYTES: usize = 100 * 1024;

/// Hosted uploads (image API / external host)
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Image strategy error
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Image exceeds the {limit_bytes}-byte limit")]
    TooLarge { limit_bytes: usize },

    #[error("Unsupported image format")]
    UnsupportedFormat,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Upload failed: {0}")]
    Upload(String),
}

/// Encode image bytes as an inline `data:` URL
///
/// The bytes are sniffed for a real image signature before encoding; the
/// content type comes from the file name.
pub fn encode_data_url(bytes: &[u8], file_name: &str) -> Result<String, ImageError> {
    if bytes.len() > MAX_DATA_URL_BYTES {
        return Err(ImageError::TooLarge {
            limit_bytes: MAX_DATA_URL_BYTES,
        });
    }
    image::guess_format(bytes).map_err(|_| ImageError::UnsupportedFormat)?;

    let mime = mime_guess::from_path(file_name).first_or_octet_stream();
    if mime.type_() != mime_guess::mime::IMAGE {
        return Err(ImageError::UnsupportedFormat);
    }

    Ok(format!("data:{};base64,{}", mime, BASE64.encode(bytes)))
}

/// Upload to a third-party image API (base64 form field, URL in the reply)
pub async fn upload_to_image_api(
    client: &reqwest::Client,
    api_url: &str,
    api_key: &str,
    bytes: &[u8],
) -> Result<String, ImageError> {
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ImageError::TooLarge {
            limit_bytes: MAX_UPLOAD_BYTES,
        });
    }

    let form = reqwest::multipart::Form::new()
        .text("key", api_key.to_string())
        .text("image", BASE64.encode(bytes));

    let response = client.post(api_url).multipart(form).send().await?;
    if !response.status().is_success() {
        return Err(ImageError::Upload(format!(
            "image API answered {}",
            response.status()
        )));
    }

    let body: serde_json::Value = response.json().await?;
    body.pointer("/data/url")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ImageError::Upload("image API reply had no URL".to_string()))
}

/// Upload to an external host by PUT; the object URL is the public URL
pub async fn upload_to_host(
    client: &reqwest::Client,
    base_url: &str,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<String, ImageError> {
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ImageError::TooLarge {
            limit_bytes: MAX_UPLOAD_BYTES,
        });
    }

    let url = format!("{}/{}", base_url.trim_end_matches('/'), file_name);
    let response = client.put(&url).body(bytes).send().await?;
    if !response.status().is_success() {
        return Err(ImageError::Upload(format!(
            "host answered {}",
            response.status()
        )));
    }
    Ok(url)
}
