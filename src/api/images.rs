//! Image Endpoints

use gloo_net::http::Request;

/// Upload an image as multipart form data. The `FormData` should carry the
/// file under the `fileUpload` field, which is what the backend reads.
pub async fn upload_image(form: web_sys::FormData) -> Result<String, String> {
    let response = Request::post("/images/upload")
        .body(form)
        .map_err(|e| format!("Request error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Response error: {}", e))
}
