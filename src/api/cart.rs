//! Cart Endpoints

use gloo_net::http::Request;

use crate::models::CartSnapshot;

/// Load the cart from the server. The backend creates the cart on first
/// request, so a success always carries `cart_id` and `items`.
pub async fn load_cart(cart_id: &str) -> Result<CartSnapshot, String> {
    let url = format!("/cart/view/{}", cart_id);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<CartSnapshot>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Overwrite the server-side cart with a full snapshot. The response body is
/// a plain-text acknowledgement.
pub async fn sync_cart(snapshot: &CartSnapshot) -> Result<String, String> {
    let response = Request::post("/cart/sync")
        .json(snapshot)
        .map_err(|e| format!("Serialization error: {}", e))?
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

/// Finalize the cart as an order. Returns the backend's confirmation text,
/// which includes the assigned order number.
pub async fn place_cart(cart_id: &str) -> Result<String, String> {
    let url = format!("/cart/place/{}", cart_id);
    let response = Request::post(&url)
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
