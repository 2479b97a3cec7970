//! Film API Bindings
//!
//! The one network call the app makes. Takes a `PageRequest` value
//! object and returns the decoded page or a display-ready message.

use gloo_net::http::Request;

use crate::models::{FilmListResponse, PageRequest, PageResponse};

const FILMS_URL: &str = "https://pagination-back.onrender.com/test";

/// Fetch one page of films. Network failures and non-success statuses
/// both collapse into the error message shown in place of the table.
pub async fn fetch_films(request: &PageRequest) -> Result<PageResponse, String> {
    let url = format!("{}?{}", FILMS_URL, request.query_string());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!(
            "Request failed with status {}",
            response.status()
        ));
    }

    let raw: FilmListResponse = response.json().await.map_err(|e| e.to_string())?;
    Ok(raw.into())
}
