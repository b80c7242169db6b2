use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config;

/// A user-created note. Only the title is rendered; any other fields the
/// backend sends alongside it (id, text, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Note {
    pub title: String,
}

#[derive(Debug, Deserialize)]
struct NotesListResponse {
    response: Vec<Note>,
}

/// Parse the notes-listing body: `{ "response": [ { "title": ... }, ... ] }`.
/// Order of the sequence is preserved as received.
pub fn parse_notes(body: &str) -> Result<Vec<Note>, String> {
    let parsed: NotesListResponse =
        serde_json::from_str(body).map_err(|e| format!("Failed to deserialize notes: {}", e))?;
    Ok(parsed.response)
}

/// Fetch the full list of notes from the configured backend.
pub async fn fetch_notes() -> Result<Vec<Note>, String> {
    let url = config::backend_url();

    // Create request
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| format!("Failed to create request: {:?}", e))?;

    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("Failed to set header: {:?}", e))?;

    // Fetch from backend
    let window = web_sys::window().ok_or("No window object")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {:?}", e))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "Failed to cast to Response")?;

    if !resp.ok() {
        return Err(format!("Backend returned status: {}", resp.status()));
    }

    // Read and parse the body
    let text = JsFuture::from(resp.text().map_err(|e| format!("Failed to get body: {:?}", e))?)
        .await
        .map_err(|e| format!("Failed to read body: {:?}", e))?;

    let body = text.as_string().ok_or("Response body was not a string")?;
    let notes = parse_notes(&body)?;

    log::info!("Fetched {} notes from backend", notes.len());
    Ok(notes)
}
