/// Backend base URL for the notes-listing endpoint.
///
/// Supplied at build time through the `BACKEND_URL` environment variable.
/// When unset this resolves to an empty address; requests will then fail and
/// be logged, leaving the UI in its empty state.
pub fn backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("")
}
