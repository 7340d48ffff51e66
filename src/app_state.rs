use crate::supabase_client::SupabaseClient;
use axum::http::Uri;

#[derive(Clone)]
pub struct AppState {
    /// `None` when the hosted database is not configured.
    pub supabase: Option<SupabaseClient>,
    pub base_url: Uri,
}
