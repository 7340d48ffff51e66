pub mod app_state;
pub mod configuration;
pub mod content;
pub mod domain;
pub mod forms;
pub mod request_id;
pub mod routes;
pub mod session_state;
pub mod startup;
pub mod supabase_client;
pub mod telemetry;
pub mod utils;
