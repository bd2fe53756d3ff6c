//! Web server module
//!
//! Thin inbound layer: validates the query, defaults the page, injects the
//! configured credential, measures wall-clock time and renders the state.
//! All the interesting behavior lives in [`crate::search`].

mod handlers;
mod routes;
mod state;
mod templates;

pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
