//! JSON session service over the solvers: callers build a graph vertex by
//! vertex, pick a source and an algorithm, and get the result table back.

pub mod api;
pub mod models;
pub mod server;

pub use api::{create_router, AppState};
pub use server::{build_app, start_server, ServerConfig};
