//! # Web Library
//!
//! HTTP handlers, middleware, static site serving and server bootstrap for the
//! Expenzez website and its account-deletion service.

pub mod handlers;
pub mod middleware;
pub mod server;
pub mod spa;
pub mod sweeper;

pub use server::{create_router, start_server, AppState, ServerConfig};
