//! Minimal HTTP service scaffold: a health check, a ping endpoint, and
//! environment-derived settings that drive the CORS policy.

pub mod cli;
pub mod config;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
