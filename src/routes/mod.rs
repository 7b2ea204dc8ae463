pub mod api_handlers;
pub mod health;
mod router;
pub mod types;

pub use router::create_router;
