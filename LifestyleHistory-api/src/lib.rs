// Lifestyle & Medical History API lib.rs
//
// HTTP layer: routing, handlers, public entities and API documentation.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;

pub use api::create_app;
