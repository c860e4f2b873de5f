// HTTP server modules
pub mod handlers;
pub mod models;
pub mod routes;

// Message storage engine
pub mod store;

// Startup
pub mod config;
pub mod logging;
