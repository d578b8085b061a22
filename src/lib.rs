// Library exports for Readable
// This allows integration tests and the binary to share the same modules

pub mod config;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;
pub mod store;
