//! HTTP API for the pulse daemon.

mod server;

pub use server::router;
