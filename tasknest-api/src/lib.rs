//! # TaskNest API Server Library
//!
//! HTTP layer over `tasknest-shared`: configuration, router assembly,
//! error mapping, and the route handlers themselves. The binary in
//! `main.rs` wires a storage backend to this router and serves it.

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
