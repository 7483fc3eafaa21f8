//! # HTTP Middleware
//!
//! Response-side layers. Request authentication lives in
//! `tasknest_shared::auth::middleware` so both the router and the tests
//! wire the exact same layer.

pub mod security;
