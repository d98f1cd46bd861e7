//! HTTP interface module.

pub mod handlers;
pub mod routes;
