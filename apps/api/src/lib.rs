//! PsycheGuide: psychometric self-assessment scoring service and client.

pub mod assessment;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod state;
