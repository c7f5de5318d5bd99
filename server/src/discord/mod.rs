//! Discord REST API Client

pub mod rest;

pub use rest::RestClient;
