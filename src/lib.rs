//! Wanderlust Travels website behaviors.
//!
//! The pricing rules, package table, navigation highlighting and gallery modal
//! are plain functions over explicit state. On `wasm32` the `web` module binds
//! them to the page; natively the crate also ships the server that hosts the
//! site and a small JSON pricing API.

pub mod models;
pub mod pages;
pub mod pricing;

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod routes;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use server::AppState;

#[cfg(not(target_arch = "wasm32"))]
mod server {
    use std::sync::Arc;

    use crate::config::Config;
    use crate::models::Catalog;

    /// Shared, read-only state for request handlers
    #[derive(Clone)]
    pub struct AppState {
        pub config: Arc<Config>,
        pub catalog: Arc<Catalog>,
    }

    impl AppState {
        pub fn new(config: Config, catalog: Catalog) -> Self {
            Self {
                config: Arc::new(config),
                catalog: Arc::new(catalog),
            }
        }

        #[cfg(test)]
        pub fn for_tests() -> Self {
            let config = Config {
                static_dir: std::env::temp_dir().join("wanderlust-web-missing-static"),
                ..Config::default()
            };
            Self::new(config, Catalog::default())
        }
    }
}
