pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod repo;
pub mod routes;
pub mod schema;
pub mod templates;
pub mod thread;

use std::sync::Arc;

use crate::{config::Config, repo::Store};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Store,
}
