//! Mineral Museum Common Library
//!
//! Types and utilities shared by the web front end (WASM) and native tests:
//! record model, API configuration, display formatting, submission flow.

pub mod card;
pub mod config;
pub mod error;
pub mod format;
pub mod record;
pub mod submit;

pub use card::CardModel;
pub use config::ApiConfig;
pub use error::{Error, Result};
pub use record::{
    backend_error_message, FileUploadResponse, ItemsResponse, MineralRecord, NewMineral,
};
pub use submit::{submit_mineral, CatalogBackend, MineralForm, SubmitState};
