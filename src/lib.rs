//! API access layer for the OPJ Engenharia management dashboard.
//!
//! An authenticated HTTP client, a generic CRUD service over it, and one
//! service per domain area. Each service runs against either the live backend
//! or an in-memory fixture store, chosen once from [`Settings`].

pub mod api;
pub mod app;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod fixtures;
pub mod gateway;
pub mod logging;
pub mod services;
pub mod session;

pub use app::Services;
pub use client::{CrudService, HttpClient, Resource};
pub use config::{ApiMode, Settings};
pub use error::{Error, Result};
pub use session::Session;
