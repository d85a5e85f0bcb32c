//! HTTP access to the dashboard API.

pub mod crud;
pub mod http;

pub use crud::{CrudService, Resource};
pub use http::{path_segment, HttpClient, Payload, RequestOptions};
