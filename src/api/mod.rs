//! Wire-level list and response shapes shared by every resource.

pub mod pagination;
pub mod response;

pub use pagination::{ListParams, ListResponse, Paginated, SortOrder};
pub use response::MessageResponse;
