mod page;
mod query_service;
mod search;

pub use page::{Page, PageRequest};
pub use query_service::{QueryResponse, QueryService};
pub use search::Searchable;
