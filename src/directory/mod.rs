pub mod client;
pub mod http;
pub mod types;

pub use client::{DirectoryClient, FetchError};
pub use http::HttpDirectoryClient;
pub use types::{CategoriesResponse, EntriesResponse, Entry, Resource};
