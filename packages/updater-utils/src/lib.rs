pub mod http;
pub mod versioning;

// Re-export main utilities
pub use http::{get, http_status_is_ok, ResponseData};
pub use versioning::{parse_tag, AppVersion, ParsedTag};
