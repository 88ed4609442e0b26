mod json_config;
mod path_id;
mod response;

pub use json_config::custom_json_config;
pub use path_id::parse_positive_id;
pub use response::{ApiError, ApiResponse};
