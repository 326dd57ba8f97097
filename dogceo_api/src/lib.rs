mod client;
mod errors;
pub mod types;
pub use self::client::{parse_base_url, Client, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::Error;
