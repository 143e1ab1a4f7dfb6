pub mod constants;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{origin_of, sanitize_origin, url_remainder};
