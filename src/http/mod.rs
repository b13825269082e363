mod request_line;
mod status;

pub use request_line::{RequestLine, RequestLineError};
pub use status::Status;

pub static HTTP_VERSION: &str = "HTTP/1.1";
