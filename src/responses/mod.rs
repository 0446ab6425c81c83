pub mod download;
pub mod errors;
pub mod html;

pub use crate::errors::ResultResp;
pub use errors::error_to_response;

// Normal HTML response
pub use html::{css_response, html_response, html_response_with_status, json_response};
pub use download::attachment_response;
