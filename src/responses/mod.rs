pub mod errors;
pub mod html;
pub mod json;
pub mod xml;

pub use errors::{html_error_response, json_error_response, ResultResp};

pub use html::{html_response, see_other};
pub use json::json_response;
pub use xml::xml_response;
