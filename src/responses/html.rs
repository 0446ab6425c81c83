use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;
use mime::Mime;

pub fn html_response(markup: Markup) -> ResultResp {
    html_response_with_status(200, markup)
}

pub fn html_response_with_status(status: u16, markup: Markup) -> ResultResp {
    body_response(status, &mime::TEXT_HTML_UTF_8, markup.into_string())
}

pub fn json_response(body: Vec<u8>) -> ResultResp {
    body_response(200, &mime::APPLICATION_JSON, body)
}

pub fn css_response(css: &'static str) -> ResultResp {
    body_response(200, &mime::TEXT_CSS_UTF_8, css)
}

fn body_response(status: u16, content_type: &Mime, body: impl Into<Body>) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", content_type.as_ref())
        .body(body.into())
        .map_err(|_| ServerError::InternalError)
}
