// responses/download.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use mime::Mime;

/// Return bytes as a file download.
pub fn attachment_response(buffer: Vec<u8>, content_type: &Mime, filename: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type.as_ref())
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(buffer))
        .map_err(|_| ServerError::InternalError)?; // Convert any builder error

    Ok(resp)
}

/// MIME type for .xlsx workbooks.
pub fn xlsx_mime() -> Mime {
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        .parse()
        .unwrap_or(mime::APPLICATION_OCTET_STREAM)
}
