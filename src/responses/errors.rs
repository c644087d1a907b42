use crate::errors::ServerError;
use crate::templates::pages::error_page;
use astra::{Body, Response, ResponseBuilder};

/// Last-resort conversion used by the server loop when a handler fails.
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();
    let html = error_page(status, &err.public_message(), None).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(html))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
