use maud::Markup;
use poem::http::StatusCode;
use poem::Response;

pub fn html(code: StatusCode, markup: Markup) -> Response {
    Response::builder()
        .status(code)
        .content_type("text/html; charset=utf-8")
        .body(markup.into_string())
}
