//! Maps framework errors to rendered error pages.

use maud::html;
use poem::error::NotFoundError;
use poem::http::StatusCode;
use poem::{Endpoint, Middleware, Request, Response, Result};

use crate::prelude::*;
use crate::web::partials::document;
use crate::web::responses;
use crate::web::theme::Theme;

pub struct ErrorMiddleware;

impl<E: Endpoint<Output = Response>> Middleware<E> for ErrorMiddleware {
    type Output = ErrorMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        ErrorMiddlewareImpl { ep }
    }
}

pub struct ErrorMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint<Output = Response>> Endpoint for ErrorMiddlewareImpl<E> {
    type Output = Response;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let method = request.method().clone();
        let uri = request.uri().clone();
        let theme = Theme::from_cookies(request.cookie());
        match self.ep.call(request).await {
            Err(error) if error.is::<NotFoundError>() => {
                info!(?method, ?uri, "{:#}", error);
                Ok(error_page(theme, StatusCode::NOT_FOUND, "There is no such page."))
            }
            Err(error) => {
                let message = error.to_string();
                let status = error.into_response().status();
                if status.is_server_error() {
                    error!(?method, ?uri, %status, message = message.as_str(), "request failed");
                    Ok(error_page(
                        theme,
                        status,
                        "Something went wrong on our side. Refreshing the page may help.",
                    ))
                } else {
                    info!(?method, ?uri, %status, message = message.as_str(), "bad request");
                    Ok(error_page(theme, status, "The request could not be processed."))
                }
            }
            result => result,
        }
    }
}

fn error_page(theme: Theme, code: StatusCode, message: &str) -> Response {
    responses::html(
        code,
        document(
            theme,
            "/",
            Some("Error"),
            html! {
                section.section {
                    div.container {
                        article.message.is-danger {
                            div.message-header { p { (code.as_str()) } }
                            div.message-body {
                                p { (message) }
                                p { a href="/" { "Go to the home page" } }
                            }
                        }
                    }
                }
            },
        ),
    )
}
