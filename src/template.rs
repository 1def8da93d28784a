use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

pub const SERVER_ERROR_MESSAGE: &str = "Failed to send message. Please try again later.";

pub struct Template;

impl Template {
    pub fn to_string<T: askama::Template>(&self, template: T) -> String {
        match template.render() {
            Ok(html) => html,
            Err(err) => format!("Failed to render template. Error: {err}"),
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(err = %err, "Failed to render template");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Template)
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "partials/toast-success.html")]
pub struct ToastSuccessTemplate<'a> {
    pub message: &'a str,
    pub description: Option<&'a str>,
}

#[derive(askama::Template)]
#[template(path = "partials/toast-error.html")]
pub struct ToastErrorTemplate<'a> {
    pub message: &'a str,
    pub description: Option<&'a str>,
}
