use axum::{
    Form, Json,
    body::Bytes,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use portfolio_contact::{ContactInput, THANK_YOU_MESSAGE};
use serde::Serialize;

use crate::{
    routes::AppState,
    template::{Template, ToastErrorTemplate, ToastSuccessTemplate},
};

pub const FAILURE_MESSAGE: &str = crate::template::SERVER_ERROR_MESSAGE;

#[derive(Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

/// POST /api/contact
///
/// The body is parsed as JSON whatever the declared content type.
pub async fn api(State(app_state): State<AppState>, body: Bytes) -> Response {
    let input = match ContactInput::from_json(&body) {
        Ok(input) => input,
        Err(err) => {
            tracing::error!(err = %err, "Contact form error");

            return error_response(StatusCode::INTERNAL_SERVER_ERROR, FAILURE_MESSAGE);
        }
    };

    match app_state.contact.submit_form(input).await {
        Ok(_) => Json(SubmitResponse {
            success: true,
            message: THANK_YOU_MESSAGE,
        })
        .into_response(),
        Err(err) if err.is_validation() => {
            error_response(StatusCode::BAD_REQUEST, err.to_string())
        }
        Err(err) => {
            tracing::error!(err = %err, "Contact form error");

            error_response(StatusCode::INTERNAL_SERVER_ERROR, FAILURE_MESSAGE)
        }
    }
}

/// POST /contact, the no-script fallback answering with a toast fragment.
pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    form: Result<Form<ContactInput>, FormRejection>,
) -> Response {
    let input = match form {
        Ok(Form(input)) => input,
        Err(rejection) => {
            tracing::error!(err = %rejection.body_text(), "Contact form error");

            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                template.render(ToastErrorTemplate {
                    message: FAILURE_MESSAGE,
                    description: None,
                }),
            )
                .into_response();
        }
    };

    match app_state.contact.submit_form(input).await {
        Ok(_) => template.render(ToastSuccessTemplate {
            message: "Message sent",
            description: Some(THANK_YOU_MESSAGE),
        }),
        Err(err) if err.is_validation() => (
            StatusCode::BAD_REQUEST,
            template.render(ToastErrorTemplate {
                message: &err.to_string(),
                description: None,
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(err = %err, "Contact form error");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                template.render(ToastErrorTemplate {
                    message: FAILURE_MESSAGE,
                    description: None,
                }),
            )
                .into_response()
        }
    }
}
