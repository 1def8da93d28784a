use std::sync::Arc;

use axum::http::StatusCode;
use portfolio::FAILURE_MESSAGE;
use portfolio_contact::{Command, THANK_YOU_MESSAGE};
use serde_json::json;
use tower::ServiceExt;

mod helpers;

use helpers::{
    BrokenJournal, FailingNotifier, RecordingNotifier, body_json, body_string, form_request,
    json_request, setup_state, valid_payload,
};

#[tokio::test]
async fn test_submit_without_delivery_is_accepted_and_journaled() -> anyhow::Result<()> {
    let (state, journal) = setup_state(None);

    let response = portfolio::router(state)
        .oneshot(json_request("/api/contact", valid_payload().to_string()))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "success": true, "message": THANK_YOU_MESSAGE })
    );

    let records = journal.records.lock().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].submission.email, "ada@example.com");
    assert!(records[0].timestamp.ends_with('Z'));

    Ok(())
}

#[tokio::test]
async fn test_submit_forwards_to_notifier() -> anyhow::Result<()> {
    let notifier = Arc::new(RecordingNotifier::default());
    let (state, _journal) = setup_state(Some(notifier.clone()));

    let response = portfolio::router(state)
        .oneshot(json_request("/api/contact", valid_payload().to_string()))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);

    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].name, "Ada Lovelace");
    assert_eq!(sent[0].subject, "Project inquiry");
    assert_eq!(sent[0].message, "I'd like to build something.");

    Ok(())
}

#[tokio::test]
async fn test_missing_field_is_rejected() -> anyhow::Result<()> {
    let notifier = Arc::new(RecordingNotifier::default());
    let (state, journal) = setup_state(Some(notifier.clone()));

    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("subject");

    let response = portfolio::router(state)
        .oneshot(json_request("/api/contact", payload.to_string()))
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "All fields are required" })
    );
    assert!(notifier.sent.lock().unwrap().is_empty());
    assert_eq!(journal.len(), 0);

    Ok(())
}

#[tokio::test]
async fn test_empty_field_is_rejected() -> anyhow::Result<()> {
    let (state, _journal) = setup_state(None);

    let mut payload = valid_payload();
    payload["message"] = json!("");

    let response = portfolio::router(state)
        .oneshot(json_request("/api/contact", payload.to_string()))
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "All fields are required");

    Ok(())
}

#[tokio::test]
async fn test_missing_fields_win_over_bad_email() -> anyhow::Result<()> {
    let (state, _journal) = setup_state(None);

    let body = json!({ "email": "not-an-email", "name": "Ada" });

    let response = portfolio::router(state)
        .oneshot(json_request("/api/contact", body.to_string()))
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "All fields are required");

    Ok(())
}

#[tokio::test]
async fn test_invalid_email_is_rejected() -> anyhow::Result<()> {
    let (state, journal) = setup_state(None);

    for email in ["ada", "ada@example", "ada @example.com", "@example.com"] {
        let mut payload = valid_payload();
        payload["email"] = json!(email);

        let response = portfolio::router(state.clone())
            .oneshot(json_request("/api/contact", payload.to_string()))
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{email}");
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Invalid email format" })
        );
    }

    assert_eq!(journal.len(), 0);

    Ok(())
}

#[tokio::test]
async fn test_notifier_failure_still_succeeds() -> anyhow::Result<()> {
    let (state, journal) = setup_state(Some(Arc::new(FailingNotifier)));

    let response = portfolio::router(state)
        .oneshot(json_request("/api/contact", valid_payload().to_string()))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);
    assert_eq!(journal.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_duplicate_submissions_are_both_processed() -> anyhow::Result<()> {
    let notifier = Arc::new(RecordingNotifier::default());
    let (state, journal) = setup_state(Some(notifier.clone()));

    for _ in 0..2 {
        let response = portfolio::router(state.clone())
            .oneshot(json_request("/api/contact", valid_payload().to_string()))
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(notifier.sent.lock().unwrap().len(), 2);
    assert_eq!(journal.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_whitespace_fields_count_as_present() -> anyhow::Result<()> {
    let (state, journal) = setup_state(None);

    let mut payload = valid_payload();
    payload["subject"] = json!("   ");

    let response = portfolio::router(state)
        .oneshot(json_request("/api/contact", payload.to_string()))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(journal.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_extra_fields_are_ignored() -> anyhow::Result<()> {
    let (state, _journal) = setup_state(None);

    let mut payload = valid_payload();
    payload["company"] = json!("Analytical Engines Ltd");

    let response = portfolio::router(state)
        .oneshot(json_request("/api/contact", payload.to_string()))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_a_server_error() -> anyhow::Result<()> {
    let (state, journal) = setup_state(None);

    for body in ["{not json", "", "null"] {
        let response = portfolio::router(state.clone())
            .oneshot(json_request("/api/contact", body))
            .await?;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": FAILURE_MESSAGE })
        );
    }

    assert_eq!(journal.len(), 0);

    Ok(())
}

#[tokio::test]
async fn test_non_string_values_are_validated_not_rejected() -> anyhow::Result<()> {
    let (state, journal) = setup_state(None);

    let cases = [
        (json!({ "name": false, "email": "a@b.co", "subject": "S", "message": "M" }), "All fields are required"),
        (json!({ "name": 0, "email": "a@b.co", "subject": "S", "message": "M" }), "All fields are required"),
        (json!({ "name": "A", "email": null, "subject": "S", "message": "M" }), "All fields are required"),
        (json!({ "name": "A", "email": 5, "subject": "S", "message": "M" }), "Invalid email format"),
        (json!([]), "All fields are required"),
        (json!("a@b.co"), "All fields are required"),
    ];

    for (body, error) in cases {
        let response = portfolio::router(state.clone())
            .oneshot(json_request("/api/contact", body.to_string()))
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(body_json(response).await, json!({ "error": error }), "{body}");
    }

    assert_eq!(journal.len(), 0);

    Ok(())
}

#[tokio::test]
async fn test_truthy_non_strings_are_accepted() -> anyhow::Result<()> {
    let (state, journal) = setup_state(None);

    let body = json!({ "name": 42, "email": "a@b.co", "subject": true, "message": "M" });

    let response = portfolio::router(state)
        .oneshot(json_request("/api/contact", body.to_string()))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);

    let records = journal.records.lock().unwrap();
    assert_eq!(records[0].submission.name, "42");
    assert_eq!(records[0].submission.subject, "true");

    Ok(())
}

#[tokio::test]
async fn test_journal_failure_is_a_server_error() -> anyhow::Result<()> {
    let command = Command::new(None).with_journal(Arc::new(BrokenJournal));
    let state = helpers::state_with(command, portfolio::Showcase::default());

    let response = portfolio::router(state)
        .oneshot(json_request("/api/contact", valid_payload().to_string()))
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], FAILURE_MESSAGE);

    Ok(())
}

#[tokio::test]
async fn test_api_only_accepts_post() -> anyhow::Result<()> {
    let (state, _journal) = setup_state(None);

    let response = portfolio::router(state)
        .oneshot(helpers::get("/api/contact"))
        .await?;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}

#[tokio::test]
async fn test_form_post_renders_success_toast() -> anyhow::Result<()> {
    let (state, journal) = setup_state(None);

    let response = portfolio::router(state)
        .oneshot(form_request(
            "/contact",
            &[
                ("name", "Ada Lovelace"),
                ("email", "ada@example.com"),
                ("subject", "Project inquiry"),
                ("message", "Hello"),
            ],
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("toast-success"));
    assert!(html.contains("Message sent"));
    assert_eq!(journal.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_form_post_renders_validation_toast() -> anyhow::Result<()> {
    let (state, journal) = setup_state(None);

    let response = portfolio::router(state)
        .oneshot(form_request(
            "/contact",
            &[
                ("name", "Ada Lovelace"),
                ("email", "ada.example.com"),
                ("subject", "Project inquiry"),
                ("message", "Hello"),
            ],
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let html = body_string(response).await;
    assert!(html.contains("toast-error"));
    assert!(html.contains("Invalid email format"));
    assert_eq!(journal.len(), 0);

    Ok(())
}
