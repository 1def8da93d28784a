mod helpers;

use std::sync::{Arc, atomic::Ordering};

use helpers::{BrokenJournal, FailingNotifier, RecordingNotifier, command_with};
use portfolio_contact::{Command, ContactInput};
use portfolio_shared::Error;

fn valid_input() -> ContactInput {
    ContactInput::new("A", "a@b.co", "S", "M")
}

#[tokio::test]
async fn valid_submission_is_journaled_once() -> anyhow::Result<()> {
    let (command, journal) = command_with(None);

    let record = command.submit_form(valid_input()).await?;

    let records = journal.records.lock().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0], record);
    assert_eq!(record.submission.name, "A");
    assert_eq!(record.submission.email, "a@b.co");
    assert_eq!(record.submission.subject, "S");
    assert_eq!(record.submission.message, "M");
    assert!(record.timestamp.ends_with('Z'));
    assert_eq!(record.timestamp.len(), "2024-01-01T00:00:00.000Z".len());

    Ok(())
}

#[tokio::test]
async fn without_notifier_no_delivery_is_attempted() -> anyhow::Result<()> {
    let (command, _journal) = command_with(None);

    assert!(!command.delivery_enabled());
    command.submit_form(valid_input()).await?;

    Ok(())
}

#[tokio::test]
async fn missing_field_skips_delivery_and_journal() {
    let notifier = Arc::new(RecordingNotifier::default());
    let (command, journal) = command_with(Some(notifier.clone()));

    let err = command
        .submit_form(ContactInput {
            subject: None,
            ..valid_input()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validate(ref msg) if msg == "All fields are required"));
    assert!(notifier.sent.lock().unwrap().is_empty());
    assert!(journal.records.lock().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_email_skips_delivery() {
    let notifier = Arc::new(RecordingNotifier::default());
    let (command, _journal) = command_with(Some(notifier.clone()));

    let err = command
        .submit_form(ContactInput {
            email: Some("someone@localhost".to_owned()),
            ..valid_input()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validate(ref msg) if msg == "Invalid email format"));
    assert!(notifier.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn delivery_receives_the_submission() -> anyhow::Result<()> {
    let notifier = Arc::new(RecordingNotifier::default());
    let (command, _journal) = command_with(Some(notifier.clone()));

    command.submit_form(valid_input()).await?;

    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].email, "a@b.co");

    Ok(())
}

#[tokio::test]
async fn delivery_failure_is_absorbed() -> anyhow::Result<()> {
    let notifier = Arc::new(FailingNotifier::default());
    let (command, journal) = command_with(Some(notifier.clone()));

    let record = command.submit_form(valid_input()).await?;

    assert_eq!(notifier.attempts.load(Ordering::SeqCst), 1);
    assert_eq!(journal.records.lock().unwrap().as_slice(), &[record]);

    Ok(())
}

#[tokio::test]
async fn identical_submissions_are_not_deduplicated() -> anyhow::Result<()> {
    let notifier = Arc::new(RecordingNotifier::default());
    let (command, journal) = command_with(Some(notifier.clone()));

    let results = futures::future::join_all([
        command.submit_form(valid_input()),
        command.submit_form(valid_input()),
    ])
    .await;

    for result in results {
        result?;
    }

    assert_eq!(notifier.sent.lock().unwrap().len(), 2);
    assert_eq!(journal.records.lock().unwrap().len(), 2);

    Ok(())
}

#[tokio::test]
async fn journal_failure_is_unexpected() {
    let command = Command::new(None).with_journal(Arc::new(BrokenJournal));

    let err = command.submit_form(valid_input()).await.unwrap_err();

    assert!(matches!(err, Error::Unknown(_)));
    assert!(!err.is_validation());
}
