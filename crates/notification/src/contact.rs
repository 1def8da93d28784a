use async_trait::async_trait;
use portfolio_contact::{ContactSubmission, Notifier};

use crate::{EmailService, template::Template};

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactHtmlTemplate<'a> {
    pub submission: &'a ContactSubmission,
}

#[derive(askama::Template)]
#[template(path = "contact.txt")]
pub struct ContactPlainTemplate<'a> {
    pub submission: &'a ContactSubmission,
}

pub fn subject_line(submission: &ContactSubmission) -> String {
    format!("Portfolio Contact: {}", submission.subject)
}

#[async_trait]
impl Notifier for EmailService {
    async fn notify(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        let html = Template::to_string(ContactHtmlTemplate { submission });
        let plain = Template::to_string(ContactPlainTemplate { submission });

        let email = self.compose(
            Some(submission.email.to_owned()),
            subject_line(submission),
            html,
            plain,
        );

        self.send(email).await
    }
}

#[cfg(test)]
mod tests {
    use portfolio_contact::ContactInput;

    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission::try_from(ContactInput::new(
            "Ada <script>",
            "ada@example.com",
            "Hello & welcome",
            "line one\nline two",
        ))
        .unwrap()
    }

    #[test]
    fn subject_is_prefixed() {
        assert_eq!(
            subject_line(&submission()),
            "Portfolio Contact: Hello & welcome"
        );
    }

    #[test]
    fn html_body_escapes_visitor_input() {
        let submission = submission();
        let html = Template::to_string(ContactHtmlTemplate {
            submission: &submission,
        });

        assert!(html.contains("New Contact Form Submission"));
        assert!(html.contains("Ada &#60;script&#62;") || html.contains("Ada &lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("mailto:ada@example.com"));
        assert!(html.contains("white-space: pre-wrap"));
    }

    #[test]
    fn plain_body_keeps_message_verbatim() {
        let submission = submission();
        let plain = Template::to_string(ContactPlainTemplate {
            submission: &submission,
        });

        assert!(plain.contains("Name: Ada <script>"));
        assert!(plain.contains("line one\nline two"));
    }
}
