/// A single outgoing email. Built per send call and dropped afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: Vec<String>,
    pub subject: Option<String>,
    pub body: String,
}

const MIME_HEADERS: &str = "MIME-version: 1.0;\r\nContent-Type: text/html; charset=\"UTF-8\";\r\n\r\n";

impl EmailMessage {
    #[must_use]
    pub fn new(to: Vec<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to,
            subject: Some(subject.into()),
            body: body.into(),
        }
    }

    /// Raw SMTP payload: optional `Subject` line, the HTML/UTF-8 MIME headers, then the body.
    /// CR and LF in the subject become spaces so it cannot open further header lines.
    #[must_use]
    pub fn to_mime_bytes(&self) -> Vec<u8> {
        let mut raw = String::with_capacity(MIME_HEADERS.len() + self.body.len() + 64);
        if let Some(subject) = &self.subject {
            raw.push_str("Subject: ");
            raw.extend(subject.chars().map(|c| if matches!(c, '\r' | '\n') { ' ' } else { c }));
            raw.push_str("\r\n");
        }
        raw.push_str(MIME_HEADERS);
        raw.push_str(&self.body);
        raw.into_bytes()
    }
}
