use courier_application::{
    error::{AppError, AppResult},
    ports::outgoing::{email_provider::SmtpAuth, mail_transport::MailTransportPort},
};
use lettre::{
    Address, AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
    address::Envelope,
    transport::smtp::authentication::{Credentials, Mechanism},
};
use secrecy::ExposeSecret;
use std::net::IpAddr;
use tracing::{error, info, instrument};

/// Submits raw messages over a fresh lettre SMTP connection per call.
#[derive(Debug, Clone)]
pub struct LettreMailTransport {
    use_tls: bool,
}

impl LettreMailTransport {
    /// STARTTLS submission, as used by every hosted provider.
    pub fn new() -> Self {
        Self { use_tls: true }
    }

    /// No TLS at all. Only loopback hosts are accepted, so credentials never cross the network
    /// in cleartext.
    pub fn plaintext() -> Self {
        Self { use_tls: false }
    }

    fn connect(
        &self,
        host: &str,
        port: u16,
        auth: &SmtpAuth,
    ) -> AppResult<AsyncSmtpTransport<Tokio1Executor>> {
        let builder = if self.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host).map_err(AppError::transport)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
        };

        let credentials = Credentials::new(
            auth.username.clone(),
            auth.password.expose_secret().to_string(),
        );

        Ok(builder
            .port(port)
            .credentials(credentials)
            .authentication(vec![Mechanism::Plain])
            .build())
    }
}

impl Default for LettreMailTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn is_loopback(host: &str) -> bool {
    host.eq_ignore_ascii_case("localhost")
        || host
            .trim_start_matches('[')
            .trim_end_matches(']')
            .parse::<IpAddr>()
            .is_ok_and(|ip| ip.is_loopback())
}

fn split_address(address: &str) -> AppResult<(&str, u16)> {
    let (host, port) = address
        .rsplit_once(':')
        .ok_or_else(|| AppError::ConfigError {
            message: format!("SMTP address '{address}' must be host:port"),
        })?;

    let port = port.parse::<u16>().map_err(|e| AppError::ConfigError {
        message: format!("Invalid SMTP port in '{address}': {e}"),
    })?;

    Ok((host, port))
}

fn build_envelope(from: &str, to: &[String]) -> AppResult<Envelope> {
    let from = from.parse::<Address>().map_err(|e| AppError::InvalidAddress {
        message: format!("Invalid from email address '{from}': {e}"),
    })?;

    let recipients = to
        .iter()
        .map(|recipient| {
            recipient
                .parse::<Address>()
                .map_err(|e| AppError::InvalidAddress {
                    message: format!("Invalid recipient email address '{recipient}': {e}"),
                })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Envelope::new(Some(from), recipients).map_err(|e| AppError::InvalidAddress {
        message: format!("Failed to build envelope: {e}"),
    })
}

#[async_trait::async_trait]
impl MailTransportPort for LettreMailTransport {
    #[instrument(skip(self, auth, message), fields(recipients = to.len()))]
    async fn send_raw(
        &self,
        address: &str,
        auth: &SmtpAuth,
        from: &str,
        to: &[String],
        message: &[u8],
    ) -> AppResult<()> {
        let (host, port) = split_address(address)?;

        // PLAIN credentials are only handed to the server they were issued for.
        if auth.host != host {
            return Err(AppError::ConfigError {
                message: format!(
                    "credentials for '{}' cannot be used with '{host}'",
                    auth.host
                ),
            });
        }

        if !self.use_tls && !is_loopback(host) {
            return Err(AppError::ConfigError {
                message: format!("refusing to send credentials unencrypted to '{host}'"),
            });
        }

        let envelope = build_envelope(from, to)?;
        let transport = self.connect(host, port, auth)?;

        transport.send_raw(&envelope, message).await.map_err(|e| {
            error!(error = %e, smtp_host = host, smtp_port = port, "Failed to send email");
            AppError::transport(e)
        })?;

        info!(smtp_host = host, smtp_port = port, "Email submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::email::message::EmailMessage;
    use pretty_assertions::assert_eq;
    use secrecy::SecretString;
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
    use tokio::net::TcpListener;

    #[derive(Debug, Default)]
    struct SmtpSession {
        commands: Vec<String>,
        data: Vec<u8>,
    }

    /// Accepts one connection and answers like a minimal ESMTP server offering AUTH PLAIN.
    async fn serve_one_session(listener: TcpListener) -> SmtpSession {
        let (stream, _) = listener.accept().await.unwrap();
        let (read_half, mut write_half) = stream.into_split();
        let mut reader = BufReader::new(read_half);
        let mut session = SmtpSession::default();

        write_half.write_all(b"220 localhost ESMTP\r\n").await.unwrap();

        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).await.unwrap() == 0 {
                break;
            }
            let command = line.trim_end().to_string();
            let verb = command
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_ascii_uppercase();
            session.commands.push(command);

            let reply: &[u8] = match verb.as_str() {
                "EHLO" | "HELO" => b"250-localhost\r\n250 AUTH PLAIN\r\n",
                "AUTH" => b"235 2.7.0 Authentication successful\r\n",
                "MAIL" | "RCPT" => b"250 OK\r\n",
                "DATA" => {
                    write_half
                        .write_all(b"354 End data with <CR><LF>.<CR><LF>\r\n")
                        .await
                        .unwrap();
                    let mut data = Vec::new();
                    while !data.ends_with(b"\r\n.\r\n") {
                        if reader.read_until(b'\n', &mut data).await.unwrap() == 0 {
                            break;
                        }
                    }
                    data.truncate(data.len().saturating_sub(b"\r\n.\r\n".len()));
                    session.data = data;
                    b"250 OK: queued\r\n"
                }
                "QUIT" => {
                    write_half.write_all(b"221 Bye\r\n").await.unwrap();
                    break;
                }
                _ => b"502 Command not implemented\r\n",
            };
            write_half.write_all(reply).await.unwrap();
        }

        session
    }

    #[tokio::test]
    async fn submits_auth_envelope_and_raw_message_to_the_server() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = tokio::spawn(serve_one_session(listener));

        let message = EmailMessage::new(
            vec!["a@example.com".to_string(), "b@example.com".to_string()],
            "Hi",
            "<p>x</p>",
        );
        let raw = message.to_mime_bytes();

        LettreMailTransport::plaintext()
            .send_raw(
                &format!("127.0.0.1:{port}"),
                &auth("127.0.0.1"),
                "bot@example.com",
                &message.to,
                &raw,
            )
            .await
            .unwrap();

        let session = server.await.unwrap();

        // base64("\0bot@example.com\0pw")
        assert!(
            session
                .commands
                .contains(&"AUTH PLAIN AGJvdEBleGFtcGxlLmNvbQBwdw==".to_string())
        );
        let envelope: Vec<&str> = session
            .commands
            .iter()
            .map(String::as_str)
            .filter(|c| c.starts_with("MAIL FROM") || c.starts_with("RCPT TO"))
            .collect();
        assert_eq!(
            envelope,
            vec![
                "MAIL FROM:<bot@example.com>",
                "RCPT TO:<a@example.com>",
                "RCPT TO:<b@example.com>",
            ]
        );
        assert_eq!(String::from_utf8(session.data).unwrap(), String::from_utf8(raw).unwrap());
    }

    #[tokio::test]
    async fn plaintext_refuses_non_loopback_hosts() {
        let err = LettreMailTransport::plaintext()
            .send_raw(
                "smtp.example.com:25",
                &auth("smtp.example.com"),
                "bot@example.com",
                &["a@example.com".to_string()],
                b"body",
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ConfigError { ref message } if message.contains("unencrypted")));
    }

    #[test]
    fn loopback_detection() {
        assert!(is_loopback("localhost"));
        assert!(is_loopback("127.0.0.1"));
        assert!(is_loopback("[::1]"));
        assert!(!is_loopback("smtp.gmail.com"));
        assert!(!is_loopback("10.0.0.5"));
    }

    fn auth(host: &str) -> SmtpAuth {
        SmtpAuth {
            username: "bot@example.com".to_string(),
            password: SecretString::from("pw"),
            host: host.to_string(),
        }
    }

    #[test]
    fn splits_host_and_port() {
        assert_eq!(
            split_address("smtp.gmail.com:587").unwrap(),
            ("smtp.gmail.com", 587)
        );
    }

    #[test]
    fn rejects_addresses_without_a_valid_port() {
        assert!(matches!(
            split_address("smtp.gmail.com"),
            Err(AppError::ConfigError { .. })
        ));
        assert!(matches!(
            split_address("smtp.gmail.com:smtp"),
            Err(AppError::ConfigError { .. })
        ));
    }

    #[test]
    fn envelope_keeps_recipient_order() {
        let envelope = build_envelope(
            "bot@example.com",
            &["b@example.com".to_string(), "a@example.com".to_string()],
        )
        .unwrap();

        let to: Vec<String> = envelope.to().iter().map(ToString::to_string).collect();
        assert_eq!(to, vec!["b@example.com", "a@example.com"]);
        assert_eq!(
            envelope.from().map(ToString::to_string),
            Some("bot@example.com".to_string())
        );
    }

    #[test]
    fn envelope_requires_a_recipient() {
        assert!(matches!(
            build_envelope("bot@example.com", &[]),
            Err(AppError::InvalidAddress { .. })
        ));
    }

    #[tokio::test]
    async fn malformed_recipient_fails_before_connecting() {
        let err = LettreMailTransport::new()
            .send_raw(
                "smtp.example.invalid:587",
                &auth("smtp.example.invalid"),
                "bot@example.com",
                &["not-an-address".to_string()],
                b"body",
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidAddress { .. }));
    }

    #[tokio::test]
    async fn credentials_for_another_host_are_refused() {
        let err = LettreMailTransport::plaintext()
            .send_raw(
                "smtp.example.invalid:25",
                &auth("smtp.other.invalid"),
                "bot@example.com",
                &["a@example.com".to_string()],
                b"body",
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ConfigError { .. }));
    }
}
