/// SNS通知メッセージ
use super::log_entry::LogEntry;

/// 通知の件名（デフォルト値）
pub const DEFAULT_NOTIFICATION_SUBJECT: &str = "Novo arquivo no bucket S3";

/// 件名とログエントリ本文からなる通知メッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    subject: String,
    body: LogEntry,
}

impl NotificationMessage {
    pub fn new(subject: impl Into<String>, body: LogEntry) -> Self {
        Self {
            subject: subject.into(),
            body,
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// SNSに発行するメッセージ本文（ログエントリのJSON）
    pub fn body_json(&self) -> Result<String, serde_json::Error> {
        self.body.to_json()
    }
}
