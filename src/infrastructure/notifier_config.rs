/// 通知Lambda設定
///
/// 環境変数から通知先SNSトピックARNと件名を読み込む。
use thiserror::Error;

use crate::domain::DEFAULT_NOTIFICATION_SUBJECT;

/// SNSの件名の最大文字数
pub const MAX_SUBJECT_LENGTH: usize = 100;

/// 通知設定のエラー型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifierConfigError {
    #[error("環境変数が設定されていません: {0}")]
    MissingEnvVar(String),
    #[error("通知の件名が長すぎます: {0}文字（最大{max}文字）", max = MAX_SUBJECT_LENGTH)]
    SubjectTooLong(usize),
}

/// 通知Lambda設定
///
/// 以下の環境変数から読み込む:
/// - SNS_TOPIC_ARN: 通知先SNSトピックARN（必須）
/// - NOTIFICATION_SUBJECT: 通知の件名（省略時は"Novo arquivo no bucket S3"）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    /// 通知先SNSトピックARN
    topic_arn: String,
    /// 通知の件名
    subject: String,
}

impl NotifierConfig {
    /// 環境変数から設定を読み込む
    ///
    /// # エラー
    /// SNS_TOPIC_ARNが未設定・空の場合、または件名が長すぎる場合はエラーを返す
    pub fn from_env() -> Result<Self, NotifierConfigError> {
        let topic_arn = std::env::var("SNS_TOPIC_ARN")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| NotifierConfigError::MissingEnvVar("SNS_TOPIC_ARN".to_string()))?;

        let subject = std::env::var("NOTIFICATION_SUBJECT")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_NOTIFICATION_SUBJECT.to_string());

        let subject_length = subject.chars().count();
        if subject_length > MAX_SUBJECT_LENGTH {
            return Err(NotifierConfigError::SubjectTooLong(subject_length));
        }

        Ok(Self { topic_arn, subject })
    }

    /// 明示的な値で設定を作成（テスト用）
    pub fn new(topic_arn: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            topic_arn: topic_arn.into(),
            subject: subject.into(),
        }
    }

    /// 通知先SNSトピックARNを取得
    pub fn topic_arn(&self) -> &str {
        &self.topic_arn
    }

    /// 通知の件名を取得
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const TOPIC_ARN: &str = "arn:aws:sns:us-east-1:123456789012:MyTopic";

    // 安全性: #[serial]で直列実行されるテストからのみ呼び出す
    fn clear_env() {
        unsafe {
            std::env::remove_var("SNS_TOPIC_ARN");
            std::env::remove_var("NOTIFICATION_SUBJECT");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_default_subject() {
        clear_env();
        unsafe {
            std::env::set_var("SNS_TOPIC_ARN", TOPIC_ARN);
        }

        let config = NotifierConfig::from_env().expect("設定読み込みに失敗");

        assert_eq!(config.topic_arn(), TOPIC_ARN);
        assert_eq!(config.subject(), "Novo arquivo no bucket S3");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_custom_subject() {
        clear_env();
        unsafe {
            std::env::set_var("SNS_TOPIC_ARN", TOPIC_ARN);
            std::env::set_var("NOTIFICATION_SUBJECT", "New upload");
        }

        let config = NotifierConfig::from_env().expect("設定読み込みに失敗");

        assert_eq!(config.subject(), "New upload");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_blank_subject_falls_back_to_default() {
        clear_env();
        unsafe {
            std::env::set_var("SNS_TOPIC_ARN", TOPIC_ARN);
            std::env::set_var("NOTIFICATION_SUBJECT", "   ");
        }

        let config = NotifierConfig::from_env().expect("設定読み込みに失敗");

        assert_eq!(config.subject(), DEFAULT_NOTIFICATION_SUBJECT);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_topic_arn() {
        clear_env();

        let result = NotifierConfig::from_env();

        assert_eq!(
            result.unwrap_err(),
            NotifierConfigError::MissingEnvVar("SNS_TOPIC_ARN".to_string())
        );
    }

    #[test]
    #[serial]
    fn test_from_env_blank_topic_arn() {
        clear_env();
        unsafe {
            std::env::set_var("SNS_TOPIC_ARN", "  ");
        }

        let result = NotifierConfig::from_env();

        assert!(matches!(
            result,
            Err(NotifierConfigError::MissingEnvVar(_))
        ));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_subject_too_long() {
        clear_env();
        unsafe {
            std::env::set_var("SNS_TOPIC_ARN", TOPIC_ARN);
            std::env::set_var("NOTIFICATION_SUBJECT", "x".repeat(101));
        }

        let result = NotifierConfig::from_env();

        assert_eq!(result.unwrap_err(), NotifierConfigError::SubjectTooLong(101));

        clear_env();
    }

    #[test]
    fn test_new() {
        let config = NotifierConfig::new(TOPIC_ARN, "subject");

        assert_eq!(config.topic_arn(), TOPIC_ARN);
        assert_eq!(config.subject(), "subject");
    }

    #[test]
    fn test_error_display() {
        let err = NotifierConfigError::MissingEnvVar("SNS_TOPIC_ARN".to_string());
        assert_eq!(err.to_string(), "環境変数が設定されていません: SNS_TOPIC_ARN");

        let err = NotifierConfigError::SubjectTooLong(120);
        assert_eq!(
            err.to_string(),
            "通知の件名が長すぎます: 120文字（最大100文字）"
        );
    }
}
