//! SNS操作モジュール
//!
//! アップロード通知をSNSトピックへ発行する。
//! 再試行・タイムアウトはAWS SDKの既定動作に任せ、このモジュールでは行わない。

use async_trait::async_trait;
use aws_sdk_sns::Client as SnsClient;
use thiserror::Error;
use tracing::{debug, warn};

/// SNS操作のエラー型
#[derive(Debug, Error)]
pub enum SnsOpsError {
    /// AWS SDK エラー
    #[error("AWS SNS APIエラー: {0}")]
    AwsSdkError(String),
}

/// SNSメッセージ発行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishResult {
    /// メッセージID
    pub message_id: String,
    /// 発行先トピックARN
    pub topic_arn: String,
}

impl PublishResult {
    pub fn new(topic_arn: impl Into<String>, message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            topic_arn: topic_arn.into(),
        }
    }
}

/// SNS操作トレイト（テスト用の抽象化）
///
/// 実装はプロセス内で共有されるため`Send + Sync`を要求する。
#[async_trait]
pub trait SnsOps: Send + Sync {
    /// メッセージをSNSトピックに発行する
    ///
    /// # 引数
    /// * `topic_arn` - SNSトピックARN
    /// * `message` - 発行するメッセージ（JSON文字列）
    /// * `subject` - メッセージの件名（オプション）
    ///
    /// # 戻り値
    /// * `Ok(PublishResult)` - 発行結果
    /// * `Err(SnsOpsError)` - エラー
    async fn publish(
        &self,
        topic_arn: &str,
        message: &str,
        subject: Option<&str>,
    ) -> Result<PublishResult, SnsOpsError>;
}

/// 実際のAWS SNS SDKを使用したSNS操作実装
pub struct AwsSnsOps {
    client: SnsClient,
}

impl AwsSnsOps {
    /// 新しいAwsSnsOpsを作成
    pub fn new(client: SnsClient) -> Self {
        Self { client }
    }

    /// AWS設定からデフォルトのクライアントを作成
    pub async fn from_config() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = SnsClient::new(&config);
        Self::new(client)
    }
}

#[async_trait]
impl SnsOps for AwsSnsOps {
    async fn publish(
        &self,
        topic_arn: &str,
        message: &str,
        subject: Option<&str>,
    ) -> Result<PublishResult, SnsOpsError> {
        let mut request = self
            .client
            .publish()
            .topic_arn(topic_arn)
            .message(message);

        if let Some(subj) = subject {
            request = request.subject(subj);
        }

        match request.send().await {
            Ok(response) => {
                let message_id = response.message_id().unwrap_or("unknown").to_string();

                debug!(
                    topic_arn = %topic_arn,
                    message_id = %message_id,
                    "SNS Publish成功"
                );

                Ok(PublishResult::new(topic_arn, message_id))
            }
            Err(err) => {
                warn!(
                    topic_arn = %topic_arn,
                    error = %err,
                    "SNS Publishエラー"
                );
                Err(SnsOpsError::AwsSdkError(err.to_string()))
            }
        }
    }
}
