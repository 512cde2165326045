/// アップロード通知ハンドラー
///
/// S3アップロード通知イベントを受け取り、レコードごとに構造化ログを出力して
/// SNSトピックへ通知を発行する。
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::domain::{
    InvocationResult, LogEntry, MalformedEventError, MalformedRecordError, NotificationMessage,
    UploadEvent, UploadRecord,
};
use crate::infrastructure::{LogSink, NotifierConfig, SnsOps, SnsOpsError};

/// 通知ハンドラーのエラー型
///
/// 入力不正（`MalformedEvent`/`MalformedRecord`）と通知失敗（`Delivery`）を区別できる。
/// いずれの場合も残りのレコードは処理しない。
#[derive(Debug, Error)]
pub enum EventNotifierError {
    /// イベント全体の形式が不正
    #[error(transparent)]
    MalformedEvent(#[from] MalformedEventError),
    /// レコードの必須フィールドが欠落
    #[error(transparent)]
    MalformedRecord(#[from] MalformedRecordError),
    /// ログエントリまたは結果のシリアライズに失敗
    #[error("JSONシリアライズエラー: {0}")]
    Serialize(#[from] serde_json::Error),
    /// SNSへの発行に失敗
    #[error("通知の発行に失敗しました: {0}")]
    Delivery(#[from] SnsOpsError),
}

/// アップロード通知ハンドラー
///
/// SNSクライアントとログシンクはプロセス起動時に一度だけ作成して注入し、
/// 以降の呼び出しで再利用する。
pub struct EventNotifier<S, L>
where
    S: SnsOps,
    L: LogSink,
{
    /// SNS操作
    sns_ops: S,
    /// ログ出力先
    log_sink: L,
    /// 通知先トピックARNと件名
    config: NotifierConfig,
}

impl<S, L> EventNotifier<S, L>
where
    S: SnsOps,
    L: LogSink,
{
    /// 新しいEventNotifierを作成
    pub fn new(sns_ops: S, log_sink: L, config: NotifierConfig) -> Self {
        Self {
            sns_ops,
            log_sink,
            config,
        }
    }

    /// アップロード通知イベントを処理
    ///
    /// # 処理フロー
    /// 1. `Records`配列を取り出す（存在しない場合は空）
    /// 2. 入力順にレコードを抽出し、ログ出力してからSNSに発行
    /// 3. `Records`の件数を含む結果を返却
    ///
    /// 不正なレコードや発行失敗があった時点で中断し、エラーを返す。
    /// それ以前のレコードのログ出力・発行は取り消されない。
    ///
    /// # 引数
    /// * `event` - S3イベントペイロード
    ///
    /// # 戻り値
    /// * `Ok(InvocationResult)` - statusCode 200と処理件数
    /// * `Err(EventNotifierError)` - 入力不正または発行失敗
    pub async fn handle(&self, event: &Value) -> Result<InvocationResult, EventNotifierError> {
        let batch = UploadEvent::from_value(event)?;

        debug!(record_count = batch.len(), "アップロードイベントを受信");

        for record in batch.records() {
            self.process_record(&record?).await?;
        }

        let result = InvocationResult::processed(batch.len())?;

        debug!(record_count = batch.len(), "アップロードイベント処理完了");

        Ok(result)
    }

    /// 1レコード分のログ出力と通知発行
    async fn process_record(&self, record: &UploadRecord) -> Result<(), EventNotifierError> {
        let entry = LogEntry::from_record(record);
        let line = entry.to_json()?;
        self.log_sink.emit(&entry, &line);

        let message = NotificationMessage::new(self.config.subject(), entry);
        let published = self
            .sns_ops
            .publish(
                self.config.topic_arn(),
                &message.body_json()?,
                Some(message.subject()),
            )
            .await?;

        debug!(
            bucket = %record.bucket_name(),
            object_key = %record.object_key(),
            topic_arn = %published.topic_arn,
            message_id = %published.message_id,
            "アップロード通知を発行"
        );

        Ok(())
    }
}
