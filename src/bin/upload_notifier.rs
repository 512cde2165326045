/// S3アップロード通知Lambda関数
///
/// S3のオブジェクト作成イベントからトリガーされ、アップロードされたオブジェクトごとに
/// 構造化ログを出力してSNSトピックへ通知を発行する。
///
/// SNSクライアントと設定はコールドスタート時に一度だけ作成し、
/// 以降の呼び出しで共有する。
use lambda_runtime::{Error, LambdaEvent, service_fn};
use s3_upload_notifier::application::EventNotifier;
use s3_upload_notifier::domain::InvocationResult;
use s3_upload_notifier::infrastructure::{
    AwsSnsOps, LogSink, NotifierConfig, SnsOps, TracingLogSink, init_logging,
};
use serde_json::Value;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // 設定を環境変数から読み込み
    let config = match NotifierConfig::from_env() {
        Ok(config) => {
            info!(
                sns_topic_arn = config.topic_arn(),
                subject = config.subject(),
                "通知設定を読み込み"
            );
            config
        }
        Err(err) => {
            error!(error = %err, "通知設定読み込み失敗");
            return Err(err.into());
        }
    };

    let sns_ops = AwsSnsOps::from_config().await;
    let notifier = EventNotifier::new(sns_ops, TracingLogSink, config);
    let notifier = &notifier;

    // Lambda関数を初期化して実行
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(notifier, event).await
    }))
    .await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// 失敗時はエラーをそのままランタイムに返す（エラーレスポンス本文は返さない）。
async fn handler<S, L>(
    notifier: &EventNotifier<S, L>,
    event: LambdaEvent<Value>,
) -> Result<InvocationResult, Error>
where
    S: SnsOps,
    L: LogSink,
{
    let request_id = event.context.request_id.clone();

    match notifier.handle(&event.payload).await {
        Ok(result) => Ok(result),
        Err(err) => {
            error!(request_id = %request_id, error = %err, "アップロードイベント処理失敗");
            Err(err.into())
        }
    }
}
