/// ログシンク
///
/// アップロードレコードごとの構造化ログエントリを出力する。
/// 本番では`tracing`経由でCloudWatchへ1行のJSONとして書き出す。
use tracing::info;

use crate::domain::LogEntry;

/// ログエントリの出力先を表すトレイト（テスト用の抽象化）
pub trait LogSink: Send + Sync {
    /// ログエントリを出力する
    ///
    /// # 引数
    /// * `entry` - ログエントリ
    /// * `line` - `entry`をシリアライズした1行のJSON
    fn emit(&self, entry: &LogEntry, line: &str);
}

/// `tracing`のINFOイベントとして出力するログシンク
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn emit(&self, entry: &LogEntry, line: &str) {
        info!(
            target: "upload_event",
            event = %entry.event,
            bucket = %entry.bucket,
            object_key = %entry.object_key,
            timestamp = %entry.timestamp,
            "{}",
            line
        );
    }
}
