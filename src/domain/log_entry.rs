/// 構造化ログエントリ
///
/// アップロードレコード1件を射影したログ行。CloudWatchに1行のJSONとして出力され、
/// 同じ内容がSNS通知の本文にもなる。
use serde::{Deserialize, Serialize};

use super::upload_record::UploadRecord;

/// オブジェクト作成イベントを示す固定タグ
pub const S3_OBJECT_CREATED: &str = "S3ObjectCreated";

/// 1レコード分のログエントリ
///
/// シリアライズ時のフィールド順は`event`, `bucket`, `object_key`, `timestamp`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub event: String,
    pub bucket: String,
    pub object_key: String,
    pub timestamp: String,
}

impl LogEntry {
    /// レコードから固定タグ付きのログエントリを作成
    pub fn from_record(record: &UploadRecord) -> Self {
        Self {
            event: S3_OBJECT_CREATED.to_string(),
            bucket: record.bucket_name().to_string(),
            object_key: record.object_key().to_string(),
            timestamp: record.event_time().to_string(),
        }
    }

    /// 1行のJSON文字列にシリアライズ
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
