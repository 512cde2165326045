/// アップロードレコード
///
/// S3アップロード通知イベントの1レコードから、バケット名・オブジェクトキー・
/// イベント時刻を抽出する。イベント時刻はパースせず受け取った文字列をそのまま保持する。
use serde_json::Value;
use thiserror::Error;

/// 必須フィールドのJSON Pointerとエラー表示用のパス
const BUCKET_NAME: (&str, &str) = ("/s3/bucket/name", "s3.bucket.name");
const OBJECT_KEY: (&str, &str) = ("/s3/object/key", "s3.object.key");
const EVENT_TIME: (&str, &str) = ("/eventTime", "eventTime");

/// 不正なレコードのエラー型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRecordError {
    /// レコードがJSONオブジェクトではない
    #[error("レコード[{index}]がJSONオブジェクトではありません")]
    NotAnObject { index: usize },
    /// 必須フィールドが欠落している（または文字列ではない）
    #[error("レコード[{index}]に必須フィールドがありません: {field}")]
    MissingField { index: usize, field: &'static str },
}

/// 1件のオブジェクトアップロード通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRecord {
    bucket_name: String,
    object_key: String,
    event_time: String,
}

impl UploadRecord {
    /// 明示的な値でUploadRecordを作成
    pub fn new(
        bucket_name: impl Into<String>,
        object_key: impl Into<String>,
        event_time: impl Into<String>,
    ) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            object_key: object_key.into(),
            event_time: event_time.into(),
        }
    }

    /// 生のレコードJSONから必須フィールドを抽出する
    ///
    /// # 引数
    /// * `index` - バッチ内でのレコード位置（エラー報告用）
    /// * `record` - `Records`配列の1要素
    ///
    /// # 戻り値
    /// * `Ok(UploadRecord)` - 抽出結果
    /// * `Err(MalformedRecordError)` - オブジェクトでない、または必須フィールド欠落
    pub fn from_value(index: usize, record: &Value) -> Result<Self, MalformedRecordError> {
        if !record.is_object() {
            return Err(MalformedRecordError::NotAnObject { index });
        }

        let bucket_name = require_str(index, record, BUCKET_NAME)?;
        let object_key = require_str(index, record, OBJECT_KEY)?;
        let event_time = require_str(index, record, EVENT_TIME)?;

        Ok(Self::new(bucket_name, object_key, event_time))
    }

    /// バケット名を取得
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    /// オブジェクトキーを取得
    pub fn object_key(&self) -> &str {
        &self.object_key
    }

    /// イベント時刻（ISO-8601文字列、未検証）を取得
    pub fn event_time(&self) -> &str {
        &self.event_time
    }
}

fn require_str<'a>(
    index: usize,
    record: &'a Value,
    (pointer, field): (&str, &'static str),
) -> Result<&'a str, MalformedRecordError> {
    record
        .pointer(pointer)
        .and_then(|v| v.as_str())
        .ok_or(MalformedRecordError::MissingField { index, field })
}
