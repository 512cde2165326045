/// アップロード通知イベント
///
/// Lambdaに渡されるS3イベントペイロードの`Records`配列を扱う。
/// `Records`が存在しない、またはnullの場合は空のバッチとして扱う。
use serde_json::Value;
use thiserror::Error;

use super::upload_record::{MalformedRecordError, UploadRecord};

/// 不正なイベントのエラー型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedEventError {
    /// イベントペイロードがJSONオブジェクトではない
    #[error("イベントがJSONオブジェクトではありません")]
    NotAnObject,
    /// `Records`が配列ではない
    #[error("Recordsが配列ではありません")]
    RecordsNotAnArray,
}

/// 0件以上のアップロードレコードを保持するバッチ
#[derive(Debug, Clone, Copy)]
pub struct UploadEvent<'a> {
    records: &'a [Value],
}

impl<'a> UploadEvent<'a> {
    /// イベントペイロードからバッチを取り出す
    pub fn from_value(event: &'a Value) -> Result<Self, MalformedEventError> {
        let object = event.as_object().ok_or(MalformedEventError::NotAnObject)?;

        let records = match object.get("Records") {
            None | Some(Value::Null) => &[][..],
            Some(Value::Array(records)) => records.as_slice(),
            Some(_) => return Err(MalformedEventError::RecordsNotAnArray),
        };

        Ok(Self { records })
    }

    /// バッチ内のレコード数（抽出の成否に関係なく`Records`の要素数）
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 入力順にレコードを抽出するイテレーター
    ///
    /// 抽出は遅延評価されるため、呼び出し側は不正なレコードに到達するまでの
    /// レコードを処理できる。
    pub fn records(&self) -> impl Iterator<Item = Result<UploadRecord, MalformedRecordError>> + 'a {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| UploadRecord::from_value(index, record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(bucket: &str, key: &str) -> Value {
        json!({
            "eventTime": "2024-01-01T00:00:00Z",
            "s3": { "bucket": { "name": bucket }, "object": { "key": key } }
        })
    }

    #[test]
    fn test_missing_records_is_empty() {
        let event = json!({});
        let batch = UploadEvent::from_value(&event).unwrap();

        assert!(batch.is_empty());
        assert_eq!(batch.records().count(), 0);
    }

    #[test]
    fn test_null_records_is_empty() {
        let event = json!({ "Records": null });
        let batch = UploadEvent::from_value(&event).unwrap();

        assert_eq!(batch.len(), 0);
    }

    #[test]
    fn test_empty_records() {
        let event = json!({ "Records": [] });
        let batch = UploadEvent::from_value(&event).unwrap();

        assert!(batch.is_empty());
    }

    #[test]
    fn test_records_preserve_order() {
        let event = json!({
            "Records": [record("b1", "k1"), record("b2", "k2"), record("b3", "k3")]
        });
        let batch = UploadEvent::from_value(&event).unwrap();

        let keys: Vec<String> = batch
            .records()
            .map(|r| r.unwrap().object_key().to_string())
            .collect();
        assert_eq!(keys, vec!["k1", "k2", "k3"]);
    }

    #[test]
    fn test_len_counts_malformed_records() {
        let event = json!({ "Records": [record("b1", "k1"), {}, record("b3", "k3")] });
        let batch = UploadEvent::from_value(&event).unwrap();

        assert_eq!(batch.len(), 3);

        let results: Vec<_> = batch.records().collect();
        assert!(results[0].is_ok());
        assert_eq!(
            results[1],
            Err(MalformedRecordError::MissingField {
                index: 1,
                field: "s3.bucket.name"
            })
        );
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_records_not_an_array() {
        let event = json!({ "Records": { "s3": {} } });

        let err = UploadEvent::from_value(&event).unwrap_err();
        assert_eq!(err, MalformedEventError::RecordsNotAnArray);
    }

    #[test]
    fn test_event_not_an_object() {
        let event = json!(["not", "an", "event"]);

        let err = UploadEvent::from_value(&event).unwrap_err();
        assert_eq!(err, MalformedEventError::NotAnObject);
    }
}
