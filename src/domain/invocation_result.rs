/// Lambda呼び出し結果
///
/// `{"statusCode": 200, "body": "<JSON文字列>"}`の形で返却する。
/// `body`は要約オブジェクトをJSON文字列にエンコードしたもの（二重エンコード）で、
/// 既存の利用側との互換性のため維持している。
use serde::{Deserialize, Serialize};

/// 成功時の要約メッセージ
pub const SUCCESS_MESSAGE: &str = "Processed successfully";

/// `body`にエンコードされる要約
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationSummary {
    pub message: String,
    pub records: usize,
}

/// ハンドラーの戻り値
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResult {
    pub status_code: u16,
    pub body: String,
}

impl InvocationResult {
    /// 処理件数から成功結果を作成
    pub fn processed(records: usize) -> Result<Self, serde_json::Error> {
        let summary = InvocationSummary {
            message: SUCCESS_MESSAGE.to_string(),
            records,
        };

        Ok(Self {
            status_code: 200,
            body: serde_json::to_string(&summary)?,
        })
    }

    /// `body`を要約としてデコード
    pub fn summary(&self) -> Result<InvocationSummary, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
