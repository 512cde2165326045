// アプリケーション層モジュール
pub mod event_notifier;

// 再エクスポート
pub use event_notifier::{EventNotifier, EventNotifierError};
