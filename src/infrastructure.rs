// Infrastructure layer modules
pub mod log_sink;
pub mod logging;
pub mod notifier_config;
pub mod sns_ops;

// Re-exports
pub use log_sink::{LogSink, TracingLogSink};
pub use logging::init_logging;
pub use notifier_config::{NotifierConfig, NotifierConfigError};
pub use sns_ops::{AwsSnsOps, PublishResult, SnsOps, SnsOpsError};
