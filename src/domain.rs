// Domain layer modules
pub mod invocation_result;
pub mod log_entry;
pub mod notification_message;
pub mod upload_event;
pub mod upload_record;

// Re-exports
pub use invocation_result::{InvocationResult, InvocationSummary, SUCCESS_MESSAGE};
pub use log_entry::{LogEntry, S3_OBJECT_CREATED};
pub use notification_message::{DEFAULT_NOTIFICATION_SUBJECT, NotificationMessage};
pub use upload_event::{MalformedEventError, UploadEvent};
pub use upload_record::{MalformedRecordError, UploadRecord};
