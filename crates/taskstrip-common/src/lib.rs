pub mod errors;
pub mod intents;
pub mod types;

pub use errors::{ConfigError, GatewayError, TaskstripError};
pub use intents::{Intent, IntentQueue, IntentSender};
pub use types::{Color, Rect, SnapshotEntry, WindowHandle, WindowSnapshot};

pub type Result<T> = std::result::Result<T, TaskstripError>;
