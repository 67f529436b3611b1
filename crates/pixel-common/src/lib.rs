pub mod errors;
pub mod id;
pub mod types;

pub use errors::{AssetError, ConfigError, PixelError};
pub use id::{new_correlation_id, RequestId};
pub use types::{Point, Rect, Size};

pub type Result<T> = std::result::Result<T, PixelError>;
