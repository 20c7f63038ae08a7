mod http;
pub mod mock;
mod traits;

pub use http::HttpFileService;
pub use mock::MockFileService;
pub use traits::{FileService, ServiceError};
