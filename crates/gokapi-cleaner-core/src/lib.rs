pub mod expiry;
pub mod file;

pub use expiry::{select_expired, unix_now};
pub use file::FileRecord;
