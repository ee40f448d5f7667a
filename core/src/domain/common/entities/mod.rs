pub mod app_errors;
pub mod notice;

pub use notice::{Notice, NoticeLevel};
