pub mod developer;
pub mod dispatch;
pub mod log;
pub mod report;
pub mod shared;
