pub mod analyze;
pub mod dispatch;
pub mod import;
pub mod samples;
pub mod session;
pub mod shared;
