pub mod format;
pub mod requests;
