pub mod outcome;
pub mod platform;
pub mod request;
