pub mod notify;
pub mod views;
