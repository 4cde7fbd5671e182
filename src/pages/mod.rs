pub mod auth;
pub mod contact;
pub mod detail;
pub mod home;
pub mod listing;
pub mod terms;
