// src/services/mod.rs
//
// Services Module - session flows over the repositories

pub mod account_service;
pub mod login_service;
pub mod username;


pub use account_service::{AccountService, CreateAccountRequest};
pub use login_service::LoginService;
pub use username::generate_username;
