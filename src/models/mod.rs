pub mod club;
pub mod credential;
pub mod session;
