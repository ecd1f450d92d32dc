pub mod role_service;
pub mod word_service;
