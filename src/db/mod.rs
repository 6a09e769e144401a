pub mod db_service;
pub mod user;
pub mod user_token;
