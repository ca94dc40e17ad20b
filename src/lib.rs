pub mod api_football;
pub mod config;
pub mod detail;
pub mod favorites;
pub mod favorites_db;
pub mod formation;
pub mod http_client;
pub mod mock;
pub mod model;
pub mod session;
pub mod source;
pub mod standings;
