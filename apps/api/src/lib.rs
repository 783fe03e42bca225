pub mod config;
pub mod db;
pub mod errors;
pub mod profile;
pub mod routes;
pub mod state;
