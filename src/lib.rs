pub mod bootstrap;
pub mod db;
pub mod models;
pub mod schema;
