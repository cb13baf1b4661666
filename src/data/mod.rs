pub mod db;
pub mod models;
pub mod repositories;
pub mod seed;
