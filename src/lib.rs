pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod pages;
pub mod routes;
pub mod shell;
pub mod state;
pub mod table;
