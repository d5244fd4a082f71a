pub mod config;
pub mod models;
pub mod page;
pub mod services;
pub mod web;
