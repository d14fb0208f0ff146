pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod product;
pub mod ui;
