pub mod analysis;
pub mod components;
pub mod config;
pub mod connections;
pub mod editor;
pub mod geometry;
pub mod history;
pub mod types;
