// src/gui/mod.rs

pub mod actions;
pub mod app;

pub use app::run;
