// src/lib.rs

#[macro_use]
pub mod macros;

#[macro_use]
pub mod log;

pub mod cli;
pub mod core;
pub mod params;
pub mod specs;

pub mod csv;
pub mod data;
pub mod file;
pub mod gui;
pub mod pricetag;
pub mod runner;
