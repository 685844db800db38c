pub mod assets;
pub mod config;
pub mod entities;
pub mod game;
pub mod math;
