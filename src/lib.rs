pub mod autopilot;
pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
