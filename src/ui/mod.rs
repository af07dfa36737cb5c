pub mod render;
pub mod shell;
pub mod theme;
pub mod views;
