pub mod food;
pub mod snake_body;
pub mod snake_game;
