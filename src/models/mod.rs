pub mod direction;
pub mod gesture;
pub mod snake;
