pub mod gesture;
pub mod snake;
