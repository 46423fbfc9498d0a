pub mod camera;
pub mod snake;
