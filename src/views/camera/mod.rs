pub mod camera_screen;
