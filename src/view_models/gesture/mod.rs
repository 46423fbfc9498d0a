pub mod gesture_view_model;
