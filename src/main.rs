use gesture_snake::app::State;
use log::{debug, error};

fn main() {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "gesture_snake=debug");
    }
    env_logger::init();
    debug!("Debug on");
    if let Err(e) = iced::daemon(State::title, State::update, State::view)
        .subscription(State::subscription)
        .run_with(State::new)
    {
        error!("Game exited with an error: {e}");
    }
}
