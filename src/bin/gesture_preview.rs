//! Runs the gesture detector on its own and logs every detected direction.

use gesture_snake::{
    app::{key_presses, Message},
    config::DetectorConfig,
    view::View,
    view_models::gesture::gesture_view_model::GestureViewModel,
    views::camera::camera_screen::{CameraMessage, CameraScreen},
};
use iced::{Element, Subscription, Task};
use log::{debug, error};

struct Preview {
    camera: CameraScreen,
}

impl Preview {
    fn new() -> (Self, Task<Message>) {
        let view_model = GestureViewModel::new(DetectorConfig::default());
        (
            Self {
                camera: CameraScreen::new(view_model, true),
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let next = match message {
            Message::KeyPressed(_, key) => {
                self.camera.update(Message::Camera(CameraMessage::Key(key)))
            }
            Message::Camera(CameraMessage::Stopped) | Message::Exit => return iced::exit(),
            Message::Camera(_) => self.camera.update(message),
            other => {
                debug!("Preview ignoring {:?}", other);
                None
            }
        };
        match next {
            Some(m) => self.update(m),
            None => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.camera.view()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch(vec![key_presses(), self.camera.subscription()])
    }
}

fn main() {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "gesture_snake=info");
    }
    env_logger::init();
    if let Err(e) = iced::application("Gesture Control", Preview::update, Preview::view)
        .subscription(Preview::subscription)
        .window_size(iced::Size::new(320.0, 270.0))
        .run_with(Preview::new)
    {
        error!("Preview exited with an error: {e}");
    }
}
