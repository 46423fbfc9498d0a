use std::time::{Duration, Instant};

use iced::{
    alignment,
    keyboard::Key,
    time,
    widget::{column, container, text},
    Color, Element, Length, Subscription,
};

use crate::{
    app::Message, models::direction::Direction, view::View, view_model::ViewModel,
    view_models::gesture::gesture_view_model::GestureViewModel,
};

/// Caption color over the feed.
const CAPTION_COLOR: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};
/// Poll rate when the screen drives capture itself.
pub const MILLIS_BETWEEN_POLLS: u64 = 33;

#[derive(Clone, Debug)]
pub enum CameraMessage {
    Key(Key),
    Poll(Instant),
    Stopped,
}

/// Live feed with the detector overlay.
#[derive(Debug)]
pub struct CameraScreen {
    view_model: GestureViewModel,
    free_running: bool,
}

impl CameraScreen {
    /// With `free_running` the screen polls the camera on its own timer,
    /// otherwise frames are pulled by whoever calls [`CameraScreen::poll_direction`].
    #[must_use]
    pub fn new(view_model: GestureViewModel, free_running: bool) -> Self {
        Self {
            view_model,
            free_running,
        }
    }

    pub fn poll_direction(&mut self, now: Instant) -> Option<Direction> {
        self.view_model.poll_direction(now)
    }

    pub fn stop(&mut self) {
        self.view_model.stop();
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.view_model.is_active()
    }
}

impl View for CameraScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        self.view_model.update(message)
    }

    fn view(&self) -> Element<'_, Message> {
        let feed: Element<Message> = match (
            self.view_model.last_frame(),
            self.view_model.last_error(),
        ) {
            (Some(handle), _) => iced::widget::image(handle.clone()).into(),
            (None, Some(e)) => text(format!("Camera unavailable: {e}")).into(),
            (None, None) => text("Waiting for camera...").into(),
        };
        let caption = match self.view_model.last_direction() {
            Some(direction) => format!("Direction: {direction}"),
            None => "Direction: None".to_string(),
        };
        container(column![feed, text(caption).size(18).color(CAPTION_COLOR)].spacing(4))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.free_running && self.view_model.is_active() {
            time::every(Duration::from_millis(MILLIS_BETWEEN_POLLS))
                .map(CameraMessage::Poll)
                .map(Message::Camera)
        } else {
            Subscription::none()
        }
    }
}
