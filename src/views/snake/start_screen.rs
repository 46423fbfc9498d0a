use iced::{
    alignment,
    keyboard::{key::Named, Key},
    widget::{column, container, text},
    Element, Length,
};
use log::debug;

use crate::{app::Message, view::View};

use super::{
    snake_game_screen::{BG_COLOR, GRID_COLOR, SNAKE_COLOR},
    snake_mediator::SnakeMessage,
};

/// Title card waiting for SPACE.
#[derive(Debug, Default)]
pub struct StartScreen {}

impl StartScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl View for StartScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        match message {
            Message::Snake(SnakeMessage::Key(Key::Named(Named::Space))) => {
                Some(Message::Snake(SnakeMessage::SnakeGameScreenTransition))
            }
            other => {
                debug!("Start screen ignoring {:?}", other);
                None
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let content = column![
            text("SNAKE GAME").size(40).color(SNAKE_COLOR),
            text("Press SPACE to Start").size(25).color(GRID_COLOR),
        ]
        .spacing(40)
        .align_x(alignment::Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(|_: &_| container::Style {
                background: Some(BG_COLOR.into()),
                ..container::Style::default()
            })
            .into()
    }
}
