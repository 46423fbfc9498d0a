use iced::{
    alignment,
    keyboard::Key,
    widget::{column, container, text},
    Element, Length,
};
use log::debug;

use crate::{app::Message, view::View};

use super::{
    snake_game_screen::{BG_COLOR, FOOD_COLOR, GRID_COLOR, SNAKE_COLOR},
    snake_mediator::SnakeMessage,
};

/// Shown after a crash; R restarts and Q quits.
#[derive(Debug)]
pub struct GameOverScreen {
    score: usize,
}

impl GameOverScreen {
    #[must_use]
    pub fn new(score: usize) -> Self {
        Self { score }
    }

    #[must_use]
    pub fn get_score(&self) -> usize {
        self.score
    }
}

impl View for GameOverScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        if let Message::Snake(SnakeMessage::Key(Key::Character(ref c))) = message {
            match c.as_str() {
                "r" | "R" => return Some(Message::Snake(SnakeMessage::SnakeGameScreenTransition)),
                "q" | "Q" => return Some(Message::Snake(SnakeMessage::Quit)),
                _ => (),
            }
        }
        debug!("Game over screen ignoring {:?}", message);
        None
    }

    fn view(&self) -> Element<'_, Message> {
        let content = column![
            text("GAME OVER").size(40).color(FOOD_COLOR),
            text(format!("Score: {}", self.score)).size(25).color(GRID_COLOR),
            text("Press R to Restart or Q to Quit").size(25).color(SNAKE_COLOR),
        ]
        .spacing(30)
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
