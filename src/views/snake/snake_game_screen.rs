use std::time::{Duration, Instant};

use iced::{
    time,
    widget::{container, text, Column, Row},
    Border, Color, Element, Length, Subscription,
};

use crate::{
    app::Message,
    models::direction::Direction,
    view::View,
    view_model::ViewModel,
    view_models::snake::snake_view_model::{Cell, SnakeViewModel},
};

use super::snake_mediator::SnakeMessage;

pub const SNAKE_COLOR: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};
/// Pinkish red.
pub const FOOD_COLOR: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.588,
    a: 1.0,
};
pub const BG_COLOR: Color = Color {
    r: 0.039,
    g: 0.039,
    b: 0.039,
    a: 1.0,
};
pub const GRID_COLOR: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

#[derive(Clone, Debug)]
pub enum SnakeGameMessage {
    /// Raw timer firing; the app turns it into a `Tick` after polling the camera.
    Timer(Instant),
    Tick(Option<Direction>),
}

#[derive(Debug)]
pub struct SnakeGameScreen {
    view_model: SnakeViewModel,
}

impl SnakeGameScreen {
    #[must_use]
    pub fn new(view_model: SnakeViewModel) -> Self {
        Self { view_model }
    }

    #[must_use]
    pub fn get_view_model(&self) -> &SnakeViewModel {
        &self.view_model
    }
}

impl View for SnakeGameScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        self.view_model.update(message)
    }

    fn view(&self) -> Element<'_, Message> {
        let mut grid_view = Column::new();
        let cell_size = f32::from(
            u16::try_from(self.view_model.get_game().get_config().cell_size).unwrap_or(20),
        );

        let make_container = |color: Color| {
            container(text(" ").color(color)) // Empty text to preserve size
                .width(cell_size)
                .height(cell_size)
                .style(move |_: &_| container::Style {
                    border: Border {
                        color: GRID_COLOR,
                        width: 0.5,
                        ..Default::default()
                    },
                    background: Some(color.into()),
                    ..container::Style::default()
                })
        };

        for grid_row in self.view_model.get_backing_grid() {
            let mut row = Row::new();
            for entry in grid_row {
                let rectangle = match entry {
                    Cell::Empty => make_container(BG_COLOR),
                    Cell::Food => make_container(FOOD_COLOR),
                    Cell::Snake => make_container(SNAKE_COLOR),
                };
                row = row.push(rectangle);
            }
            grid_view = grid_view.push(row);
        }

        container(grid_view)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_: &_| container::Style {
                background: Some(BG_COLOR.into()),
                ..container::Style::default()
            })
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        time::every(Duration::from_millis(
            self.view_model.get_time_between_frames(),
        ))
        .map(SnakeGameMessage::Timer)
        .map(SnakeMessage::SnakeGameMessage)
        .map(Message::Snake)
    }
}
