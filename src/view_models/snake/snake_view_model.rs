use iced::keyboard::{key::Named, Key};
use log::{debug, warn};

use crate::{
    app::Message,
    config::GameConfig,
    models::{
        direction::Direction,
        snake::snake_game::{SnakeGame, StepOutcome},
    },
    view_model::ViewModel,
    views::snake::{snake_game_screen::SnakeGameMessage, snake_mediator::SnakeMessage},
};

/// What occupies a cell when drawing the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Food,
    Snake,
}

/// Drives one round: applies input and advances the board on each tick.
#[derive(Debug)]
pub struct SnakeViewModel {
    game: SnakeGame,
}

impl SnakeViewModel {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        debug!("New SnakeViewModel config: {:#?}", config);
        Self {
            game: SnakeGame::new(config),
        }
    }

    #[must_use]
    pub fn from_game(game: SnakeGame) -> Self {
        Self { game }
    }

    /// Arrow keys steer; everything else is ignored.
    #[must_use]
    pub fn key_to_direction(key: &Key) -> Option<Direction> {
        match key {
            Key::Named(Named::ArrowUp) => Some(Direction::Up),
            Key::Named(Named::ArrowDown) => Some(Direction::Down),
            Key::Named(Named::ArrowLeft) => Some(Direction::Left),
            Key::Named(Named::ArrowRight) => Some(Direction::Right),
            _ => None,
        }
    }

    /// Applies an optional gesture, moves the snake and reports a finished round.
    fn tick(&mut self, gesture: Option<Direction>) -> Option<Message> {
        if let Some(direction) = gesture {
            self.game.change_direction(direction);
        }
        match self.game.step() {
            StepOutcome::Collided => Some(Message::Snake(SnakeMessage::GameOverScreenTransition(
                self.game.get_score(),
            ))),
            StepOutcome::Ate | StepOutcome::Moved => None,
        }
    }

    /// Board as rows of cells, top row first.
    #[must_use]
    pub fn get_backing_grid(&self) -> Vec<Vec<Cell>> {
        let config = self.game.get_config();
        let columns = usize::try_from(config.columns()).unwrap_or(0);
        let rows = usize::try_from(config.rows()).unwrap_or(0);
        let mut grid = vec![vec![Cell::Empty; columns]; rows];
        let mut mark = |(x, y): (i32, i32), cell: Cell| {
            let col = usize::try_from(x / config.cell_size).ok();
            let row = usize::try_from(y / config.cell_size).ok();
            if let (Some(col), Some(row)) = (col, row) {
                if let Some(slot) = grid.get_mut(row).and_then(|r| r.get_mut(col)) {
                    *slot = cell;
                }
            }
        };
        mark(self.game.get_food().position(), Cell::Food);
        for &segment in self.game.get_snake().coordinates() {
            mark(segment, Cell::Snake);
        }
        grid
    }

    #[must_use]
    pub fn get_game(&self) -> &SnakeGame {
        &self.game
    }

    #[must_use]
    pub fn get_time_between_frames(&self) -> u64 {
        self.game.get_config().millis_between_ticks()
    }
}

impl ViewModel for SnakeViewModel {
    fn update(&mut self, message: Message) -> Option<Message> {
        if let Message::Snake(snake_message) = message {
            match snake_message {
                SnakeMessage::Key(key) => {
                    if let Some(direction) = Self::key_to_direction(&key) {
                        self.game.change_direction(direction);
                    }
                    None
                }
                SnakeMessage::SnakeGameMessage(SnakeGameMessage::Tick(gesture)) => {
                    self.tick(gesture)
                }
                SnakeMessage::SnakeGameMessage(SnakeGameMessage::Timer(_)) => self.tick(None),
                other => {
                    warn!("Unexpected message sent to SnakeViewModel: {:#?}", other);
                    None
                }
            }
        } else {
            warn!("Non-snake message sent to SnakeViewModel: {:#?}", message);
            None
        }
    }
}
