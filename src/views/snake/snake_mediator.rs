use iced::{Element, Subscription};
use log::debug;

use crate::{
    app::Message, config::GameConfig, view::View,
    view_models::snake::snake_view_model::SnakeViewModel,
};

use super::{
    game_over_screen::GameOverScreen,
    snake_game_screen::{SnakeGameMessage, SnakeGameScreen},
    start_screen::StartScreen,
};

#[derive(Clone, Debug)]
pub enum SnakeMessage {
    SnakeGameScreenTransition,
    GameOverScreenTransition(usize),
    Quit,
    Key(iced::keyboard::Key),
    SnakeGameMessage(SnakeGameMessage),
}

/// START -> PLAYING -> GAME OVER, with restart going back to PLAYING.
#[derive(Debug)]
pub enum SnakeScreen {
    StartScreen(StartScreen),
    SnakeGameScreen(SnakeGameScreen),
    GameOverScreen(GameOverScreen),
}

impl View for SnakeScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        match self {
            SnakeScreen::StartScreen(start_screen) => start_screen.update(message),
            SnakeScreen::SnakeGameScreen(snake_game_screen) => snake_game_screen.update(message),
            SnakeScreen::GameOverScreen(game_over_screen) => game_over_screen.update(message),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match self {
            SnakeScreen::StartScreen(start_screen) => start_screen.view(),
            SnakeScreen::SnakeGameScreen(snake_game_screen) => snake_game_screen.view(),
            SnakeScreen::GameOverScreen(game_over_screen) => game_over_screen.view(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        match self {
            SnakeScreen::StartScreen(start_screen) => start_screen.subscription(),
            SnakeScreen::SnakeGameScreen(snake_game_screen) => snake_game_screen.subscription(),
            SnakeScreen::GameOverScreen(game_over_screen) => game_over_screen.subscription(),
        }
    }
}

#[derive(Debug)]
pub struct SnakeMediator {
    snake_screen: SnakeScreen,
    config: GameConfig,
}

impl Default for SnakeMediator {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl SnakeMediator {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            snake_screen: SnakeScreen::StartScreen(StartScreen::new()),
            config,
        }
    }

    #[must_use]
    pub fn get_screen(&self) -> &SnakeScreen {
        &self.snake_screen
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(self.snake_screen, SnakeScreen::SnakeGameScreen(_))
    }
}

impl View for SnakeMediator {
    fn update(&mut self, message: Message) -> Option<Message> {
        if let Message::Snake(snake_message) = message {
            match snake_message {
                SnakeMessage::SnakeGameScreenTransition => {
                    debug!("Transitioning to snake game screen");
                    self.snake_screen = SnakeScreen::SnakeGameScreen(SnakeGameScreen::new(
                        SnakeViewModel::new(self.config.clone()),
                    ));
                    None
                }
                SnakeMessage::GameOverScreenTransition(score) => {
                    debug!("Transitioning to game over screen");
                    self.snake_screen = SnakeScreen::GameOverScreen(GameOverScreen::new(score));
                    None
                }
                SnakeMessage::Quit => {
                    debug!("Quit requested");
                    Some(Message::Exit)
                }
                _ => match self.snake_screen.update(Message::Snake(snake_message)) {
                    // screens only answer with transitions, so this recurses at most once
                    Some(m) => self.update(m),
                    None => None,
                },
            }
        } else {
            debug!(
                "Received a non-snake message in the snake mediator. Message: {:#?}",
                message
            );
            None
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.snake_screen.view()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.snake_screen.subscription()
    }
}
