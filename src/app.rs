use std::collections::BTreeMap;

use iced::{
    event,
    keyboard::{self, Key},
    widget::horizontal_space,
    window, Element, Event, Size, Subscription, Task,
};
use log::{debug, info, warn};

use crate::{
    config::{DetectorConfig, GameConfig},
    view::View,
    view_models::gesture::gesture_view_model::GestureViewModel,
    views::{
        camera::camera_screen::{CameraMessage, CameraScreen},
        snake::{
            snake_game_screen::SnakeGameMessage,
            snake_mediator::{SnakeMediator, SnakeMessage},
        },
    },
};

/// Which of the two windows an id belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowKind {
    Game,
    Camera,
}

#[derive(Clone, Debug)]
pub enum Message {
    Snake(SnakeMessage),
    Camera(CameraMessage),
    KeyPressed(window::Id, Key),
    WindowOpened(window::Id),
    WindowClosed(window::Id),
    Exit,
}

/// Forwards key presses together with the window they happened in.
#[must_use]
pub fn key_presses() -> Subscription<Message> {
    event::listen_with(|event, _status, id| match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            Some(Message::KeyPressed(id, key))
        }
        _ => None,
    })
}

/// Game window plus the optional camera window, driven from one update loop.
pub struct State {
    windows: BTreeMap<window::Id, WindowKind>,
    snake: SnakeMediator,
    camera: CameraScreen,
}

impl State {
    /// Opens the game window, and the camera window when a camera is available.
    #[must_use]
    pub fn new() -> (Self, Task<Message>) {
        let game_config = GameConfig::default();
        let game_size = Size::new(
            f32::from(u16::try_from(game_config.width).unwrap_or(600)),
            f32::from(u16::try_from(game_config.height).unwrap_or(400)),
        );
        let camera = CameraScreen::new(GestureViewModel::new(DetectorConfig::default()), false);

        let mut windows = BTreeMap::new();
        let (game_id, open_game) = window::open(window::Settings {
            size: game_size,
            resizable: false,
            ..window::Settings::default()
        });
        windows.insert(game_id, WindowKind::Game);
        let mut tasks = vec![open_game.map(Message::WindowOpened)];

        if camera.is_active() {
            let (camera_id, open_camera) = window::open(window::Settings {
                size: Size::new(320.0, 270.0),
                ..window::Settings::default()
            });
            windows.insert(camera_id, WindowKind::Camera);
            tasks.push(open_camera.map(Message::WindowOpened));
        } else {
            info!("No camera, playing with the keyboard only");
        }

        (
            Self {
                windows,
                snake: SnakeMediator::new(game_config),
                camera,
            },
            Task::batch(tasks),
        )
    }

    #[must_use]
    pub fn title(&self, id: window::Id) -> String {
        match self.windows.get(&id) {
            Some(WindowKind::Camera) => "Gesture Control".to_string(),
            _ => "Snake".to_string(),
        }
    }

    fn window_of(&self, kind: WindowKind) -> Option<window::Id> {
        self.windows
            .iter()
            .find_map(|(id, k)| (*k == kind).then_some(*id))
    }

    /// Hands a message to the screen that owns it and follows up on its answer.
    fn dispatch(&mut self, message: Message) -> Task<Message> {
        let next = match message {
            Message::Snake(_) => self.snake.update(message),
            Message::Camera(_) => self.camera.update(message),
            other => {
                warn!("No screen handles {:#?}", other);
                None
            }
        };
        match next {
            Some(m) => self.update(m),
            None => Task::none(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Snake(SnakeMessage::SnakeGameMessage(SnakeGameMessage::Timer(now))) => {
                let gesture = self.camera.poll_direction(now);
                self.dispatch(Message::Snake(SnakeMessage::SnakeGameMessage(
                    SnakeGameMessage::Tick(gesture),
                )))
            }
            Message::Camera(CameraMessage::Stopped) => {
                debug!("Camera stopped by user");
                match self.window_of(WindowKind::Camera) {
                    Some(id) => {
                        self.windows.remove(&id);
                        window::close(id)
                    }
                    None => Task::none(),
                }
            }
            Message::Snake(_) | Message::Camera(_) => self.dispatch(message),
            Message::KeyPressed(id, key) => match self.windows.get(&id).copied() {
                Some(WindowKind::Game) => self.dispatch(Message::Snake(SnakeMessage::Key(key))),
                Some(WindowKind::Camera) => {
                    self.dispatch(Message::Camera(CameraMessage::Key(key)))
                }
                None => Task::none(),
            },
            Message::WindowOpened(id) => {
                debug!("Window {:?} opened", id);
                Task::none()
            }
            Message::WindowClosed(id) => match self.windows.remove(&id) {
                Some(WindowKind::Game) => {
                    info!("Game window closed");
                    self.camera.stop();
                    iced::exit()
                }
                Some(WindowKind::Camera) => {
                    info!("Camera window closed, continuing with the keyboard");
                    self.camera.stop();
                    Task::none()
                }
                None => Task::none(),
            },
            Message::Exit => {
                info!("Quitting");
                self.camera.stop();
                iced::exit()
            }
        }
    }

    #[must_use]
    pub fn view(&self, id: window::Id) -> Element<'_, Message> {
        match self.windows.get(&id) {
            Some(WindowKind::Game) => self.snake.view(),
            Some(WindowKind::Camera) => self.camera.view(),
            None => horizontal_space().into(),
        }
    }

    #[must_use]
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch(vec![
            window::close_events().map(Message::WindowClosed),
            key_presses(),
            self.snake.subscription(),
        ])
    }
}
