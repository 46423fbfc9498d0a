use log::{debug, info};

use crate::{config::GameConfig, models::direction::Direction};

use super::{food::Food, snake_body::Snake};

/// Result of advancing the board by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    Ate,
    Collided,
}

/// Model of one round of the Snake Game.
#[derive(Clone, Debug)]
pub struct SnakeGame {
    config: GameConfig,
    snake: Snake,
    food: Food,
    direction: Direction,
    score: usize,
    game_over: bool,
}

impl SnakeGame {
    /// Starts a round heading right with food on a free cell.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let snake = Snake::new(&config);
        let food = Food::random_free(&config, &snake);
        Self {
            config,
            snake,
            food,
            direction: Direction::Right,
            score: 0,
            game_over: false,
        }
    }

    /// Replaces the food, mostly useful for scripted rounds.
    #[must_use]
    pub fn with_food(mut self, food: Food) -> Self {
        self.food = food;
        self
    }

    /// Turns the snake unless `requested` would reverse it onto itself.
    /// Returns whether the direction was accepted.
    pub fn change_direction(&mut self, requested: Direction) -> bool {
        if requested == self.direction.get_opposite() {
            debug!("Rejected reversing from {} to {}", self.direction, requested);
            return false;
        }
        self.direction = requested;
        true
    }

    /// Moves the snake one cell, then resolves collisions and food.
    pub fn step(&mut self) -> StepOutcome {
        if self.game_over {
            debug!("Tried to step a finished round");
            return StepOutcome::Collided;
        }
        self.snake
            .move_towards(self.direction, self.config.cell_size);
        if self.check_collision() {
            info!("Game over with score {}", self.score);
            self.game_over = true;
            return StepOutcome::Collided;
        }
        if self.snake.get_head() == Some(self.food.position()) {
            self.snake.grow();
            self.score += 1;
            self.food = Food::random_free(&self.config, &self.snake);
            debug!("Food eaten, next at {:?}", self.food.position());
            return StepOutcome::Ate;
        }
        StepOutcome::Moved
    }

    /// True if the head left the board or landed on the body.
    #[must_use]
    pub fn check_collision(&self) -> bool {
        match self.snake.get_head() {
            Some(head) => !self.config.contains(head) || self.snake.hits_itself(),
            None => true,
        }
    }

    #[must_use]
    pub fn get_snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn get_food(&self) -> Food {
        self.food
    }

    #[must_use]
    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn get_score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn get_config(&self) -> &GameConfig {
        &self.config
    }
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(game: &SnakeGame) -> Vec<(i32, i32)> {
        game.get_snake().coordinates().iter().copied().collect()
    }

    fn far_food() -> Food {
        Food::at(580, 380)
    }

    #[test]
    fn test_single_move_right() {
        let mut game = SnakeGame::default().with_food(far_food());
        let before = cells(&game);
        assert_eq!(game.step(), StepOutcome::Moved);
        let after = cells(&game);
        assert_eq!(after.len(), before.len());
        assert_eq!(after[0], (before[0].0 + 20, before[0].1));
        assert_eq!(after[1], before[0]);
    }

    #[test]
    fn test_opposite_direction_rejected() {
        let mut game = SnakeGame::default();
        for d in Direction::VARIANTS {
            let current = game.get_direction();
            let accepted = game.change_direction(*d);
            assert_eq!(accepted, *d != current.get_opposite());
            if accepted {
                assert_eq!(game.get_direction(), *d);
            } else {
                assert_eq!(game.get_direction(), current);
            }
        }
    }

    #[test]
    fn test_reverse_rejected_from_every_heading() {
        for d in Direction::VARIANTS {
            let mut game = SnakeGame::default();
            game.direction = *d;
            assert!(!game.change_direction(d.get_opposite()));
            assert_eq!(game.get_direction(), *d);
            assert!(game.change_direction(*d));
        }
    }

    #[test]
    fn test_eating_grows_by_one() {
        let mut game = SnakeGame::default().with_food(Food::at(120, 100));
        assert_eq!(game.step(), StepOutcome::Ate);
        assert_eq!(game.get_score(), 1);
        assert!(!game.get_snake().occupies(game.get_food().position()));
        let len = game.get_snake().len();
        game.food = far_food();
        assert_eq!(game.step(), StepOutcome::Moved);
        assert_eq!(game.get_snake().len(), len + 1);
        assert_eq!(game.step(), StepOutcome::Moved);
        assert_eq!(game.get_snake().len(), len + 1);
    }

    #[test]
    fn test_shift_without_food() {
        let mut game = SnakeGame::default().with_food(far_food());
        game.change_direction(Direction::Down);
        for _ in 0..5 {
            let before = cells(&game);
            game.step();
            let after = cells(&game);
            assert_eq!(&after[1..], &before[..before.len() - 1]);
        }
    }

    #[test]
    fn test_wall_collision_ends_round() {
        for (d, start) in [
            (Direction::Right, (580, 100)),
            (Direction::Left, (0, 100)),
            (Direction::Up, (100, 0)),
            (Direction::Down, (100, 380)),
        ] {
            let mut game = SnakeGame::default().with_food(far_food());
            game.snake = Snake::from_cells([start]);
            game.direction = d;
            assert_eq!(game.step(), StepOutcome::Collided);
            assert!(game.is_over());
            assert_eq!(game.step(), StepOutcome::Collided);
        }
    }

    #[test]
    fn test_self_collision_ends_round() {
        let mut game = SnakeGame::default().with_food(far_food());
        game.snake =
            Snake::from_cells([(100, 100), (120, 100), (120, 120), (100, 120), (80, 120)]);
        game.direction = Direction::Left;
        assert!(game.change_direction(Direction::Down));
        assert_eq!(game.step(), StepOutcome::Collided);
        assert!(game.is_over());
    }

    #[test]
    fn test_following_own_tail_is_safe() {
        let mut game = SnakeGame::default().with_food(far_food());
        game.snake = Snake::from_cells([(100, 100), (120, 100), (120, 120), (100, 120)]);
        game.direction = Direction::Left;
        game.change_direction(Direction::Down);
        assert_eq!(game.step(), StepOutcome::Moved);
        assert!(!game.is_over());
    }
}
