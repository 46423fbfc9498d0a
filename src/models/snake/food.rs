use log::warn;
use rand::{seq::SliceRandom, Rng};

use crate::config::GameConfig;

use super::snake_body::Snake;

/// A single grid-aligned piece of food.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    x: i32,
    y: i32,
}

impl Food {
    #[must_use]
    pub fn at(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Any cell on the board, occupied or not.
    #[must_use]
    pub fn random(config: &GameConfig) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            x: rng.gen_range(0..config.columns().max(1)) * config.cell_size,
            y: rng.gen_range(0..config.rows().max(1)) * config.cell_size,
        }
    }

    /// A random cell the snake does not cover. Falls back to [`Food::random`] on a full board.
    #[must_use]
    pub fn random_free(config: &GameConfig, snake: &Snake) -> Self {
        let mut avaliable = Vec::new();
        for col in 0..config.columns() {
            for row in 0..config.rows() {
                let cell = (col * config.cell_size, row * config.cell_size);
                if !snake.occupies(cell) {
                    avaliable.push(cell);
                }
            }
        }
        if let Some(&(x, y)) = avaliable.choose(&mut rand::thread_rng()) {
            Self { x, y }
        } else {
            warn!("No where left to place food");
            Self::random(config)
        }
    }

    #[must_use]
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_food_is_grid_aligned() {
        let config = GameConfig::default();
        for _ in 0..200 {
            let (x, y) = Food::random(&config).position();
            assert!(config.contains((x, y)));
            assert_eq!(x % config.cell_size, 0);
            assert_eq!(y % config.cell_size, 0);
        }
    }

    #[test]
    fn test_random_free_avoids_snake() {
        let config = GameConfig {
            width: 60,
            height: 20,
            ..GameConfig::default()
        };
        let snake = Snake::from_cells([(0, 0), (20, 0)]);
        for _ in 0..50 {
            assert_eq!(Food::random_free(&config, &snake).position(), (40, 0));
        }
    }

    #[test]
    fn test_random_free_on_full_board_still_places_food() {
        let config = GameConfig {
            width: 40,
            height: 20,
            ..GameConfig::default()
        };
        let snake = Snake::from_cells([(0, 0), (20, 0)]);
        assert!(config.contains(Food::random_free(&config, &snake).position()));
    }
}
