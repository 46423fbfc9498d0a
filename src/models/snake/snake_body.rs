//! Module for containing the snake's body.
use std::collections::VecDeque;

use log::debug;

use crate::{config::GameConfig, models::direction::Direction};

/// Ordered, head-first list of grid-aligned cells occupied by the snake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    squares_taken: VecDeque<(i32, i32)>,
    pending_growth: usize,
}

impl Snake {
    /// Lays out `body_parts` segments in a horizontal line ending at `(100, 100)`.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let parts = i32::try_from(config.body_parts.max(1)).unwrap_or(i32::MAX);
        Self::from_cells((0..parts).map(|i| (100 - i * config.cell_size, 100)))
    }

    /// Builds a snake from explicit cells, head first.
    #[must_use]
    pub fn from_cells(cells: impl IntoIterator<Item = (i32, i32)>) -> Self {
        Self {
            squares_taken: cells.into_iter().collect(),
            pending_growth: 0,
        }
    }

    /// Inserts a new head one cell away and drops the tail unless growth is pending.
    pub fn move_towards(&mut self, direction: Direction, cell_size: i32) {
        let Some((x, y)) = self.get_head() else {
            debug!("Tried to move an empty snake");
            return;
        };
        let (dx, dy) = direction.value();
        self.squares_taken
            .push_front((x + dx * cell_size, y + dy * cell_size));
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.squares_taken.pop_back();
        }
    }

    /// Keeps the tail on the next move, extending the snake by one cell.
    pub fn grow(&mut self) {
        self.pending_growth += 1;
    }

    #[must_use]
    pub fn get_head(&self) -> Option<(i32, i32)> {
        self.squares_taken.front().copied()
    }

    /// True if the head shares a cell with any other segment.
    #[must_use]
    pub fn hits_itself(&self) -> bool {
        match self.get_head() {
            Some(head) => self.squares_taken.iter().skip(1).any(|&cell| cell == head),
            None => false,
        }
    }

    #[must_use]
    pub fn occupies(&self, cell: (i32, i32)) -> bool {
        self.squares_taken.contains(&cell)
    }

    #[must_use]
    pub fn coordinates(&self) -> &VecDeque<(i32, i32)> {
        &self.squares_taken
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.squares_taken.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares_taken.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_layout() {
        let snake = Snake::new(&GameConfig::default());
        assert_eq!(
            snake.coordinates().iter().copied().collect::<Vec<_>>(),
            vec![(100, 100), (80, 100)]
        );
    }

    #[test]
    fn test_move_right_shifts_by_one_cell() {
        let mut snake = Snake::new(&GameConfig::default());
        snake.move_towards(Direction::Right, 20);
        assert_eq!(
            snake.coordinates().iter().copied().collect::<Vec<_>>(),
            vec![(120, 100), (100, 100)]
        );
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_grow_keeps_tail_once() {
        let mut snake = Snake::new(&GameConfig::default());
        snake.grow();
        snake.move_towards(Direction::Down, 20);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.coordinates().back(), Some(&(80, 100)));
        snake.move_towards(Direction::Down, 20);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.get_head(), Some((100, 140)));
    }

    #[test]
    fn test_hits_itself() {
        let snake = Snake::from_cells([(0, 0), (20, 0), (20, 20), (0, 20), (0, 0)]);
        assert!(snake.hits_itself());
        let snake = Snake::from_cells([(0, 0), (20, 0), (20, 20)]);
        assert!(!snake.hits_itself());
    }
}
