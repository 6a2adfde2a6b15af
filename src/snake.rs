use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width())
            && self.y < i32::from(bounds.height())
    }

    /// Returns the neighbouring position one step towards `direction`.
    ///
    /// The result may lie outside the grid; bounds are the caller's concern.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Ordered snake body, stored tail first and head last.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_back(start);

        Self { body }
    }

    /// Creates a snake from explicit body segments (first is tail, last is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        assert!(
            !segments.is_empty(),
            "snake body must contain at least one segment"
        );

        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Pushes `new_head` and drops the tail unless `grow` is set.
    pub(crate) fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_back(new_head);
        if !grow {
            let _ = self.body.pop_front();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false for a constructed snake; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from tail to head.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// Copies the body into a vector, tail first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Position> {
        self.body.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn bounds_check_covers_all_edges() {
        let bounds = GridSize::try_new(10, 8).expect("10x8 grid should be valid");

        assert!(Position { x: 0, y: 0 }.is_within_bounds(bounds));
        assert!(Position { x: 9, y: 7 }.is_within_bounds(bounds));
        assert!(!Position { x: -1, y: 3 }.is_within_bounds(bounds));
        assert!(!Position { x: 10, y: 3 }.is_within_bounds(bounds));
        assert!(!Position { x: 4, y: -1 }.is_within_bounds(bounds));
        assert!(!Position { x: 4, y: 8 }.is_within_bounds(bounds));
    }

    #[test]
    fn step_moves_one_cell() {
        let origin = Position { x: 5, y: 5 };

        assert_eq!(origin.step(Direction::Up), Position { x: 5, y: 4 });
        assert_eq!(origin.step(Direction::Down), Position { x: 5, y: 6 });
        assert_eq!(origin.step(Direction::Left), Position { x: 4, y: 5 });
        assert_eq!(origin.step(Direction::Right), Position { x: 6, y: 5 });
    }

    #[test]
    fn head_is_last_segment() {
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
        ]);

        assert_eq!(snake.tail(), Position { x: 0, y: 0 });
        assert_eq!(snake.head(), Position { x: 1, y: 0 });
    }

    #[test]
    fn advance_without_growth_translates() {
        let mut snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
        ]);

        snake.advance(Position { x: 2, y: 0 }, false);

        assert_eq!(
            snake.to_vec(),
            vec![Position { x: 1, y: 0 }, Position { x: 2, y: 0 }]
        );
    }

    #[test]
    fn advance_with_growth_keeps_tail() {
        let mut snake = Snake::new(Position { x: 5, y: 5 });

        snake.advance(Position { x: 6, y: 5 }, true);

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.tail(), Position { x: 5, y: 5 });
        assert_eq!(snake.head(), Position { x: 6, y: 5 });
    }

    #[test]
    #[should_panic(expected = "at least one segment")]
    fn empty_body_is_rejected() {
        let _ = Snake::from_segments(Vec::new());
    }
}
