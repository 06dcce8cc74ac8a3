//! Card grid selection movement
//!
//! The draft grid lays cards out left-to-right, top-to-bottom in fixed-width
//! rows. Selection moves one card or one row at a time and never leaves the
//! list.

/// Number of card columns in the draft grid
pub const GRID_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Compute the next selected card index
///
/// Returns None only when the list is empty. With no current selection any
/// movement selects the first card.
pub fn move_selection(current: Option<usize>, len: usize, direction: Direction) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let Some(index) = current else {
        return Some(0);
    };
    let index = index.min(len - 1);

    let next = match direction {
        Direction::Left => index.saturating_sub(1),
        Direction::Right => (index + 1).min(len - 1),
        Direction::Up => {
            if index >= GRID_COLUMNS {
                index - GRID_COLUMNS
            } else {
                index
            }
        }
        Direction::Down => {
            if index + GRID_COLUMNS < len {
                index + GRID_COLUMNS
            } else {
                index
            }
        }
    };

    Some(next)
}

/// Clamp a selection after the draft list changed size
pub fn clamp_selection(current: Option<usize>, len: usize) -> Option<usize> {
    match current {
        None => None,
        Some(_) if len == 0 => None,
        Some(index) => Some(index.min(len - 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_no_selection() {
        assert_eq!(move_selection(None, 0, Direction::Right), None);
        assert_eq!(move_selection(Some(2), 0, Direction::Down), None);
    }

    #[test]
    fn test_first_movement_selects_first_card() {
        assert_eq!(move_selection(None, 5, Direction::Down), Some(0));
        assert_eq!(move_selection(None, 5, Direction::Left), Some(0));
    }

    #[test]
    fn test_horizontal_movement_clamps_at_edges() {
        assert_eq!(move_selection(Some(0), 5, Direction::Left), Some(0));
        assert_eq!(move_selection(Some(4), 5, Direction::Right), Some(4));
        assert_eq!(move_selection(Some(1), 5, Direction::Right), Some(2));
    }

    #[test]
    fn test_vertical_movement_steps_one_row() {
        // 5 cards: row 0 = [0,1,2], row 1 = [3,4]
        assert_eq!(move_selection(Some(0), 5, Direction::Down), Some(3));
        assert_eq!(move_selection(Some(4), 5, Direction::Up), Some(1));
        // No row below card 2 -> stay put
        assert_eq!(move_selection(Some(2), 5, Direction::Down), Some(2));
        // Already in top row
        assert_eq!(move_selection(Some(1), 5, Direction::Up), Some(1));
    }

    #[test]
    fn test_clamp_after_list_shrinks() {
        assert_eq!(clamp_selection(Some(4), 3), Some(2));
        assert_eq!(clamp_selection(Some(1), 3), Some(1));
        assert_eq!(clamp_selection(Some(0), 0), None);
        assert_eq!(clamp_selection(None, 3), None);
    }
}
