//! The fixed map of the taxi grid.
//!
//! ```text
//! +---------+
//! |R: | : :G|
//! | : | : : |
//! | : : : : |
//! | | : | : |
//! |Y| : |B: |
//! +---------+
//! ```
//!
//! Coordinates are `(col, row)` with `(0, 0)` at the top left.

pub const GRID_SIZE: u8 = 5;

/// The four pickup/drop-off cells, in landmark index order: red, green,
/// yellow, blue.
pub const LANDMARKS: [(u8, u8); 4] = [(0, 0), (4, 0), (0, 4), (3, 4)];

pub const LANDMARK_NAMES: [&str; 4] = ["R", "G", "Y", "B"];

/// A wall segment blocking lateral movement. Every cell in column `col` with
/// a row in `rows` has a wall on its east side.
#[derive(Debug, Clone, Copy)]
struct EastWall {
    col: u8,
    rows: (u8, u8),
}

const EAST_WALLS: [EastWall; 3] = [
    EastWall { col: 0, rows: (3, 4) },
    EastWall { col: 1, rows: (0, 1) },
    EastWall { col: 2, rows: (3, 4) },
];

fn has_east_wall(col: u8, row: u8) -> bool {
    EAST_WALLS
        .iter()
        .any(|wall| wall.col == col && (wall.rows.0..=wall.rows.1).contains(&row))
}

pub fn can_move_east(col: u8, row: u8) -> bool {
    col + 1 < GRID_SIZE && !has_east_wall(col, row)
}

pub fn can_move_west(col: u8, row: u8) -> bool {
    col > 0 && !has_east_wall(col - 1, row)
}

pub fn can_move_south(row: u8) -> bool {
    row + 1 < GRID_SIZE
}

pub fn can_move_north(row: u8) -> bool {
    row > 0
}

/// Index of the landmark at the given cell, if there is one.
pub fn landmark_at(col: u8, row: u8) -> Option<u8> {
    LANDMARKS
        .iter()
        .position(|&cell| cell == (col, row))
        .map(|index| index as u8)
}

pub fn manhattan_distance(from: (u8, u8), to: (u8, u8)) -> u32 {
    u32::from(from.0.abs_diff(to.0)) + u32::from(from.1.abs_diff(to.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn east_walls_match_map() {
        let blocked: Vec<(u8, u8)> = (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| (col, row)))
            .filter(|&(col, row)| col + 1 < GRID_SIZE && !can_move_east(col, row))
            .collect();
        assert_eq!(
            blocked,
            vec![(1, 0), (1, 1), (0, 3), (2, 3), (0, 4), (2, 4)]
        );
    }

    #[test]
    fn west_is_mirror_of_east() {
        for row in 0..GRID_SIZE {
            for col in 1..GRID_SIZE {
                assert_eq!(can_move_west(col, row), can_move_east(col - 1, row));
            }
        }
        assert!(!can_move_west(0, 2));
        assert!(!can_move_east(4, 2));
    }

    #[test]
    fn landmarks_are_found() {
        assert_eq!(landmark_at(0, 0), Some(0));
        assert_eq!(landmark_at(4, 0), Some(1));
        assert_eq!(landmark_at(0, 4), Some(2));
        assert_eq!(landmark_at(3, 4), Some(3));
        assert_eq!(landmark_at(2, 2), None);
    }

    #[test]
    fn manhattan() {
        assert_eq!(manhattan_distance((0, 0), (3, 4)), 7);
        assert_eq!(manhattan_distance((4, 0), (0, 4)), 8);
        assert_eq!(manhattan_distance((2, 2), (2, 2)), 0);
    }
}
