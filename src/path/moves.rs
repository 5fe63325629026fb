use std::fmt;

/// A single unit step on the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Move {
    Right,
    Up,
}

impl Move {
    pub const fn symbol(self) -> char {
        match self {
            Move::Right => 'R',
            Move::Up => 'U',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One monotonic route, stored as its ordered moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LatticePath {
    moves: Vec<Move>,
}

impl LatticePath {
    /// Builds a path of `len` moves where every index in `right_positions`
    /// is a right move and every other index is an up move.
    ///
    /// Positions outside `0..len` are ignored.
    pub fn from_right_positions(len: usize, right_positions: &[usize]) -> Self {
        let mut moves = vec![Move::Up; len];
        for &pos in right_positions {
            if let Some(slot) = moves.get_mut(pos) {
                *slot = Move::Right;
            }
        }
        Self { moves }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn count(&self, kind: Move) -> usize {
        self.moves.iter().filter(|&&m| m == kind).count()
    }
}

impl fmt::Display for LatticePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.moves.iter().try_for_each(|m| write!(f, "{m}"))
    }
}

impl From<Vec<Move>> for LatticePath {
    fn from(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_positions_fill_the_rest_with_up() {
        let path = LatticePath::from_right_positions(3, &[0, 2]);
        assert_eq!(path.moves(), &[Move::Right, Move::Up, Move::Right]);
        assert_eq!(path.to_string(), "RUR");
        assert_eq!(path.count(Move::Right), 2);
        assert_eq!(path.count(Move::Up), 1);
    }

    #[test]
    fn out_of_range_position_is_ignored() {
        let path = LatticePath::from_right_positions(2, &[5]);
        assert_eq!(path.to_string(), "UU");
    }

    #[test]
    fn empty_path_displays_as_empty_string() {
        let path = LatticePath::from(Vec::new());
        assert!(path.is_empty());
        assert_eq!(path.to_string(), "");
    }
}
