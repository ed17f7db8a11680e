use super::board::Cell;

/// The two players. `First` always opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Convert side to the cell its marks occupy
    pub fn to_cell(self) -> Cell {
        match self {
            Side::First => Cell::First,
            Side::Second => Cell::Second,
        }
    }

    /// Get side name for display
    pub fn name(self) -> &'static str {
        match self {
            Side::First => "First",
            Side::Second => "Second",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_side() {
        assert_eq!(Side::First.other(), Side::Second);
        assert_eq!(Side::Second.other(), Side::First);
    }

    #[test]
    fn test_to_cell() {
        assert_eq!(Side::First.to_cell(), Cell::First);
        assert_eq!(Side::Second.to_cell(), Cell::Second);
    }

    #[test]
    fn test_side_name() {
        assert_eq!(Side::First.name(), "First");
        assert_eq!(Side::Second.to_string(), "Second");
    }
}
