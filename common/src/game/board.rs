use super::types::{CELL_COUNT, Mark, Player};

/// The 9x9 grid as a flat row-major array.
///
/// A mark, once placed through [`Board::place`], is never cleared; starting
/// over means building a fresh board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from up to 81 marks; missing trailing cells stay empty.
    pub fn from_marks(marks: &[Mark]) -> Self {
        let mut board = Self::new();
        for (i, &mark) in marks.iter().take(CELL_COUNT).enumerate() {
            board.cells[i] = mark;
        }
        board
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn place(&mut self, index: usize, player: Player) -> Result<(), String> {
        match self.cells.get(index) {
            None => Err(format!("Cell {} is out of bounds", index)),
            Some(cell) if !cell.is_empty() => Err(format!("Cell {} is already marked", index)),
            Some(_) => {
                self.cells[index] = player.mark();
                Ok(())
            }
        }
    }

    /// Copy of this board with `player`'s mark at `index`, for lookahead.
    /// The caller guarantees `index` is an empty cell.
    pub fn with_mark(&self, index: usize, player: Player) -> Board {
        let mut next = *self;
        next.cells[index] = player.mark();
        next
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use super::types::BOARD_SIZE;

        writeln!(f, "Board {{")?;
        for row in self.cells.chunks(BOARD_SIZE) {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Mark::Empty => '.',
                    Mark::White => 'W',
                    Mark::Black => 'B',
                })
                .collect();
            writeln!(f, "  {}", line)?;
        }
        write!(f, "}}")
    }
}
