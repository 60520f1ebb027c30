pub const PEG_COUNT: usize = 3;

/// Disk sizes are positive; a larger number is a wider disk.
pub type Disk = usize;

/// Three pegs, each a stack of disks with the top at the end of the `Vec`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    pegs: [Vec<Disk>; PEG_COUNT],
}

impl Board {
    /// Build the starting tower: disks `disk_count..=1` stacked on peg 0.
    pub fn new(disk_count: usize) -> Self {
        let mut board = Board::default();
        board.pegs[0] = (1..=disk_count).rev().collect();
        board
    }

    /// Disks on a peg, bottom first. Out-of-range pegs read as empty.
    pub fn peg(&self, peg: usize) -> &[Disk] {
        self.pegs.get(peg).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Top (movable) disk of a peg
    pub fn top(&self, peg: usize) -> Option<Disk> {
        self.peg(peg).last().copied()
    }

    pub fn disk_count(&self) -> usize {
        self.pegs.iter().map(Vec::len).sum()
    }

    /// A disk may land on an empty peg or on a strictly larger top disk.
    pub fn can_place(&self, disk: Disk, peg: usize) -> bool {
        match self.top(peg) {
            None => peg < PEG_COUNT,
            Some(top) => disk < top,
        }
    }

    /// Move the top disk of `from` onto `to`. Returns the moved disk, or
    /// `None` (board untouched) if `from` is empty or the move is illegal.
    pub fn move_top(&mut self, from: usize, to: usize) -> Option<Disk> {
        let disk = self.top(from)?;
        if !self.can_place(disk, to) {
            return None;
        }
        self.pegs[from].pop();
        self.pegs[to].push(disk);
        Some(disk)
    }

    /// Check that every peg is strictly decreasing from bottom to top.
    pub fn is_well_ordered(&self) -> bool {
        self.pegs
            .iter()
            .all(|peg| peg.windows(2).all(|pair| pair[0] > pair[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_stacks_on_first_peg() {
        let board = Board::new(4);
        assert_eq!(board.peg(0), &[4, 3, 2, 1]);
        assert!(board.peg(1).is_empty());
        assert!(board.peg(2).is_empty());
        assert_eq!(board.top(0), Some(1));
        assert_eq!(board.disk_count(), 4);
    }

    #[test]
    fn test_out_of_range_peg_reads_empty() {
        let board = Board::new(2);
        assert!(board.peg(3).is_empty());
        assert_eq!(board.top(7), None);
        assert!(!board.can_place(1, 3));
    }

    #[test]
    fn test_can_place() {
        let mut board = Board::new(3);
        assert!(board.can_place(3, 1)); // empty peg
        board.move_top(0, 1).unwrap();
        assert!(!board.can_place(2, 1)); // 2 onto 1
        assert!(!board.can_place(1, 1)); // equal size
        assert!(board.can_place(1, 0)); // 1 onto 2
    }

    #[test]
    fn test_move_top() {
        let mut board = Board::new(3);
        assert_eq!(board.move_top(0, 2), Some(1));
        assert_eq!(board.peg(2), &[1]);
        assert_eq!(board.peg(0), &[3, 2]);
    }

    #[test]
    fn test_illegal_move_leaves_board_untouched() {
        let mut board = Board::new(3);
        board.move_top(0, 2).unwrap();
        let before = board.clone();
        assert_eq!(board.move_top(0, 2), None);
        assert_eq!(board, before);
        assert_eq!(board.move_top(1, 0), None); // empty source
        assert_eq!(board, before);
    }

    #[test]
    fn test_well_ordered() {
        let board = Board::new(5);
        assert!(board.is_well_ordered());
        assert!(Board::default().is_well_ordered());
    }
}
