//! Fixed-size memory tape
//!
//! The tape never grows. The data pointer saturates at both ends: moving
//! left from cell 0 or right from the last cell is a no-op.

/// A run's tape of 8-bit cells plus its data pointer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<u8>,
    pointer: usize,
}

impl Tape {
    /// Zero-filled tape with `size` cells. `size` must be non-zero.
    pub fn new(size: usize) -> Self {
        Tape {
            cells: vec![0; size],
            pointer: 0,
        }
    }

    pub fn move_right(&mut self) {
        if self.pointer + 1 < self.cells.len() {
            self.pointer += 1;
        }
    }

    pub fn move_left(&mut self) {
        self.pointer = self.pointer.saturating_sub(1);
    }

    pub fn increment(&mut self) {
        let cell = &mut self.cells[self.pointer];
        *cell = cell.wrapping_add(1);
    }

    pub fn decrement(&mut self) {
        let cell = &mut self.cells[self.pointer];
        *cell = cell.wrapping_sub(1);
    }

    /// Value of the current cell
    pub fn get(&self) -> u8 {
        self.cells[self.pointer]
    }

    /// Overwrite the current cell
    pub fn set(&mut self, value: u8) {
        self.cells[self.pointer] = value;
    }

    /// Current data pointer
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_edge_saturates() {
        let mut tape = Tape::new(4);
        tape.move_left();
        assert_eq!(tape.pointer(), 0);
        tape.increment();
        assert_eq!(tape.cells(), &[1, 0, 0, 0]);
    }

    #[test]
    fn test_right_edge_saturates() {
        let mut tape = Tape::new(3);
        for _ in 0..10 {
            tape.move_right();
        }
        assert_eq!(tape.pointer(), 2);
        tape.decrement();
        assert_eq!(tape.cells(), &[0, 0, 255]);
    }

    #[test]
    fn test_single_cell_tape() {
        let mut tape = Tape::new(1);
        tape.move_right();
        tape.move_left();
        assert_eq!(tape.pointer(), 0);
    }

    #[test]
    fn test_increment_decrement_inverse() {
        let mut tape = Tape::new(1);
        for value in 0..=255u8 {
            tape.set(value);
            tape.increment();
            tape.decrement();
            assert_eq!(tape.get(), value);
            tape.decrement();
            tape.increment();
            assert_eq!(tape.get(), value);
        }
    }

    #[test]
    fn test_wraparound() {
        let mut tape = Tape::new(1);
        tape.decrement();
        assert_eq!(tape.get(), 255);
        tape.increment();
        assert_eq!(tape.get(), 0);
    }
}
