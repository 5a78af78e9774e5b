//! Bracket matching pre-pass
//!
//! [`BracketMap::build`] scans the source once and pairs every `[` with its
//! `]`. Pairs are stored as two parallel arrays of source positions, so the
//! same slot can be read in either direction:
//!
//! ```text
//! source:  + [ > [ - ] < ] ]
//! index:   0 1 2 3 4 5 6 7 8
//!
//! slot   opens    closes
//!  0     Some(3)  Some(5)
//!  1     Some(1)  Some(7)
//!  2     None     Some(8)     <- `]` with no open partner
//! ```
//!
//! `None` on either side means "no match". The engine halts when it has to
//! jump through such a slot.

use super::errors::InterpreterError;
use rustc_hash::FxHashMap;

/// Bidirectional open/close position table for one program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BracketMap {
    opens: Vec<Option<usize>>,
    closes: Vec<Option<usize>>,
    /// Position of a `[` -> slot
    open_slots: FxHashMap<usize, usize>,
    /// Position of a `]` -> slot
    close_slots: FxHashMap<usize, usize>,
}

impl BracketMap {
    /// Scan `source` and pair its brackets.
    ///
    /// Fails with [`InterpreterError::TooManyBrackets`] as soon as the number
    /// of pairs the program needs exceeds `capacity`.
    pub fn build(source: &[u8], capacity: usize) -> Result<Self, InterpreterError> {
        let mut map = BracketMap::default();
        let mut pending: Vec<usize> = Vec::new();

        for (pos, &byte) in source.iter().enumerate() {
            match byte {
                b'[' => {
                    pending.push(pos);
                    // Every pending open ends up in exactly one slot
                    map.ensure_room(pending.len(), capacity)?;
                }
                b']' => match pending.pop() {
                    Some(open) => map.record(Some(open), Some(pos)),
                    None => {
                        map.ensure_room(pending.len() + 1, capacity)?;
                        map.record(None, Some(pos));
                    }
                },
                _ => {}
            }
        }

        // Unterminated opens, innermost first
        while let Some(open) = pending.pop() {
            map.record(Some(open), None);
        }

        Ok(map)
    }

    fn ensure_room(&self, extra: usize, capacity: usize) -> Result<(), InterpreterError> {
        let needed = self.opens.len() + extra;
        if needed > capacity {
            return Err(InterpreterError::TooManyBrackets {
                found: needed,
                limit: capacity,
            });
        }
        Ok(())
    }

    fn record(&mut self, open: Option<usize>, close: Option<usize>) {
        let slot = self.opens.len();
        self.opens.push(open);
        self.closes.push(close);
        if let Some(pos) = open {
            self.open_slots.insert(pos, slot);
        }
        if let Some(pos) = close {
            self.close_slots.insert(pos, slot);
        }
    }

    /// Closing position for the `[` at `open`, or `None` if it has no match
    pub fn close_for(&self, open: usize) -> Option<usize> {
        self.open_slots
            .get(&open)
            .and_then(|&slot| self.closes[slot])
    }

    /// Opening position for the `]` at `close`, or `None` if it has no match
    pub fn open_for(&self, close: usize) -> Option<usize> {
        self.close_slots
            .get(&close)
            .and_then(|&slot| self.opens[slot])
    }

    /// Number of recorded slots, matched or not
    pub fn len(&self) -> usize {
        self.opens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opens.is_empty()
    }

    /// Iterate over `(open, close)` slots in recording order
    pub fn pairs(&self) -> impl Iterator<Item = (Option<usize>, Option<usize>)> + '_ {
        self.opens.iter().copied().zip(self.closes.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(source: &str) -> BracketMap {
        BracketMap::build(source.as_bytes(), 1024).unwrap()
    }

    #[test]
    fn test_nested_pairs_innermost_first() {
        let map = build("+[>[-]<]");
        let pairs: Vec<_> = map.pairs().collect();
        assert_eq!(pairs, vec![(Some(3), Some(5)), (Some(1), Some(7))]);

        assert_eq!(map.close_for(1), Some(7));
        assert_eq!(map.close_for(3), Some(5));
        assert_eq!(map.open_for(7), Some(1));
        assert_eq!(map.open_for(5), Some(3));
    }

    #[test]
    fn test_balanced_pairing_is_bijective() {
        let source = "[[][[]]][][[[]]]";
        let map = build(source);
        let opens = source.bytes().filter(|&b| b == b'[').count();
        assert_eq!(map.len(), opens);

        for (pos, byte) in source.bytes().enumerate() {
            match byte {
                b'[' => {
                    let close = map.close_for(pos).unwrap();
                    assert_eq!(map.open_for(close), Some(pos));
                }
                b']' => {
                    let open = map.open_for(pos).unwrap();
                    assert_eq!(map.close_for(open), Some(pos));
                }
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn test_unmatched_close() {
        let map = build("]");
        assert_eq!(map.len(), 1);
        assert_eq!(map.open_for(0), None);
    }

    #[test]
    fn test_unmatched_open() {
        let map = build("[[]");
        assert_eq!(map.close_for(1), Some(2));
        assert_eq!(map.close_for(0), None);
    }

    #[test]
    fn test_non_bracket_positions_have_no_match() {
        let map = build("+[-]");
        assert_eq!(map.close_for(0), None);
        assert_eq!(map.open_for(2), None);
    }

    #[test]
    fn test_comments_ignored() {
        let map = build("loop [ body ] done");
        assert_eq!(map.close_for(5), Some(12));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_capacity_exact_fit() {
        let map = BracketMap::build(b"[][]", 2).unwrap();
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_capacity_overflow_matched() {
        let err = BracketMap::build(b"[][][]", 2).unwrap_err();
        assert_eq!(err, InterpreterError::TooManyBrackets { found: 3, limit: 2 });
    }

    #[test]
    fn test_capacity_overflow_pending() {
        let err = BracketMap::build(b"[[[", 2).unwrap_err();
        assert!(matches!(err, InterpreterError::TooManyBrackets { limit: 2, .. }));
    }

    #[test]
    fn test_capacity_overflow_unmatched_close() {
        let err = BracketMap::build(b"[]]", 1).unwrap_err();
        assert_eq!(err, InterpreterError::TooManyBrackets { found: 2, limit: 1 });
    }
}
