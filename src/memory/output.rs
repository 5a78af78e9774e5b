//! Capacity-checked output sink
//!
//! One slot of the capacity is kept for a terminator, so a sink created with
//! capacity `n` accepts `n - 1` bytes. The push that takes the last slot
//! still lands in the buffer, and it reports [`SinkStatus::Full`].
//!
//! A sink of capacity 1 has no room besides the terminator. It still stores
//! the first byte pushed and reports full straight away.

/// Result of a single push
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkStatus {
    /// Byte stored, room remains
    Accepted,
    /// Byte stored, no room for another
    Full,
}

/// Append-only output buffer with a fixed capacity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSink {
    bytes: Vec<u8>,
    capacity: usize,
}

impl OutputSink {
    /// `capacity` must be at least 1; [`Config::validate`] enforces this.
    ///
    /// [`Config::validate`]: crate::interpreter::config::Config::validate
    pub fn new(capacity: usize) -> Self {
        OutputSink {
            bytes: Vec::new(),
            capacity,
        }
    }

    /// Append a byte. Pushing into a sink that is already full drops the byte.
    pub fn push(&mut self, byte: u8) -> SinkStatus {
        if self.is_full() {
            return SinkStatus::Full;
        }
        self.bytes.push(byte);
        if self.is_full() {
            SinkStatus::Full
        } else {
            SinkStatus::Accepted
        }
    }

    pub fn is_full(&self) -> bool {
        self.bytes.len() >= self.limit()
    }

    /// Bytes this sink will hold before reporting full
    pub fn limit(&self) -> usize {
        self.capacity.saturating_sub(1).max(1)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserves_terminator_slot() {
        let mut sink = OutputSink::new(4);
        assert_eq!(sink.push(b'a'), SinkStatus::Accepted);
        assert_eq!(sink.push(b'b'), SinkStatus::Accepted);
        assert_eq!(sink.push(b'c'), SinkStatus::Full);
        assert_eq!(sink.as_bytes(), b"abc");
    }

    #[test]
    fn test_push_after_full_is_dropped() {
        let mut sink = OutputSink::new(2);
        assert_eq!(sink.push(1), SinkStatus::Full);
        assert_eq!(sink.push(2), SinkStatus::Full);
        assert_eq!(sink.into_bytes(), vec![1]);
    }

    #[test]
    fn test_capacity_one_takes_a_single_byte() {
        let mut sink = OutputSink::new(1);
        assert!(!sink.is_full());
        assert_eq!(sink.limit(), 1);
        assert_eq!(sink.push(b'x'), SinkStatus::Full);
        assert_eq!(sink.push(b'y'), SinkStatus::Full);
        assert_eq!(sink.as_bytes(), b"x");
    }

    #[test]
    fn test_empty_sink() {
        let sink = OutputSink::new(16);
        assert!(sink.is_empty());
        assert!(!sink.is_full());
        assert_eq!(sink.capacity(), 16);
    }
}
