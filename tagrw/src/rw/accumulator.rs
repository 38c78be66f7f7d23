// tagrw/src/rw/accumulator.rs

use crate::{Error, Result};

/// Reassembly buffer for one NDEF read.
///
/// Capacity is the size reported by detection. A segment that does not fit
/// poisons the buffer: it is not copied, later segments are dropped and
/// `finish` reports the overflow.
#[derive(Debug)]
pub struct NdefReadBuffer {
    buf: Vec<u8>,
    capacity: usize,
    poisoned: Option<Error>,
}

impl NdefReadBuffer {
    /// Reserve exactly `size` bytes, failing instead of aborting when the
    /// allocation cannot be made.
    pub fn allocate(size: usize) -> Result<Self> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(size)
            .map_err(|_| Error::AllocationFailed { size })?;
        Ok(Self {
            buf,
            capacity: size,
            poisoned: None,
        })
    }

    pub fn offset(&self) -> usize {
        self.buf.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.buf.len()
    }

    pub fn is_poisoned(&self) -> bool {
        self.poisoned.is_some()
    }

    /// Append one segment at the current offset.
    pub fn append(&mut self, segment: &[u8]) -> Result<()> {
        if self.poisoned.is_some() {
            return Ok(());
        }
        if segment.len() > self.remaining() {
            let err = Error::OversizedSegment {
                len: segment.len(),
                remaining: self.remaining(),
            };
            self.poisoned = Some(err.clone());
            return Err(err);
        }
        self.buf.extend_from_slice(segment);
        Ok(())
    }

    /// Hand over the message. Consumes the buffer.
    pub fn finish(self) -> Result<Vec<u8>> {
        match self.poisoned {
            Some(err) => Err(err),
            None => Ok(self.buf),
        }
    }
}
