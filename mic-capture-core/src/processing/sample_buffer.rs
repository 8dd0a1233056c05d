/// Bounded, pre-allocated buffer for captured audio samples.
///
/// Capacity is fixed at construction and fully allocated up front, so
/// the audio callback never allocates. Overflow behavior: a batch that
/// would push the sample count past capacity is dropped whole — no
/// partial copy. The captured prefix is therefore always an unbroken
/// concatenation of accepted batches in delivery order.
#[derive(Debug)]
pub struct SampleBuffer {
    samples: Vec<f32>,
    capacity: usize,
}

impl SampleBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a batch of samples.
    ///
    /// Returns `true` if the batch was accepted. Empty batches and
    /// batches that would exceed capacity are rejected; a rejected
    /// batch leaves the buffer untouched. Capacity is an intentionally
    /// reachable fill level: a batch that lands exactly at capacity is
    /// accepted, and only batches pushing past it are dropped.
    pub fn push_batch(&mut self, batch: &[f32]) -> bool {
        if batch.is_empty() {
            return false;
        }
        if self.samples.len() + batch.len() > self.capacity {
            return false;
        }
        self.samples.extend_from_slice(batch);
        true
    }

    /// Copy up to `out.len()` samples from the front of the buffer into
    /// `out`. Returns the number of samples copied. The buffer is left
    /// unchanged.
    pub fn read_into(&self, out: &mut [f32]) -> usize {
        let to_copy = self.samples.len().min(out.len());
        out[..to_copy].copy_from_slice(&self.samples[..to_copy]);
        to_copy
    }

    /// All captured samples, in delivery order.
    pub fn as_slice(&self) -> &[f32] {
        &self.samples
    }

    /// Number of samples currently held.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Discard all samples. Capacity (and the allocation) is retained.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// The fixed capacity of the buffer.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_push_read() {
        let mut buf = SampleBuffer::new(10);
        assert!(buf.push_batch(&[1.0, 2.0, 3.0]));

        assert_eq!(buf.len(), 3);
        assert_eq!(buf.as_slice(), &[1.0, 2.0, 3.0]);

        let mut out = [0.0; 3];
        assert_eq!(buf.read_into(&mut out), 3);
        assert_eq!(out, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn batches_concatenate_in_order() {
        let mut buf = SampleBuffer::new(10);
        buf.push_batch(&[1.0, 2.0]);
        buf.push_batch(&[3.0]);
        buf.push_batch(&[4.0, 5.0]);

        assert_eq!(buf.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn overflow_drops_whole_batch() {
        let mut buf = SampleBuffer::new(4);
        assert!(buf.push_batch(&[1.0, 2.0, 3.0]));
        assert!(!buf.push_batch(&[4.0, 5.0])); // would hit 5 of 4

        // Not even a partial copy of the rejected batch.
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn exact_fill_is_accepted() {
        let mut buf = SampleBuffer::new(4);
        assert!(buf.push_batch(&[1.0, 2.0]));
        assert!(buf.push_batch(&[3.0, 4.0]));

        assert_eq!(buf.len(), 4);
        assert!(!buf.push_batch(&[5.0]));
    }

    #[test]
    fn empty_batch_rejected() {
        let mut buf = SampleBuffer::new(4);
        assert!(!buf.push_batch(&[]));
        assert!(buf.is_empty());
    }

    #[test]
    fn read_into_smaller_output_truncates() {
        let mut buf = SampleBuffer::new(10);
        buf.push_batch(&[1.0, 2.0, 3.0, 4.0, 5.0]);

        let mut out = [0.0; 2];
        assert_eq!(buf.read_into(&mut out), 2);
        assert_eq!(out, [1.0, 2.0]);

        // Reading does not consume.
        assert_eq!(buf.len(), 5);
    }

    #[test]
    fn read_into_larger_output_copies_available() {
        let mut buf = SampleBuffer::new(10);
        buf.push_batch(&[1.0, 2.0]);

        let mut out = [9.0; 5];
        assert_eq!(buf.read_into(&mut out), 2);
        assert_eq!(out, [1.0, 2.0, 9.0, 9.0, 9.0]);
    }

    #[test]
    fn clear_retains_capacity() {
        let mut buf = SampleBuffer::new(4);
        buf.push_batch(&[1.0, 2.0, 3.0, 4.0]);
        buf.clear();

        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 4);
        assert!(buf.push_batch(&[5.0, 6.0, 7.0, 8.0]));
    }
}
