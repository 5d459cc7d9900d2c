pub mod insert;
pub mod remove;
pub mod copy;

/// Index and storage view shared by every ring buffer shape.
///
/// Positions are entry indices in `[0, capacity)`. Storage is addressed in
/// units: an entry spans `stride()` consecutive units.
pub trait CircularBuffer {
    type Unit: Copy;

    fn capacity(&self) -> usize;
    fn stride(&self) -> usize;

    fn head(&self) -> usize;
    fn tail(&self) -> usize;
    fn free(&self) -> usize;

    fn set_head(&mut self, head: usize);
    fn set_tail(&mut self, tail: usize);
    fn set_free(&mut self, free: usize);

    fn storage(&self) -> &[Self::Unit];
    fn storage_mut(&mut self) -> &mut [Self::Unit];
}

#[inline]
pub fn stored<B: CircularBuffer>(buffer: &B) -> usize {
    buffer.capacity() - buffer.free()
}

/// Resets indices and free count, then fills the bound storage with `zero`.
pub fn reset<B: CircularBuffer>(buffer: &mut B, zero: B::Unit) {
    for unit in buffer.storage_mut().iter_mut() {
        *unit = zero;
    }
    buffer.set_head(0);
    buffer.set_tail(0);
    let capacity = buffer.capacity();
    buffer.set_free(capacity);
    check_invariants(buffer);
}

#[inline]
pub fn check_invariants<B: CircularBuffer>(buffer: &B) {
    let capacity = buffer.capacity();
    debug_assert!(capacity > 0);
    debug_assert!(buffer.free() <= capacity);
    debug_assert!(buffer.head() < capacity);
    debug_assert!(buffer.tail() < capacity);
    debug_assert_eq!(buffer.storage().len(), capacity * buffer.stride());
    debug_assert_eq!((buffer.head() + stored(buffer)) % capacity, buffer.tail());
}
