#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity);
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

/// Slots between `index` and the end of storage, `index` included.
#[inline]
pub fn distance_to_end(index: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity);
    capacity - index
}

/// Units spanned by `count` entries of `stride` units, `None` on overflow.
#[inline]
pub fn span(count: usize, stride: usize) -> Option<usize> {
    count.checked_mul(stride)
}
