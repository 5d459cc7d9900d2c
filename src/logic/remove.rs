use super::copy::{Transfer, Wrapping};
use super::{check_invariants, stored, CircularBuffer};
use crate::error::Error;
use crate::utils::span;

/// Moves the `count` oldest entries into the front of `dst`.
///
/// The check is against entries currently stored, never against capacity,
/// so stale slots past the tail are unreachable.
pub fn pop<B: CircularBuffer>(buffer: &mut B, dst: &mut [B::Unit], count: usize) -> Result<(), Error> {
    if count == 0 {
        return Err(Error::InvalidArgument);
    }
    let units = span(count, buffer.stride()).ok_or(Error::InvalidArgument)?;
    if dst.len() < units {
        return Err(Error::InvalidArgument);
    }
    let len = stored(buffer);
    if count > len {
        return Err(Error::InsufficientData { requested: count, stored: len });
    }

    let head = buffer.head();
    let new_head = Wrapping::wrap_copy(buffer, head, Transfer::Pop(&mut dst[..units]));
    buffer.set_head(new_head);
    let free = buffer.free();
    buffer.set_free(free + count);

    check_invariants(buffer);
    Ok(())
}

/// Moves a single entry out, reporting an empty ring as `BufferEmpty`.
pub fn pop_one<B: CircularBuffer>(buffer: &mut B, dst: &mut [B::Unit]) -> Result<(), Error> {
    if stored(buffer) == 0 {
        return Err(Error::BufferEmpty);
    }
    pop(buffer, dst, 1)
}
