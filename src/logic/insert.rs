use super::copy::{Transfer, Wrapping};
use super::{check_invariants, CircularBuffer};
use crate::error::Error;
use crate::utils::span;

/// Writes `count` entries from the front of `src` at the tail.
///
/// Nothing is written unless every precondition holds.
pub fn push<B: CircularBuffer>(buffer: &mut B, src: &[B::Unit], count: usize) -> Result<(), Error> {
    if count == 0 {
        return Err(Error::InvalidArgument);
    }
    let units = span(count, buffer.stride()).ok_or(Error::InvalidArgument)?;
    if src.len() < units {
        return Err(Error::InvalidArgument);
    }
    let free = buffer.free();
    if count > free {
        return Err(Error::InsufficientSpace { requested: count, free });
    }

    let tail = buffer.tail();
    let new_tail = Wrapping::wrap_copy(buffer, tail, Transfer::Push(&src[..units]));
    buffer.set_tail(new_tail);
    buffer.set_free(free - count);

    check_invariants(buffer);
    Ok(())
}

/// Writes a single entry, reporting a full ring as `BufferFull`.
pub fn push_one<B: CircularBuffer>(buffer: &mut B, src: &[B::Unit]) -> Result<(), Error> {
    if buffer.free() == 0 {
        return Err(Error::BufferFull);
    }
    push(buffer, src, 1)
}
