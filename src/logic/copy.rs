use super::CircularBuffer;
use crate::utils::{distance_to_end, wrap_add};

/// Where the caller's slice sits relative to the ring.
pub enum Transfer<'s, U: 's> {
    /// Copy from the slice into storage starting at the given position.
    Push(&'s [U]),
    /// Copy from storage starting at the given position into the slice.
    Pop(&'s mut [U]),
}

impl<'s, U> Transfer<'s, U> {
    fn units(&self) -> usize {
        match *self {
            Transfer::Push(ref src) => src.len(),
            Transfer::Pop(ref dst) => dst.len(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Parameters {
    pub start: usize,
    pub len: usize,
    pub pre_wrap_len: usize,
    pub wraps: bool,
}

impl Parameters {
    /// Splits `len` entries starting at `start` at the end of storage.
    #[inline]
    pub fn new(start: usize, len: usize, capacity: usize) -> Parameters {
        debug_assert!(len <= capacity);
        let pre_wrap_len = len.min(distance_to_end(start, capacity));
        Parameters {
            start,
            len,
            pre_wrap_len,
            wraps: len > pre_wrap_len,
        }
    }
}

pub struct Wrapping;

impl Wrapping {
    /// Copies the whole transfer slice to or from the ring, starting at entry
    /// `start`, and returns the position just past the last entry touched.
    ///
    /// The slice length must be a whole number of entries and no larger than
    /// the ring. Callers check free or stored counts before calling.
    pub fn wrap_copy<B: CircularBuffer>(buffer: &mut B, start: usize, transfer: Transfer<B::Unit>) -> usize {
        let stride = buffer.stride();
        let capacity = buffer.capacity();
        debug_assert_eq!(transfer.units() % stride, 0);

        let params = Parameters::new(start, transfer.units() / stride, capacity);
        match params.wraps {
            false => Self::contiguous(buffer, params, transfer),
            true => Self::split(buffer, params, transfer),
        }

        wrap_add(start, params.len, capacity)
    }

    fn contiguous<B: CircularBuffer>(buffer: &mut B, params: Parameters, transfer: Transfer<B::Unit>) {
        // fits before the end of storage, tail may land exactly on 0
        //
        //          S
        // 1 [_ _ _ A B C _ _]
        //                  N
        //

        let stride = buffer.stride();
        let Parameters { start, len, .. } = params;
        let ring = &mut buffer.storage_mut()[start * stride..(start + len) * stride];
        match transfer {
            Transfer::Push(src) => ring.copy_from_slice(src),
            Transfer::Pop(dst) => dst.copy_from_slice(ring),
        }
    }

    fn split<B: CircularBuffer>(buffer: &mut B, params: Parameters, transfer: Transfer<B::Unit>) {
        // crosses the end of storage
        //
        //                S
        // 1 [_ _ _ _ _ _ A B]
        // 2 [C D _ _ _ _ A B]
        //        N
        //

        let stride = buffer.stride();
        let Parameters { start, len, pre_wrap_len, .. } = params;
        let (front, back) = buffer.storage_mut().split_at_mut(start * stride);
        let pre_wrap = pre_wrap_len * stride;
        let post_wrap = (len - pre_wrap_len) * stride;
        match transfer {
            Transfer::Push(src) => {
                back[..pre_wrap].copy_from_slice(&src[..pre_wrap]);
                front[..post_wrap].copy_from_slice(&src[pre_wrap..]);
            }
            Transfer::Pop(dst) => {
                dst[..pre_wrap].copy_from_slice(&back[..pre_wrap]);
                dst[pre_wrap..].copy_from_slice(&front[..post_wrap]);
            }
        }
    }
}
