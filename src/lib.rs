//! Fixed capacity FIFO ring buffers over caller-provided storage.
//!
//! The buffers never allocate. A caller binds a ring to a slice it owns (a
//! `static`, a stack array, a DMA region) and the ring manages head and tail
//! indices, wraparound and free-space accounting on top of it. Every push and
//! pop is `O(1)` per entry and either completes fully or leaves the ring
//! untouched.
//!
//! Two shapes share one implementation:
//!
//! - [`RingBuffer`] holds entries of a `Copy` type. [`RingBufferU8`],
//!   [`RingBufferU16`] and [`RingBufferU32`] name the usual widths.
//! - [`EntryRingBuffer`] holds byte records whose size is chosen at run time.
//!
//! # Feature Flags
//! The **ringfifo** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd and implement `std::error::Error` for [`Error`]
//!
//! Without `std` the crate is `#![no_std]`:
//!
//! ```toml
//! [dependencies]
//! ringfifo = { version = "0.1", default-features = false }
//! ```
//!
//! # Concurrency
//!
//! Rings are single threaded. Sharing one between an interrupt handler and
//! the main loop requires the caller to provide mutual exclusion around every
//! operation.
//!
//! # Examples
//! ```
//! use ringfifo::{Error, RingBufferU8};
//!
//! let mut storage = [0u8; 5];
//! let mut fifo = RingBufferU8::new(&mut storage, 5, true).unwrap();
//!
//! for byte in 0..5 {
//!     fifo.push(byte).unwrap();
//! }
//! assert_eq!(fifo.push(5), Err(Error::BufferFull));
//!
//! assert_eq!(fifo.pop(), Ok(0));
//! fifo.push(5).unwrap();
//! assert_eq!(format!("{:?}", fifo), "[1, 2, 3, 4, 5]");
//! ```
//!
//! # Bulk transfers
//! ```
//! use ringfifo::RingBufferU16;
//!
//! let mut storage = [0u16; 4];
//! let mut fifo = RingBufferU16::new(&mut storage, 4, false).unwrap();
//!
//! fifo.push_mul(&[1, 2, 3], 3).unwrap();
//! fifo.pop_mul(&mut [0; 2], 2).unwrap();
//!
//! // crosses the end of storage
//! fifo.push_mul(&[4, 5, 6], 3).unwrap();
//!
//! let mut out = [0; 4];
//! fifo.pop_mul(&mut out, 4).unwrap();
//! assert_eq!(out, [3, 4, 5, 6]);
//! ```

#![cfg_attr(not(any(feature="std", test)), no_std)]

#![deny(missing_docs)]

#[cfg(not(any(feature="std", test)))]
extern crate core as std;

mod entry_ring;
mod logic;
mod ring_buffer;
mod utils;
pub mod error;

pub use entry_ring::{Entries, EntryRingBuffer};
pub use error::Error;
pub use ring_buffer::{Iter, RangeArgument, RingBuffer, RingBufferU16, RingBufferU32, RingBufferU8};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::CircularBuffer;
    use std::vec::Vec;

    fn state<B: CircularBuffer>(buffer: &B) -> (usize, usize, usize) {
        (buffer.head(), buffer.tail(), buffer.free())
    }

    #[test]
    fn simple() {
        let mut storage = [0u32; 8];
        let mut tester = RingBuffer::new(&mut storage, 8, false).unwrap();
        assert_eq!(tester.capacity(), 8);
        assert_eq!(tester.len(), 0);

        tester.push(1).unwrap();
        tester.push(2).unwrap();
        tester.push(3).unwrap();
        tester.push(4).unwrap();
        assert_eq!(tester.len(), 4);
        assert_eq!(tester.free(), 4);

        assert_eq!(tester.pop(), Ok(1));
        assert_eq!(tester.pop(), Ok(2));
        assert_eq!(tester.len(), 2);
        assert_eq!(tester.pop(), Ok(3));
        assert_eq!(tester.pop(), Ok(4));
        assert_eq!(tester.pop(), Err(Error::BufferEmpty));
    }

    #[test]
    fn zero_capacity_rejected() {
        let mut storage = [0u8; 4];
        assert_eq!(RingBuffer::new(&mut storage, 0, true).err(), Some(Error::InvalidArgument));
        assert_eq!(RingBuffer::from_storage(&mut storage[..0], true).err(), Some(Error::InvalidArgument));
        assert_eq!(EntryRingBuffer::new(&mut storage, 0, 1, true).err(), Some(Error::InvalidArgument));
    }

    #[test]
    fn zero_entry_size_rejected() {
        let mut storage = [0xAAu8; 4];
        assert_eq!(EntryRingBuffer::new(&mut storage, 4, 0, true).err(), Some(Error::InvalidArgument));
        // rejected before clearing
        assert_eq!(storage, [0xAA; 4]);
    }

    #[test]
    fn short_storage_rejected() {
        let mut storage = [0u16; 3];
        assert_eq!(RingBuffer::new(&mut storage, 4, false).err(), Some(Error::InvalidArgument));

        let mut bytes = [0u8; 7];
        assert_eq!(EntryRingBuffer::new(&mut bytes, 4, 2, false).err(), Some(Error::InvalidArgument));
        assert_eq!(EntryRingBuffer::new(&mut bytes, usize::MAX, 2, false).err(), Some(Error::InvalidArgument));
    }

    #[test]
    fn init_clears_only_bound_region() {
        let mut storage = [9u8; 6];
        {
            let tester = RingBuffer::new(&mut storage, 4, true).unwrap();
            assert!(tester.is_empty());
            assert_eq!(state(&tester), (0, 0, 4));
        }
        assert_eq!(storage, [0, 0, 0, 0, 9, 9]);

        let mut kept = [9u8; 3];
        RingBuffer::new(&mut kept, 3, false).unwrap();
        assert_eq!(kept, [9, 9, 9]);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut storage = [0u32; 4];
        let mut tester = RingBuffer::new(&mut storage, 4, false).unwrap();
        tester.push_mul(&[1, 2, 3], 3).unwrap();
        tester.pop().unwrap();

        tester.clear();
        assert!(tester.is_empty());
        assert_eq!(state(&tester), (0, 0, 4));
        assert_eq!(tester.storage(), &[0, 0, 0, 0]);

        tester.clear();
        assert!(tester.is_empty());
        assert_eq!(state(&tester), (0, 0, 4));
        assert_eq!(tester.storage(), &[0, 0, 0, 0]);

        tester.push(7).unwrap();
        assert_eq!(tester.pop(), Ok(7));
    }

    #[test]
    fn full_then_wrap() {
        let mut storage = [0u8; 5];
        let mut tester = RingBuffer::new(&mut storage, 5, true).unwrap();
        for i in 0..5 {
            tester.push(i).unwrap();
        }
        assert!(tester.is_full());
        assert_eq!(state(&tester), (0, 0, 0));

        assert_eq!(tester.push(5), Err(Error::BufferFull));
        assert_eq!(state(&tester), (0, 0, 0));

        assert_eq!(tester.pop(), Ok(0));
        tester.push(5).unwrap();
        assert_eq!(state(&tester), (1, 1, 0));
        assert_eq!(tester.storage(), &[5, 1, 2, 3, 4]);
        assert_eq!(tester.iter().cloned().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn push_mul_splits_at_end() {
        let mut storage = [0u8; 4];
        let mut tester = RingBuffer::new(&mut storage, 4, true).unwrap();
        tester.push_mul(&[1, 2, 3], 3).unwrap();
        tester.pop_mul(&mut [0; 3], 3).unwrap();
        assert_eq!(state(&tester), (3, 3, 4));

        tester.push_mul(&[10, 11, 12], 3).unwrap();
        assert_eq!(tester.storage()[3], 10);
        assert_eq!(&tester.storage()[..2], &[11, 12]);
        assert_eq!(state(&tester), (3, 2, 1));

        let mut out = [0; 3];
        tester.pop_mul(&mut out, 3).unwrap();
        assert_eq!(out, [10, 11, 12]);
        assert_eq!(state(&tester), (2, 2, 4));
    }

    #[test]
    fn push_mul_exact_end_lands_on_zero() {
        let mut storage = [0u16; 6];
        let mut tester = RingBuffer::new(&mut storage, 6, false).unwrap();
        tester.push_mul(&[1, 2], 2).unwrap();
        tester.push_mul(&[3, 4, 5, 6], 4).unwrap();
        assert_eq!(state(&tester), (0, 0, 0));
        assert!(tester.is_full());

        tester.pop_mul(&mut [0; 2], 2).unwrap();
        let mut out = [0; 4];
        tester.pop_mul(&mut out, 4).unwrap();
        assert_eq!(out, [3, 4, 5, 6]);
        assert_eq!(state(&tester), (0, 0, 6));
    }

    #[test]
    fn single_and_split_paths_agree() {
        let mut single = [0u32; 4];
        let mut bulk = [0u32; 4];
        let mut a = RingBuffer::new(&mut single, 4, false).unwrap();
        let mut b = RingBuffer::new(&mut bulk, 4, false).unwrap();
        for ring in [&mut a, &mut b].iter_mut() {
            ring.push(0).unwrap();
            ring.pop().unwrap();
        }

        for value in &[1, 2, 3] {
            a.push(*value).unwrap();
        }
        b.push_mul(&[1, 2, 3], 3).unwrap();

        assert_eq!(state(&a), state(&b));
        assert_eq!(a, b);
        assert_eq!(a.storage(), b.storage());
    }

    #[test]
    fn push_mul_rejects_without_mutation() {
        let mut storage = [0u8; 4];
        let mut tester = RingBuffer::new(&mut storage, 4, true).unwrap();
        tester.push_mul(&[1, 2, 3], 3).unwrap();

        assert_eq!(tester.push_mul(&[4, 5], 2), Err(Error::InsufficientSpace { requested: 2, free: 1 }));
        assert_eq!(tester.push_mul(&[4, 5], 0), Err(Error::InvalidArgument));
        assert_eq!(tester.push_mul(&[4], 2), Err(Error::InvalidArgument));
        assert_eq!(state(&tester), (0, 3, 1));
        assert_eq!(tester.storage(), &[1, 2, 3, 0]);
    }

    #[test]
    fn pop_mul_checks_stored_count() {
        let mut storage = [0u8; 10];
        let mut tester = RingBuffer::new(&mut storage, 10, true).unwrap();
        tester.push_mul(&[1, 2, 3], 3).unwrap();
        let before = state(&tester);

        let mut dest = [0xFF; 5];
        assert_eq!(tester.pop_mul(&mut dest, 5), Err(Error::InsufficientData { requested: 5, stored: 3 }));
        assert_eq!(dest, [0xFF; 5]);
        assert_eq!(state(&tester), before);
        assert_eq!(&tester.storage()[..4], &[1, 2, 3, 0]);

        assert_eq!(tester.pop_mul(&mut dest, 0), Err(Error::InvalidArgument));
        assert_eq!(tester.pop_mul(&mut dest[..1], 2), Err(Error::InvalidArgument));
        assert_eq!(state(&tester), before);
    }

    #[test]
    fn usable_after_rejection() {
        let mut storage = [0u8; 2];
        let mut tester = RingBuffer::new(&mut storage, 2, false).unwrap();
        assert_eq!(tester.pop(), Err(Error::BufferEmpty));
        tester.push_mul(&[1, 2], 2).unwrap();
        assert_eq!(tester.push(3), Err(Error::BufferFull));
        assert_eq!(tester.pop(), Ok(1));
        tester.push(3).unwrap();
        assert_eq!(tester.iter().cloned().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn iter_and_range() {
        let mut storage = [0i32; 5];
        let mut tester = RingBuffer::new(&mut storage, 5, false).unwrap();
        tester.push_mul(&[0, 0, 0], 3).unwrap();
        tester.pop_mul(&mut [0; 3], 3).unwrap();
        tester.push_mul(&[1, 2, 3, 4, 5], 5).unwrap();

        assert_eq!(tester.iter().len(), 5);
        assert_eq!(tester.iter().cloned().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(tester.iter().rev().cloned().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
        assert_eq!(tester.range(..).cloned().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(tester.range(1..4).cloned().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(tester.range(..2).rev().cloned().collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(tester.range(5..).count(), 0);
        assert_eq!(tester.as_slices(), (&[1, 2][..], &[3, 4, 5][..]));
        assert_eq!(tester.front(), Some(&1));
        assert_eq!(tester.get(4), Some(&5));
        assert_eq!(tester.get(5), None);
    }

    #[test]
    #[should_panic]
    fn range_past_len_panics() {
        let mut storage = [0u8; 4];
        let mut tester = RingBuffer::new(&mut storage, 4, false).unwrap();
        tester.push(1).unwrap();
        let _ = tester.range(..2);
    }

    #[test]
    fn eq_ignores_layout() {
        let mut left = [0u8; 4];
        let mut right = [0u8; 6];
        let mut a = RingBuffer::new(&mut left, 4, false).unwrap();
        let mut b = RingBuffer::new(&mut right, 6, false).unwrap();

        a.push_mul(&[9, 9, 9], 3).unwrap();
        a.pop_mul(&mut [0; 3], 3).unwrap();
        a.push_mul(&[1, 2, 3], 3).unwrap();
        b.push_mul(&[1, 2, 3], 3).unwrap();

        assert_eq!(a, b);
        b.push(4).unwrap();
        assert!(a != b);
    }

    #[test]
    fn debug_lists_entries() {
        let mut storage = [0u16; 3];
        let mut tester = RingBufferU16::new(&mut storage, 3, false).unwrap();
        assert_eq!(format!("{:?}", tester), "[]");
        tester.push_mul(&[7, 8], 2).unwrap();
        assert_eq!(format!("{:?}", tester), "[7, 8]");
    }

    #[test]
    fn entry_wraparound() {
        // capacity 4 entries of 3 bytes
        let mut storage = [0u8; 12];
        let mut tester = EntryRingBuffer::new(&mut storage, 4, 3, true).unwrap();
        tester.push_mul(b"aaabbbccc", 3).unwrap();
        tester.pop_mul(&mut [0; 9], 3).unwrap();
        assert_eq!(state(&tester), (3, 3, 4));

        tester.push_mul(b"dddeeefff", 3).unwrap();
        assert_eq!(&tester.storage()[9..], b"ddd");
        assert_eq!(&tester.storage()[..6], b"eeefff");
        assert_eq!(state(&tester), (3, 2, 1));

        let entries: Vec<&[u8]> = tester.entries().collect();
        assert_eq!(entries, vec![&b"ddd"[..], &b"eee"[..], &b"fff"[..]]);

        let mut out = [0u8; 9];
        tester.pop_mul(&mut out, 3).unwrap();
        assert_eq!(&out, b"dddeeefff");
        assert!(tester.is_empty());
    }

    #[test]
    fn entry_single_push_pop() {
        let mut storage = [0u8; 8];
        let mut tester = EntryRingBuffer::new(&mut storage, 2, 4, false).unwrap();
        assert_eq!(tester.entry_size(), 4);
        assert_eq!(tester.capacity(), 2);

        assert_eq!(tester.push(b"ab"), Err(Error::InvalidArgument));
        tester.push(b"abcd").unwrap();
        tester.push(b"efghXX").unwrap();
        assert_eq!(tester.push(b"ijkl"), Err(Error::BufferFull));
        assert_eq!(tester.front(), Some(&b"abcd"[..]));

        let mut short = [0u8; 3];
        assert_eq!(tester.pop(&mut short), Err(Error::InvalidArgument));
        let mut out = [0u8; 4];
        tester.pop(&mut out).unwrap();
        assert_eq!(&out, b"abcd");
        tester.pop(&mut out).unwrap();
        assert_eq!(&out, b"efgh");
        assert_eq!(tester.pop(&mut out), Err(Error::BufferEmpty));
    }

    #[test]
    fn entry_pop_mul_checks_stored_count() {
        let mut storage = [0u8; 20];
        let mut tester = EntryRingBuffer::new(&mut storage, 10, 2, false).unwrap();
        tester.push_mul(&[1, 1, 2, 2, 3, 3], 3).unwrap();
        let mut dest = [0u8; 10];
        assert_eq!(tester.pop_mul(&mut dest, 5), Err(Error::InsufficientData { requested: 5, stored: 3 }));
        assert_eq!(tester.len(), 3);
        assert_eq!(dest, [0; 10]);
    }

    #[test]
    fn entry_clear_zeroes() {
        let mut storage = [0u8; 6];
        let mut tester = EntryRingBuffer::new(&mut storage, 3, 2, false).unwrap();
        tester.push_mul(&[1, 2, 3, 4], 2).unwrap();
        tester.clear();
        tester.clear();
        assert!(tester.is_empty());
        assert_eq!(tester.storage(), &[0; 6]);
        assert_eq!(format!("{:?}", tester), "EntryRingBuffer { entry_size: 2, capacity: 3, len: 0 }");
    }

    #[test]
    fn entry_push_mul_rejects_without_mutation() {
        let mut storage = [0xAAu8; 10];
        let mut tester = EntryRingBuffer::new(&mut storage[..8], 4, 2, true).unwrap();
        tester.push_mul(&[1, 1, 2, 2, 3, 3], 3).unwrap();
        tester.pop(&mut [0; 2]).unwrap();
        tester.push(&[4, 4]).unwrap();
        let before = state(&tester);
        assert_eq!(before, (1, 0, 1));

        assert_eq!(
            tester.push_mul(&[5, 5, 6, 6], 2),
            Err(Error::InsufficientSpace { requested: 2, free: 1 })
        );
        assert_eq!(tester.push_mul(&[5, 5], 0), Err(Error::InvalidArgument));
        assert_eq!(tester.push_mul(&[5], 1), Err(Error::InvalidArgument));
        assert_eq!(state(&tester), before);
        assert_eq!(tester.storage(), &[1, 1, 2, 2, 3, 3, 4, 4]);
        drop(tester);
        assert_eq!(&storage[8..], &[0xAA, 0xAA]);
    }

    #[test]
    fn entries_iterate_from_both_ends() {
        let mut storage = [0u8; 8];
        let mut tester = EntryRingBuffer::new(&mut storage, 4, 2, false).unwrap();
        tester.push_mul(b"xxyyzz", 3).unwrap();
        tester.pop_mul(&mut [0; 4], 2).unwrap();
        tester.push_mul(b"aabbcc", 3).unwrap();

        let forward: Vec<&[u8]> = tester.entries().collect();
        assert_eq!(forward, vec![&b"zz"[..], &b"aa"[..], &b"bb"[..], &b"cc"[..]]);
        let backward: Vec<&[u8]> = tester.entries().rev().collect();
        assert_eq!(backward, vec![&b"cc"[..], &b"bb"[..], &b"aa"[..], &b"zz"[..]]);

        let mut entries = tester.entries();
        assert_eq!(entries.next(), Some(&b"zz"[..]));
        assert_eq!(entries.next_back(), Some(&b"cc"[..]));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.next_back(), Some(&b"bb"[..]));
        assert_eq!(entries.next(), Some(&b"aa"[..]));
        assert_eq!(entries.next(), None);
        assert_eq!(entries.next_back(), None);
    }

    #[test]
    fn error_ordering() {
        let mut errors = vec![Error::BufferEmpty, Error::InvalidArgument, Error::BufferFull];
        errors.sort();
        assert_eq!(errors, vec![Error::InvalidArgument, Error::BufferFull, Error::BufferEmpty]);
        assert!(
            Error::InsufficientSpace { requested: 1, free: 0 } < Error::InsufficientSpace { requested: 2, free: 0 }
        );
    }

    #[test]
    fn error_display() {
        assert_eq!(format!("{}", Error::BufferFull), "buffer full");
        assert_eq!(
            format!("{}", Error::InsufficientSpace { requested: 4, free: 1 }),
            "insufficient space: requested 4 entries, 1 free"
        );
    }
}
