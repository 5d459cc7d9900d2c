//! Ring buffer of fixed-size byte entries.

use std::fmt;

use crate::error::Error;
use crate::logic::{self, insert, remove, CircularBuffer};
use crate::utils::{span, wrap_add};

/// `EntryRingBuffer` stores entries of `entry_size` bytes in caller storage.
///
/// It is the byte oriented counterpart of [`RingBuffer`](crate::RingBuffer)
/// for records whose size is only known at run time: every entry occupies
/// `entry_size` consecutive bytes and wraparound happens on entry boundaries.
///
/// # Examples
///
/// ```
/// use ringfifo::EntryRingBuffer;
///
/// let mut storage = [0u8; 12];
/// let mut fifo = EntryRingBuffer::new(&mut storage, 4, 3, true).unwrap();
///
/// fifo.push(b"abc").unwrap();
/// fifo.push_mul(b"defghi", 2).unwrap();
///
/// let mut entry = [0u8; 3];
/// fifo.pop(&mut entry).unwrap();
/// assert_eq!(&entry, b"abc");
/// assert_eq!(fifo.len(), 2);
/// ```
pub struct EntryRingBuffer<'a> {
    storage: &'a mut [u8],
    entry_size: usize,
    head: usize,
    tail: usize,
    free: usize,
}

/// Iterator over stored entries of an `EntryRingBuffer`, oldest first.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Entries<'a> {
    ring: &'a [u8],
    entry_size: usize,
    head: usize,
    len: usize,
}

impl<'a> EntryRingBuffer<'a> {
    /// Binds a ring of `capacity` entries of `entry_size` bytes to the front
    /// of `storage`, zero-filling the bound region when `clear` is set.
    ///
    /// Fails with `InvalidArgument` if `capacity` or `entry_size` is zero, or
    /// if `storage` is shorter than `capacity * entry_size` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::{EntryRingBuffer, Error};
    ///
    /// let mut storage = [0u8; 16];
    /// assert!(EntryRingBuffer::new(&mut storage, 4, 4, false).is_ok());
    /// assert_eq!(EntryRingBuffer::new(&mut storage, 4, 0, false).err(), Some(Error::InvalidArgument));
    /// assert_eq!(EntryRingBuffer::new(&mut storage, 5, 4, false).err(), Some(Error::InvalidArgument));
    /// ```
    pub fn new(storage: &'a mut [u8], capacity: usize, entry_size: usize, clear: bool) -> Result<Self, Error> {
        if capacity == 0 || entry_size == 0 {
            return Err(Error::InvalidArgument);
        }
        let bytes = span(capacity, entry_size).ok_or(Error::InvalidArgument)?;
        if storage.len() < bytes {
            return Err(Error::InvalidArgument);
        }
        let (storage, _) = storage.split_at_mut(bytes);
        let mut buffer = EntryRingBuffer {
            storage,
            entry_size,
            head: 0,
            tail: 0,
            free: capacity,
        };
        if clear {
            buffer.clear();
        }
        Ok(buffer)
    }

    /// Empties the buffer and zero-fills its storage.
    #[inline]
    pub fn clear(&mut self) {
        logic::reset(self, 0);
    }

    /// Appends one entry, taken from the first `entry_size` bytes of `entry`.
    ///
    /// Fails with `BufferFull` when no slot is free and with
    /// `InvalidArgument` when `entry` is shorter than one entry.
    #[inline]
    pub fn push(&mut self, entry: &[u8]) -> Result<(), Error> {
        insert::push_one(self, entry)
    }

    /// Moves the oldest entry into the first `entry_size` bytes of `dest`.
    ///
    /// Fails with `BufferEmpty` when nothing is stored and with
    /// `InvalidArgument` when `dest` is shorter than one entry.
    #[inline]
    pub fn pop(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        remove::pop_one(self, dest)
    }

    /// Appends `m` consecutive entries read from the front of `entries`.
    ///
    /// Fails with `InvalidArgument` when `m` is zero or `entries` holds fewer
    /// than `m * entry_size` bytes, and with `InsufficientSpace` when fewer
    /// than `m` slots are free.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::{EntryRingBuffer, Error};
    ///
    /// let mut storage = [0u8; 8];
    /// let mut fifo = EntryRingBuffer::new(&mut storage, 4, 2, false).unwrap();
    /// assert_eq!(fifo.push_mul(&[1, 2, 3], 2), Err(Error::InvalidArgument));
    /// fifo.push_mul(&[1, 2, 3, 4, 5, 6], 3).unwrap();
    /// assert_eq!(
    ///     fifo.push_mul(&[7, 8, 9, 10], 2),
    ///     Err(Error::InsufficientSpace { requested: 2, free: 1 })
    /// );
    /// ```
    #[inline]
    pub fn push_mul(&mut self, entries: &[u8], m: usize) -> Result<(), Error> {
        insert::push(self, entries, m)
    }

    /// Moves the `m` oldest entries into the front of `dest`.
    ///
    /// Fails with `InvalidArgument` when `m` is zero or `dest` holds fewer
    /// than `m * entry_size` bytes, and with `InsufficientData` when fewer
    /// than `m` entries are stored.
    #[inline]
    pub fn pop_mul(&mut self, dest: &mut [u8], m: usize) -> Result<(), Error> {
        remove::pop(self, dest, m)
    }

    /// Returns the number of entries the buffer can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len() / self.entry_size
    }

    /// Returns the size of one entry in bytes.
    #[inline]
    pub fn entry_size(&self) -> usize {
        self.entry_size
    }

    /// Returns the number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.capacity() - self.free
    }

    /// Returns the number of free slots.
    #[inline]
    pub fn free(&self) -> usize {
        self.free
    }

    /// Returns true if the buffer contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.free == self.capacity()
    }

    /// Returns true if no slot is free.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.free == 0
    }

    /// Retrieves a stored entry by position, 0 being the oldest.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::EntryRingBuffer;
    ///
    /// let mut storage = [0u8; 6];
    /// let mut fifo = EntryRingBuffer::new(&mut storage, 3, 2, false).unwrap();
    /// fifo.push_mul(b"aabbcc", 3).unwrap();
    /// assert_eq!(fifo.get(2), Some(&b"cc"[..]));
    /// assert_eq!(fifo.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        if index < self.len() {
            let slot = wrap_add(self.head, index, self.capacity());
            Some(&self.storage[slot * self.entry_size..(slot + 1) * self.entry_size])
        } else {
            None
        }
    }

    /// Returns the oldest entry without removing it.
    #[inline]
    pub fn front(&self) -> Option<&[u8]> {
        self.get(0)
    }

    /// Returns an iterator over stored entries, oldest first.
    #[inline]
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            ring: &*self.storage,
            entry_size: self.entry_size,
            head: self.head,
            len: self.len(),
        }
    }
}

impl<'a> CircularBuffer for EntryRingBuffer<'a> {
    type Unit = u8;

    #[inline]
    fn capacity(&self) -> usize {
        self.storage.len() / self.entry_size
    }

    #[inline]
    fn stride(&self) -> usize {
        self.entry_size
    }

    #[inline]
    fn head(&self) -> usize {
        self.head
    }

    #[inline]
    fn tail(&self) -> usize {
        self.tail
    }

    #[inline]
    fn free(&self) -> usize {
        self.free
    }

    #[inline]
    fn set_head(&mut self, head: usize) {
        self.head = head;
    }

    #[inline]
    fn set_tail(&mut self, tail: usize) {
        self.tail = tail;
    }

    #[inline]
    fn set_free(&mut self, free: usize) {
        self.free = free;
    }

    #[inline]
    fn storage(&self) -> &[u8] {
        &*self.storage
    }

    #[inline]
    fn storage_mut(&mut self) -> &mut [u8] {
        &mut *self.storage
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a [u8];

    #[inline]
    fn next(&mut self) -> Option<&'a [u8]> {
        if self.len == 0 {
            return None;
        }
        let start = self.head * self.entry_size;
        self.head = wrap_add(self.head, 1, self.ring.len() / self.entry_size);
        self.len -= 1;
        Some(&self.ring[start..start + self.entry_size])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a> DoubleEndedIterator for Entries<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a [u8]> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let slot = wrap_add(self.head, self.len, self.ring.len() / self.entry_size);
        let start = slot * self.entry_size;
        Some(&self.ring[start..start + self.entry_size])
    }
}

impl<'a> ExactSizeIterator for Entries<'a> {}

impl<'a> fmt::Debug for EntryRingBuffer<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryRingBuffer")
            .field("entry_size", &self.entry_size)
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish()
    }
}
