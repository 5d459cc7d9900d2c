pub use odds::IndexRange as RangeArgument;

use crate::error::Error;
use crate::logic::{self, insert, remove, CircularBuffer};
use crate::utils::wrap_add;

mod iterator_impls;
mod trait_impls;

/// `RingBuffer` is a fixed capacity FIFO over caller-provided storage.
///
/// The buffer borrows its storage for its whole life and never allocates.
/// Entries are pushed at the tail and popped from the head; the number of
/// free slots, not the head and tail positions, decides whether the buffer is
/// empty or full, so every slot of the storage is usable.
///
/// # Examples
///
/// ```
/// use ringfifo::RingBuffer;
///
/// let mut storage = [0u16; 4];
/// let mut fifo = RingBuffer::new(&mut storage, 4, true).unwrap();
///
/// fifo.push(1).unwrap();
/// fifo.push_mul(&[2, 3, 4], 3).unwrap();
/// assert!(fifo.is_full());
///
/// assert_eq!(fifo.pop(), Ok(1));
/// let mut out = [0; 3];
/// fifo.pop_mul(&mut out, 3).unwrap();
/// assert_eq!(out, [2, 3, 4]);
/// assert!(fifo.is_empty());
/// ```
pub struct RingBuffer<'a, T: 'a> {
    storage: &'a mut [T],
    head: usize,
    tail: usize,
    free: usize,
}

/// Ring buffer of bytes.
pub type RingBufferU8<'a> = RingBuffer<'a, u8>;
/// Ring buffer of 16 bit words.
pub type RingBufferU16<'a> = RingBuffer<'a, u16>;
/// Ring buffer of 32 bit words.
pub type RingBufferU32<'a> = RingBuffer<'a, u32>;

/// `RingBuffer` iterator, oldest entry first.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Iter<'a, T: 'a> {
    ring: &'a [T],
    head: usize,
    len: usize,
}

impl<'a, T: Copy + Default> RingBuffer<'a, T> {
    /// Binds a ring buffer of `capacity` entries to the front of `storage`.
    ///
    /// When `clear` is set the bound region is filled with `T::default()`.
    /// Storage past `capacity` entries is never touched.
    ///
    /// Fails with `InvalidArgument` if `capacity` is zero or `storage` holds
    /// fewer than `capacity` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::{Error, RingBuffer};
    ///
    /// let mut storage = [7u8; 8];
    /// let fifo = RingBuffer::new(&mut storage, 5, true).unwrap();
    /// assert_eq!(fifo.capacity(), 5);
    /// drop(fifo);
    /// assert_eq!(storage, [0, 0, 0, 0, 0, 7, 7, 7]);
    ///
    /// assert_eq!(RingBuffer::new(&mut storage, 0, false).err(), Some(Error::InvalidArgument));
    /// assert_eq!(RingBuffer::new(&mut storage, 9, false).err(), Some(Error::InvalidArgument));
    /// ```
    pub fn new(storage: &'a mut [T], capacity: usize, clear: bool) -> Result<Self, Error> {
        if capacity == 0 || storage.len() < capacity {
            return Err(Error::InvalidArgument);
        }
        let (storage, _) = storage.split_at_mut(capacity);
        let mut buffer = RingBuffer {
            storage,
            head: 0,
            tail: 0,
            free: capacity,
        };
        if clear {
            buffer.clear();
        }
        Ok(buffer)
    }

    /// Binds a ring buffer to the whole of `storage`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::RingBufferU32;
    ///
    /// let mut storage = [0u32; 16];
    /// let fifo = RingBufferU32::from_storage(&mut storage, false).unwrap();
    /// assert_eq!(fifo.capacity(), 16);
    /// ```
    #[inline]
    pub fn from_storage(storage: &'a mut [T], clear: bool) -> Result<Self, Error> {
        let capacity = storage.len();
        Self::new(storage, capacity, clear)
    }

    /// Empties the buffer and fills its storage with `T::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::RingBuffer;
    ///
    /// let mut storage = [0u8; 3];
    /// let mut fifo = RingBuffer::new(&mut storage, 3, false).unwrap();
    /// fifo.push(9).unwrap();
    /// fifo.clear();
    /// assert!(fifo.is_empty());
    /// drop(fifo);
    /// assert_eq!(storage, [0, 0, 0]);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        logic::reset(self, T::default());
    }

    /// Appends `value` at the tail.
    ///
    /// Fails with `BufferFull` when no slot is free.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::{Error, RingBuffer};
    ///
    /// let mut storage = [0u8; 1];
    /// let mut fifo = RingBuffer::new(&mut storage, 1, false).unwrap();
    /// assert_eq!(fifo.push(1), Ok(()));
    /// assert_eq!(fifo.push(2), Err(Error::BufferFull));
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        insert::push_one(self, &[value])
    }

    /// Removes and returns the oldest entry.
    ///
    /// Fails with `BufferEmpty` when nothing is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::{Error, RingBuffer};
    ///
    /// let mut storage = [0u32; 2];
    /// let mut fifo = RingBuffer::new(&mut storage, 2, false).unwrap();
    /// fifo.push(40).unwrap();
    /// assert_eq!(fifo.pop(), Ok(40));
    /// assert_eq!(fifo.pop(), Err(Error::BufferEmpty));
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Result<T, Error> {
        let mut out = [T::default()];
        remove::pop_one(self, &mut out)?;
        Ok(out[0])
    }

    /// Appends the first `m` entries of `values` at the tail.
    ///
    /// Either all `m` entries are stored or none is. A transfer that crosses
    /// the end of storage is split into two copies.
    ///
    /// Fails with `InvalidArgument` when `m` is zero or `values` is shorter
    /// than `m`, and with `InsufficientSpace` when fewer than `m` slots are
    /// free.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::{Error, RingBuffer};
    ///
    /// let mut storage = [0u8; 4];
    /// let mut fifo = RingBuffer::new(&mut storage, 4, false).unwrap();
    /// fifo.push_mul(&[1, 2, 3], 3).unwrap();
    /// assert_eq!(
    ///     fifo.push_mul(&[4, 5], 2),
    ///     Err(Error::InsufficientSpace { requested: 2, free: 1 })
    /// );
    /// assert_eq!(fifo.len(), 3);
    /// ```
    #[inline]
    pub fn push_mul(&mut self, values: &[T], m: usize) -> Result<(), Error> {
        insert::push(self, values, m)
    }

    /// Moves the `m` oldest entries into the front of `dest`.
    ///
    /// Fails with `InvalidArgument` when `m` is zero or `dest` is shorter
    /// than `m`, and with `InsufficientData` when fewer than `m` entries are
    /// stored. A failed call leaves the buffer and `dest` untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::{Error, RingBuffer};
    ///
    /// let mut storage = [0u16; 10];
    /// let mut fifo = RingBuffer::new(&mut storage, 10, false).unwrap();
    /// fifo.push_mul(&[1, 2, 3], 3).unwrap();
    ///
    /// let mut out = [0; 5];
    /// assert_eq!(
    ///     fifo.pop_mul(&mut out, 5),
    ///     Err(Error::InsufficientData { requested: 5, stored: 3 })
    /// );
    /// fifo.pop_mul(&mut out, 2).unwrap();
    /// assert_eq!(out, [1, 2, 0, 0, 0]);
    /// ```
    #[inline]
    pub fn pop_mul(&mut self, dest: &mut [T], m: usize) -> Result<(), Error> {
        remove::pop(self, dest, m)
    }
}

impl<'a, T> RingBuffer<'a, T> {
    /// Returns the number of entries the buffer can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
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
    /// use ringfifo::RingBuffer;
    ///
    /// let mut storage = [0u8; 4];
    /// let mut fifo = RingBuffer::new(&mut storage, 4, false).unwrap();
    /// fifo.push_mul(&[3, 4, 5], 3).unwrap();
    /// assert_eq!(fifo.get(1), Some(&4));
    /// assert_eq!(fifo.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            Some(&self.storage[wrap_add(self.head, index, self.capacity())])
        } else {
            None
        }
    }

    /// Returns the oldest entry without removing it.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns an iterator over stored entries, oldest first.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::RingBuffer;
    ///
    /// let mut storage = [0i32; 3];
    /// let mut fifo = RingBuffer::new(&mut storage, 3, false).unwrap();
    /// fifo.push_mul(&[5, 3, 4], 3).unwrap();
    /// fifo.pop().unwrap();
    /// fifo.push(6).unwrap();
    ///
    /// let b: &[_] = &[&3, &4, &6];
    /// let c: Vec<&i32> = fifo.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: &*self.storage,
            head: self.head,
            len: self.len(),
        }
    }

    /// Returns an iterator over a sub-range of stored entries.
    ///
    /// # Panics
    ///
    /// Panics if the starting point is greater than the end point or if
    /// the end point is greater than the number of stored entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::RingBuffer;
    ///
    /// let mut storage = [0u8; 4];
    /// let mut fifo = RingBuffer::new(&mut storage, 4, false).unwrap();
    /// fifo.push_mul(&[1, 2, 3, 4], 4).unwrap();
    ///
    /// let middle: Vec<_> = fifo.range(1..3).cloned().collect();
    /// assert_eq!(middle, vec![2, 3]);
    /// let tail: Vec<_> = fifo.range(2..).cloned().collect();
    /// assert_eq!(tail, vec![3, 4]);
    /// ```
    pub fn range<R>(&self, range: R) -> Iter<'_, T>
        where R: RangeArgument<usize>
    {
        let len = self.len();
        let start = range.start().unwrap_or(0);
        let end = range.end().unwrap_or(len);
        assert!(start <= end, "range lower bound was too large");
        assert!(end <= len, "range upper bound was too large");

        Iter {
            ring: &*self.storage,
            head: wrap_add(self.head, start, self.capacity()),
            len: end - start,
        }
    }

    /// Returns a pair of slices which contain, in order, the stored entries.
    ///
    /// The second slice is empty unless the stored entries cross the end of
    /// storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringfifo::RingBuffer;
    ///
    /// let mut storage = [0u8; 4];
    /// let mut fifo = RingBuffer::new(&mut storage, 4, false).unwrap();
    /// fifo.push_mul(&[1, 2, 3], 3).unwrap();
    /// assert_eq!(fifo.as_slices(), (&[1, 2, 3][..], &[][..]));
    ///
    /// fifo.pop_mul(&mut [0; 2], 2).unwrap();
    /// fifo.push_mul(&[4, 5], 2).unwrap();
    /// assert_eq!(fifo.as_slices(), (&[3, 4][..], &[5][..]));
    /// ```
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let capacity = self.capacity();
        let end = self.head + self.len();
        if end <= capacity {
            (&self.storage[self.head..end], &self.storage[..0])
        } else {
            (&self.storage[self.head..], &self.storage[..end - capacity])
        }
    }
}

impl<'a, T: Copy> CircularBuffer for RingBuffer<'a, T> {
    type Unit = T;

    #[inline]
    fn capacity(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    fn stride(&self) -> usize {
        1
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
    fn storage(&self) -> &[T] {
        &*self.storage
    }

    #[inline]
    fn storage_mut(&mut self) -> &mut [T] {
        &mut *self.storage
    }
}
