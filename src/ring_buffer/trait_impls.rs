use std::fmt;

use super::{Iter, RingBuffer};

impl<'a, 'b, T> PartialEq<RingBuffer<'b, T>> for RingBuffer<'a, T>
    where T: PartialEq
{
    fn eq(&self, other: &RingBuffer<'b, T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<'a, T> Eq for RingBuffer<'a, T> where T: Eq {}

impl<'a, 'b, T> IntoIterator for &'b RingBuffer<'a, T> {
    type Item = &'b T;
    type IntoIter = Iter<'b, T>;

    fn into_iter(self) -> Iter<'b, T> {
        self.iter()
    }
}

impl<'a, T> fmt::Debug for RingBuffer<'a, T>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
