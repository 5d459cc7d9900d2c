use super::Iter;
use crate::utils::wrap_add;

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        let head = self.head;
        self.head = wrap_add(self.head, 1, self.ring.len());
        self.len -= 1;
        Some(&self.ring[head])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(&self.ring[wrap_add(self.head, self.len, self.ring.len())])
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
