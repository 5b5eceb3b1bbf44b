//! Item sources
//!
//! An [`ItemSource`] is the underlying ordered collection a paginated view
//! looks at. The view only ever measures it and reads contiguous ranges out of
//! it; it never copies or mutates the items.

use std::collections::VecDeque;

/// Boxed iterator over borrowed items of a source
pub type ItemIter<'a, T> = Box<dyn Iterator<Item = &'a T> + 'a>;

/// An ordered collection that can be measured and read by range
pub trait ItemSource {
    /// Item type yielded by the source
    type Item;

    /// Total number of items in the (unpaged) collection
    fn count(&self) -> usize;

    /// Iterate over `len` items starting at `start`
    ///
    /// Ranges running past the end are clipped. A `start` beyond the end
    /// yields nothing.
    fn iter_range(&self, start: usize, len: usize) -> ItemIter<'_, Self::Item>;

    /// Iterate over every item in order
    fn iter_all(&self) -> ItemIter<'_, Self::Item> {
        self.iter_range(0, usize::MAX)
    }
}

impl<T> ItemSource for [T] {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn iter_range(&self, start: usize, len: usize) -> ItemIter<'_, T> {
        let items = self.get(start..).unwrap_or_default();
        Box::new(items.iter().take(len))
    }

    fn iter_all(&self) -> ItemIter<'_, T> {
        Box::new(self.iter())
    }
}

impl<T> ItemSource for Vec<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn iter_range(&self, start: usize, len: usize) -> ItemIter<'_, T> {
        self.as_slice().iter_range(start, len)
    }

    fn iter_all(&self) -> ItemIter<'_, T> {
        Box::new(self.iter())
    }
}

impl<T> ItemSource for VecDeque<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn iter_range(&self, start: usize, len: usize) -> ItemIter<'_, T> {
        Box::new(self.iter().skip(start).take(len))
    }

    fn iter_all(&self) -> ItemIter<'_, T> {
        Box::new(self.iter())
    }
}

impl<S: ItemSource + ?Sized> ItemSource for &S {
    type Item = S::Item;

    fn count(&self) -> usize {
        (**self).count()
    }

    fn iter_range(&self, start: usize, len: usize) -> ItemIter<'_, S::Item> {
        (**self).iter_range(start, len)
    }

    fn iter_all(&self) -> ItemIter<'_, S::Item> {
        (**self).iter_all()
    }
}
