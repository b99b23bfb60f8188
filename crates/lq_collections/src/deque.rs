//! Growable double-ended queue over contiguous storage.
//!
//! Currently only the most basic APIs are provided.
//!
//! Advanced APIs may be added in future releases
//! based on usage patterns and community feedback.

use alloc::vec::{self, Vec};
use core::fmt;
use core::slice;

// -----------------------------------------------------------------------------
// Deque

/// A double-ended queue backed by a growable contiguous buffer.
///
/// `Deque` extends the FIFO contract of [`Queue`] with insertion at the
/// front and removal at the back. The buffer keeps elements in front-to-back
/// order, so the full contents are always available as a slice and iteration
/// is a plain forward traversal.
///
/// Note that the front operations shift every remaining element, so they run
/// in linear time; the back operations are amortized constant time.
///
/// ```
/// use lq_collections::Deque;
///
/// let mut deque = Deque::new();
///
/// deque.push_back(1);
/// deque.push_back(2);
/// deque.push_front(0);
/// assert_eq!(deque.as_slice(), &[0, 1, 2]);
///
/// // Elements leave from either end
/// assert_eq!(deque.pop_back(), Some(2));
/// assert_eq!(deque.pop_front(), Some(0));
/// assert_eq!(deque.as_slice(), &[1]);
/// ```
///
/// [`Queue`]: crate::Queue
#[derive(Clone, PartialEq, Eq)]
pub struct Deque<T> {
    storage: Vec<T>,
}

impl<T> Default for Deque<T> {
    /// Creates an empty `Deque`, without allocating.
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> {
    /// Creates an empty `Deque`.
    ///
    /// No allocation happens until the first push.
    ///
    /// # Examples
    ///
    /// ```
    /// use lq_collections::Deque;
    ///
    /// let deque: Deque<i32> = Deque::new();
    /// assert!(deque.is_empty());
    /// ```
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            storage: Vec::new(),
        }
    }

    /// Creates an empty `Deque` with space for at least `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the deque.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns the number of elements the deque can hold without reallocating.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns `true` if the deque contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns a reference to the front element, if present.
    ///
    /// This method does not remove the element.
    ///
    /// # Examples
    ///
    /// ```
    /// use lq_collections::Deque;
    ///
    /// let mut deque = Deque::new();
    /// assert_eq!(deque.front(), None);
    ///
    /// deque.push_back(1);
    /// deque.push_front(0);
    /// assert_eq!(deque.front(), Some(&0));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.storage.first()
    }

    /// Returns a reference to the back element, if present.
    ///
    /// This method does not remove the element.
    ///
    /// # Examples
    ///
    /// ```
    /// use lq_collections::Deque;
    ///
    /// let mut deque = Deque::new();
    /// assert_eq!(deque.back(), None);
    ///
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.back(), Some(&2));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.storage.last()
    }

    /// Returns the index of the first element equal to `element`.
    ///
    /// Indices count from the front, so the front element has index `0`.
    /// Returns `None` if no element compares equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use lq_collections::Deque;
    ///
    /// let mut deque = Deque::new();
    /// deque.push_back(1);
    /// deque.push_front(0);
    ///
    /// assert_eq!(deque.find(&1), Some(1));
    /// assert_eq!(deque.find(&2), None);
    /// ```
    pub fn find(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.storage.iter().position(|item| item == element)
    }

    /// Pushes an element to the front of the deque.
    ///
    /// The element becomes the new front; every existing element shifts one
    /// slot toward the back.
    ///
    /// # Examples
    ///
    /// ```
    /// use lq_collections::Deque;
    ///
    /// let mut deque = Deque::new();
    /// deque.push_front(1);
    /// deque.push_front(0);
    ///
    /// assert_eq!(deque.as_slice(), &[0, 1]);
    /// ```
    #[inline]
    pub fn push_front(&mut self, element: T) {
        self.storage.insert(0, element);
    }

    /// Pushes an element to the back of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use lq_collections::Deque;
    ///
    /// let mut deque = Deque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    ///
    /// assert_eq!(deque.back(), Some(&2));
    /// ```
    #[inline]
    pub fn push_back(&mut self, element: T) {
        self.storage.push(element);
    }

    /// Removes and returns the front element of the deque.
    ///
    /// Returns `Some(T)` if the deque is not empty, otherwise returns `None`
    /// and leaves the deque untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use lq_collections::Deque;
    ///
    /// let mut deque = Deque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    ///
    /// assert_eq!(deque.pop_front(), Some(1));
    /// assert_eq!(deque.pop_front(), Some(2));
    /// assert_eq!(deque.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if !self.is_empty() {
            Some(self.storage.remove(0))
        } else {
            None
        }
    }

    /// Removes and returns the back element of the deque.
    ///
    /// Returns `Some(T)` if the deque is not empty, otherwise returns `None`
    /// and leaves the deque untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use lq_collections::Deque;
    ///
    /// let mut deque = Deque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    ///
    /// assert_eq!(deque.pop_back(), Some(2));
    /// assert_eq!(deque.pop_back(), Some(1));
    /// assert_eq!(deque.pop_back(), None);
    /// ```
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.storage.pop()
    }

    /// Removes all elements from the deque.
    ///
    /// All elements are dropped. The allocated capacity remains unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Returns the full contents as a slice, in front-to-back order.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Returns an iterator over the elements, front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use lq_collections::Deque;
    ///
    /// let mut deque = Deque::new();
    /// deque.push_back(1);
    /// deque.push_front(0);
    ///
    /// let mut iter = deque.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.storage.iter()
    }
}

// -----------------------------------------------------------------------------
// Trait Impls

/// Renders the full element sequence in front-to-back order.
impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.storage.iter()).finish()
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    /// Consumes the deque, yielding its elements front to back.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    /// Collects elements in iteration order, as if each was pushed at the back.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            storage: Vec::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.storage.extend(iter);
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::Deque;

    #[test]
    fn is_sync_send() {
        use core::panic::{RefUnwindSafe, UnwindSafe};

        fn is_send<T: Send>() {}
        fn is_sync<T: Sync>() {}
        fn is_unwindsafe<T: UnwindSafe>() {}
        fn is_refunwindsafe<T: RefUnwindSafe>() {}

        is_send::<Deque<i32>>();
        is_sync::<Deque<i32>>();
        is_unwindsafe::<Deque<i32>>();
        is_refunwindsafe::<Deque<i32>>();
    }

    #[test]
    fn both_ends_round_trip() {
        let mut deque = Deque::new();
        deque.push_back(1);
        deque.push_back(2);
        deque.push_front(0);
        assert_eq!(deque.as_slice(), &[0, 1, 2]);

        assert_eq!(deque.pop_back(), Some(2));
        assert_eq!(deque.as_slice(), &[0, 1]);

        assert_eq!(deque.pop_front(), Some(0));
        assert_eq!(deque.as_slice(), &[1]);
    }

    #[test]
    fn push_front_reverses_order() {
        let mut deque = Deque::new();
        deque.push_front('a');
        deque.push_front('b');
        deque.push_front('c');

        // The most recent front push comes out first
        let collected: Vec<char> = deque.iter().copied().collect();
        assert_eq!(collected, ['c', 'b', 'a']);
        assert_eq!(deque.front(), Some(&'c'));
        assert_eq!(deque.back(), Some(&'a'));
    }

    #[test]
    fn pops_on_empty_are_no_ops() {
        let mut deque: Deque<i32> = Deque::new();
        assert_eq!(deque.pop_front(), None);
        assert_eq!(deque.pop_back(), None);
        assert_eq!(deque.len(), 0);

        deque.push_back(1);
        deque.pop_back();
        assert_eq!(deque.pop_back(), None);
        assert!(deque.is_empty());
    }

    #[test]
    fn behaves_as_fifo_from_the_back() {
        let mut deque = Deque::new();
        for i in 1..=3 {
            deque.push_back(i);
        }

        assert_eq!(deque.pop_front(), Some(1));
        assert_eq!(deque.pop_front(), Some(2));
        assert_eq!(deque.pop_front(), Some(3));
        assert_eq!(deque.pop_front(), None);
    }

    #[test]
    fn find_counts_from_the_front() {
        let mut deque = Deque::new();
        deque.push_back(1);
        deque.push_back(2);
        deque.push_front(2);

        assert_eq!(deque.find(&2), Some(0));
        assert_eq!(deque.find(&1), Some(1));
        assert_eq!(deque.find(&3), None);
    }

    #[test]
    fn clear_always_empties() {
        let mut deque = Deque::new();
        deque.push_front(1);
        deque.push_back(2);

        deque.clear();
        assert!(deque.is_empty());
        assert_eq!(deque.front(), None);
        assert_eq!(deque.back(), None);
    }

    #[test]
    fn debug_renders_contents() {
        let mut deque = Deque::new();
        assert_eq!(format!("{deque:?}"), "[]");

        deque.push_back(1);
        deque.push_front(0);
        assert_eq!(format!("{deque:?}"), "[0, 1]");
    }

    #[test]
    fn owned_elements_move_through() {
        let mut deque = Deque::new();
        deque.push_back(String::from("middle"));
        deque.push_front(String::from("front"));
        deque.push_back(String::from("back"));

        assert_eq!(deque.pop_back().as_deref(), Some("back"));
        assert_eq!(deque.pop_front().as_deref(), Some("front"));
        assert_eq!(deque.pop_front().as_deref(), Some("middle"));
        assert_eq!(deque.pop_front(), None);
    }

    #[test]
    fn from_iterator_and_extend() {
        let mut deque: Deque<i32> = (1..=3).collect();
        assert_eq!(deque.as_slice(), &[1, 2, 3]);

        deque.extend(4..=5);
        deque.push_front(0);
        assert_eq!(deque.as_slice(), &[0, 1, 2, 3, 4, 5]);
    }
}
