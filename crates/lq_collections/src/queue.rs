//! Growable first-in-first-out queue over contiguous storage.
//!
//! Currently only the most basic APIs are provided.
//!
//! Advanced APIs may be added in future releases
//! based on usage patterns and community feedback.

use alloc::vec::{self, Vec};
use core::fmt;
use core::slice;

// -----------------------------------------------------------------------------
// Queue

/// A first-in-first-out queue backed by a growable contiguous buffer.
///
/// Elements are pushed at the back and popped at the front, so the oldest
/// element still present is always removed first. The buffer keeps elements
/// in insertion order, which makes the full contents available as a slice
/// and iteration a plain front-to-back traversal.
///
/// Note that popping the front shifts every remaining element, so it runs
/// in linear time; pushing the back is amortized constant time.
///
/// ```
/// use lq_collections::Queue;
///
/// let mut queue = Queue::new();
///
/// queue.push_back(1);
/// queue.push_back(2);
/// queue.push_back(3);
///
/// // The oldest element leaves first
/// assert_eq!(queue.pop_front(), Some(1));
/// assert_eq!(queue.pop_front(), Some(2));
///
/// // Popping an empty queue is not an error
/// assert_eq!(queue.pop_front(), Some(3));
/// assert_eq!(queue.pop_front(), None);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Queue<T> {
    storage: Vec<T>,
}

impl<T> Default for Queue<T> {
    /// Creates an empty `Queue`, without allocating.
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty `Queue`.
    ///
    /// No allocation happens until the first push.
    ///
    /// # Examples
    ///
    /// ```
    /// use lq_collections::Queue;
    ///
    /// let queue: Queue<i32> = Queue::new();
    /// assert!(queue.is_empty());
    /// assert_eq!(queue.len(), 0);
    /// ```
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            storage: Vec::new(),
        }
    }

    /// Creates an empty `Queue` with space for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use lq_collections::Queue;
    ///
    /// let queue: Queue<i32> = Queue::with_capacity(16);
    /// assert!(queue.is_empty());
    /// assert!(queue.capacity() >= 16);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use lq_collections::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.len(), 0);
    ///
    /// queue.push_back(1);
    /// queue.push_back(2);
    /// assert_eq!(queue.len(), 2);
    /// ```
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns the number of elements the queue can hold without reallocating.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns `true` if the queue contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use lq_collections::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert!(queue.is_empty());
    ///
    /// queue.push_back(1);
    /// assert!(!queue.is_empty());
    /// ```
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns a reference to the front element, if present.
    ///
    /// The front is the oldest element still in the queue. This method does
    /// not remove it.
    ///
    /// # Examples
    ///
    /// ```
    /// use lq_collections::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.front(), None);
    ///
    /// queue.push_back(1);
    /// queue.push_back(2);
    /// assert_eq!(queue.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.storage.first()
    }

    /// Returns a reference to the back element, if present.
    ///
    /// The back is the most recently pushed element. This method does not
    /// remove it.
    ///
    /// # Examples
    ///
    /// ```
    /// use lq_collections::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.back(), None);
    ///
    /// queue.push_back(1);
    /// queue.push_back(2);
    /// assert_eq!(queue.back(), Some(&2));
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
    /// use lq_collections::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.push_back("a");
    /// queue.push_back("b");
    /// queue.push_back("b");
    ///
    /// assert_eq!(queue.find(&"b"), Some(1));
    /// assert_eq!(queue.find(&"c"), None);
    /// ```
    pub fn find(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.storage.iter().position(|item| item == element)
    }

    /// Pushes an element to the back of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use lq_collections::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.push_back(1);
    /// queue.push_back(2);
    ///
    /// assert_eq!(queue.back(), Some(&2));
    /// assert_eq!(queue.len(), 2);
    /// ```
    #[inline]
    pub fn push_back(&mut self, element: T) {
        self.storage.push(element);
    }

    /// Removes and returns the front element of the queue.
    ///
    /// Returns `Some(T)` if the queue is not empty, otherwise returns `None`
    /// and leaves the queue untouched. The remaining elements shift toward
    /// the front.
    ///
    /// # Examples
    ///
    /// ```
    /// use lq_collections::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.push_back(1);
    /// queue.push_back(2);
    ///
    /// assert_eq!(queue.pop_front(), Some(1));
    /// assert_eq!(queue.pop_front(), Some(2));
    /// assert_eq!(queue.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if !self.is_empty() {
            Some(self.storage.remove(0))
        } else {
            None
        }
    }

    /// Removes all elements from the queue.
    ///
    /// All elements are dropped. The allocated capacity remains unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use lq_collections::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.push_back(1);
    /// queue.push_back(2);
    ///
    /// queue.clear();
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Returns the full contents as a slice, in front-to-back order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lq_collections::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.push_back(1);
    /// queue.push_back(2);
    ///
    /// assert_eq!(queue.as_slice(), &[1, 2]);
    /// ```
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Returns an iterator over the elements, front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use lq_collections::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.push_back(1);
    /// queue.push_back(2);
    ///
    /// let mut iter = queue.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
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
impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.storage.iter()).finish()
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    /// Consumes the queue, yielding its elements front to back.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    /// Collects elements in iteration order, as if each was pushed at the back.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            storage: Vec::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.storage.extend(iter);
    }
}

// -----------------------------------------------------------------------------
// Tests
