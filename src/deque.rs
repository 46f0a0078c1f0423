//! A growable double-ended queue implemented with a ring buffer.
//!
//! This queue has amortized O(1) inserts and O(1) removals at both ends of the
//! sequence, and O(1) indexing like a vector. When an insertion would fill the
//! buffer, its capacity doubles; capacity is only ever reduced on request, by
//! [`shrink`](RingDeque::shrink).

use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::{Index, IndexMut};
use core::ptr;
use core::slice;

use alloc::vec::Vec;

use crate::error::DequeError;
use crate::storage::{self, capacity_overflow, mut_ptr_at_index, ptr_at_index, HeapStorage};

/// The capacity of a deque created with [`RingDeque::new`], and the default
/// floor below which [`RingDeque::shrink`] will not go.
pub const DEFAULT_CAPACITY: usize = 32;

/// Construction parameters for a [`RingDeque`].
///
/// # Examples
/// ```
/// use vessels::{DequeConfig, RingDeque};
///
/// let config = DequeConfig::with_capacity(4).min_capacity(4);
/// let deque = RingDeque::<u8>::with_config(config).unwrap();
/// assert_eq!(deque.capacity(), 4);
/// assert_eq!(deque.min_capacity(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DequeConfig {
    /// Number of slots in the initial buffer. One slot is always kept free,
    /// so the deque can hold `capacity - 1` elements before it grows.
    pub capacity: usize,
    /// The smallest capacity [`RingDeque::shrink`] may reduce the buffer to.
    pub min_capacity: usize,
}

impl DequeConfig {
    /// Returns a configuration with the given initial capacity and the
    /// default minimum capacity.
    pub const fn with_capacity(capacity: usize) -> Self {
        DequeConfig {
            capacity,
            min_capacity: DEFAULT_CAPACITY,
        }
    }

    /// Sets the shrink floor.
    pub const fn min_capacity(self, min_capacity: usize) -> Self {
        DequeConfig {
            min_capacity,
            ..self
        }
    }

    fn validate(&self) -> Result<(), DequeError> {
        if self.capacity == 0 {
            return Err(DequeError::InvalidArgument {
                name: "capacity",
                value: self.capacity,
            });
        }

        if self.min_capacity == 0 {
            return Err(DequeError::InvalidArgument {
                name: "min_capacity",
                value: self.min_capacity,
            });
        }

        Ok(())
    }
}

impl Default for DequeConfig {
    fn default() -> Self {
        DequeConfig::with_capacity(DEFAULT_CAPACITY)
    }
}

/// A double-ended queue implemented with a growable ring buffer.
///
/// The "default" usage of this type as a queue is to use
/// [`push_back`](RingDeque::push_back) to add to the queue, and
/// [`pop_front`](RingDeque::pop_front) to remove from it.
///
/// One slot of the buffer is always left unused, so that a deque holding zero
/// elements can be told apart from one whose buffer is completely filled. A
/// deque with capacity `n` therefore grows on the push that would store its
/// `n`-th element.
///
/// # Examples
/// ```
/// use vessels::RingDeque;
///
/// let mut deque = RingDeque::with_capacity(4);
/// deque.push_back(1);
/// deque.push_back(2);
/// deque.push_front(0);
/// assert_eq!(deque, [0, 1, 2]);
/// assert_eq!(deque.capacity(), 4);
///
/// deque.push_back(3);
/// assert_eq!(deque.capacity(), 8);
/// assert_eq!(deque.pop_front(), Ok(0));
/// assert_eq!(deque.pop_back(), Ok(3));
/// ```
pub struct RingDeque<T> {
    // `tail` is the first live element unless `tail == head`, in which case
    // the deque is empty. `head` is the next free slot at the back.
    // The live elements are [tail, head) modulo the capacity.
    tail: usize,
    head: usize,
    min_capacity: usize,
    buf: HeapStorage<T>,
}

impl<T> RingDeque<T> {
    /// Creates an empty deque with [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Examples
    /// ```
    /// let deque = vessels::RingDeque::<i32>::new();
    /// assert_eq!(deque.capacity(), vessels::DEFAULT_CAPACITY);
    /// assert!(deque.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::from_valid_config(DequeConfig::default())
    }

    /// Creates an empty deque backed by exactly `capacity` slots.
    ///
    /// # Panics
    /// Panics if `capacity` is zero. See [`try_with_capacity`](RingDeque::try_with_capacity)
    /// for a checked variant that never panics.
    ///
    /// # Examples
    /// ```
    /// let deque = vessels::RingDeque::<i32>::with_capacity(10);
    /// assert_eq!(deque.capacity(), 10);
    /// ```
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(deque) => deque,
            Err(err) => panic!("{}", err),
        }
    }

    /// Creates an empty deque backed by exactly `capacity` slots, returning
    /// [`DequeError::InvalidArgument`] if `capacity` is zero.
    ///
    /// # Examples
    /// ```
    /// use vessels::{DequeError, RingDeque};
    ///
    /// assert!(RingDeque::<i32>::try_with_capacity(2).is_ok());
    /// assert_eq!(
    ///     RingDeque::<i32>::try_with_capacity(0).unwrap_err(),
    ///     DequeError::InvalidArgument { name: "capacity", value: 0 },
    /// );
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self, DequeError> {
        Self::with_config(DequeConfig::with_capacity(capacity))
    }

    /// Creates an empty deque from an explicit configuration.
    ///
    /// # Errors
    /// Returns [`DequeError::InvalidArgument`] if either `config.capacity` or
    /// `config.min_capacity` is zero.
    pub fn with_config(config: DequeConfig) -> Result<Self, DequeError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: DequeConfig) -> Self {
        RingDeque {
            tail: 0,
            head: 0,
            min_capacity: config.min_capacity,
            buf: storage::allocate(config.capacity),
        }
    }

    /// Returns the number of slots in the backing buffer.
    ///
    /// At most `capacity() - 1` elements fit before the deque grows.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the capacity below which [`shrink`](RingDeque::shrink) will not go.
    #[inline]
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// Returns the number of elements currently in the deque.
    #[inline]
    pub fn len(&self) -> usize {
        if self.tail <= self.head {
            self.head - self.tail
        } else {
            self.capacity() - (self.tail - self.head)
        }
    }

    /// Returns `true` exactly when the deque contains zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tail == self.head
    }

    /// Returns `true` when the next push will have to grow the buffer.
    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.len() == self.capacity() - 1
    }

    #[inline(always)]
    fn next(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }

    #[inline(always)]
    fn prev(&self, index: usize) -> usize {
        if index == 0 {
            self.capacity() - 1
        } else {
            index - 1
        }
    }

    #[inline(always)]
    fn physical_index(&self, index: usize) -> Option<usize> {
        if index >= self.len() {
            return None;
        }

        Some((self.tail + index) % self.capacity())
    }

    /// Returns `true` if the deque contains an element equal to the given value.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    /// Returns a reference to the element at the given index, or [`None`] if
    /// the index is out of bounds.
    ///
    /// The element at index 0 is the front of the queue.
    ///
    /// # Examples
    /// ```
    /// let mut deque = vessels::RingDeque::with_capacity(4);
    /// deque.push_back('b');
    /// deque.push_front('a');
    /// assert_eq!(deque.get(1), Some(&'b'));
    /// assert_eq!(deque.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        let index = self.physical_index(index)?;
        unsafe { Some(&*ptr_at_index(&self.buf, index)) }
    }

    /// Returns a mutable reference to the element at the given index, or
    /// [`None`] if the index is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let index = self.physical_index(index)?;
        unsafe { Some(&mut *mut_ptr_at_index(&mut self.buf, index)) }
    }

    /// Returns a reference to the front element, or [`None`] if the deque is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the back element, or [`None`] if the deque is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|last| self.get(last))
    }

    /// Appends an element to the back of the deque, growing the buffer first
    /// if it is saturated.
    ///
    /// # Examples
    /// ```
    /// let mut deque = vessels::RingDeque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.back(), Some(&2));
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.is_saturated() {
            self.grow();
        }

        unsafe {
            mut_ptr_at_index(&mut self.buf, self.head).write(value);
        }
        self.head = self.next(self.head);
    }

    /// Prepends an element to the front of the deque, growing the buffer first
    /// if it is saturated.
    ///
    /// # Examples
    /// ```
    /// let mut deque = vessels::RingDeque::new();
    /// deque.push_front(1);
    /// deque.push_front(2);
    /// assert_eq!(deque.front(), Some(&2));
    /// ```
    pub fn push_front(&mut self, value: T) {
        if self.is_saturated() {
            self.grow();
        }

        self.tail = self.prev(self.tail);
        unsafe {
            mut_ptr_at_index(&mut self.buf, self.tail).write(value);
        }
    }

    /// Removes the last element and returns it, or
    /// [`DequeError::EmptyCollection`] if the deque is empty.
    ///
    /// Never changes the capacity.
    ///
    /// # Examples
    /// ```
    /// use vessels::{DequeError, RingDeque};
    ///
    /// let mut deque = RingDeque::new();
    /// deque.push_back(1);
    /// deque.push_back(3);
    /// assert_eq!(deque.pop_back(), Ok(3));
    /// assert_eq!(deque.pop_back(), Ok(1));
    /// assert_eq!(deque.pop_back(), Err(DequeError::EmptyCollection));
    /// ```
    pub fn pop_back(&mut self) -> Result<T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::EmptyCollection);
        }

        self.head = self.prev(self.head);
        Ok(unsafe { ptr_at_index(&self.buf, self.head).read() })
    }

    /// Removes the first element and returns it, or
    /// [`DequeError::EmptyCollection`] if the deque is empty.
    ///
    /// Never changes the capacity.
    ///
    /// # Examples
    /// ```
    /// use vessels::{DequeError, RingDeque};
    ///
    /// let mut deque = RingDeque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.pop_front(), Ok(1));
    /// assert_eq!(deque.pop_front(), Ok(2));
    /// assert_eq!(deque.pop_front(), Err(DequeError::EmptyCollection));
    /// ```
    pub fn pop_front(&mut self) -> Result<T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::EmptyCollection);
        }

        let result = unsafe { ptr_at_index(&self.buf, self.tail).read() };
        self.tail = self.next(self.tail);
        Ok(result)
    }

    /// Clears the deque, dropping all values.
    ///
    /// The capacity is left unchanged.
    pub fn clear(&mut self) {
        let (front, back) = self.as_mut_slices();
        let front: *mut [T] = front;
        let back: *mut [T] = back;

        // reset first, so a panicking destructor leaks instead of double-dropping
        self.tail = 0;
        self.head = 0;

        unsafe {
            ptr::drop_in_place(front);
            ptr::drop_in_place(back);
        }
    }

    /// Halves the capacity, unless that would take it below the minimum
    /// capacity or leave no room for the current elements plus the reserved
    /// slot. Returns `true` if the buffer was reallocated.
    ///
    /// The elements are moved to the start of the new buffer, preserving their order.
    ///
    /// # Examples
    /// ```
    /// use vessels::{DequeConfig, RingDeque};
    ///
    /// let config = DequeConfig::with_capacity(4).min_capacity(4);
    /// let mut deque = RingDeque::with_config(config).unwrap();
    /// deque.extend(0..10);
    /// assert_eq!(deque.capacity(), 16);
    ///
    /// assert!(!deque.shrink());
    /// deque.truncate_front(3);
    /// assert!(deque.shrink());
    /// assert_eq!(deque.capacity(), 8);
    /// assert!(deque.shrink());
    /// assert_eq!(deque.capacity(), 4);
    /// assert!(!deque.shrink());
    /// assert_eq!(deque, [7, 8, 9]);
    /// ```
    pub fn shrink(&mut self) -> bool {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity / 2;
        if new_capacity < self.min_capacity || new_capacity <= self.len() {
            return false;
        }

        log::trace!(
            "shrinking ring deque from {} to {} slots ({} elements)",
            old_capacity,
            new_capacity,
            self.len()
        );
        self.relocate(new_capacity);
        true
    }

    /// Removes elements from the front until at most `len` remain, dropping them.
    pub fn truncate_front(&mut self, len: usize) {
        while self.len() > len {
            match self.pop_front() {
                Ok(value) => drop(value),
                Err(_) => break,
            }
        }
    }

    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = match old_capacity.checked_mul(2) {
            Some(cap) => cap,
            None => capacity_overflow(),
        };

        log::trace!(
            "growing ring deque from {} to {} slots ({} elements)",
            old_capacity,
            new_capacity,
            self.len()
        );
        self.relocate(new_capacity);
    }

    /// Moves all elements, front to back, to the start of a freshly allocated
    /// buffer of `new_capacity` slots, which then replaces the current one.
    fn relocate(&mut self, new_capacity: usize) {
        let len = self.len();
        debug_assert!(new_capacity > len);

        let mut buf = storage::allocate::<T>(new_capacity);
        let dst = mut_ptr_at_index(&mut buf, 0);
        let (front, back) = self.as_slices();
        unsafe {
            ptr::copy_nonoverlapping(front.as_ptr(), dst, front.len());
            ptr::copy_nonoverlapping(back.as_ptr(), dst.add(front.len()), back.len());
        }

        // the old buffer only frees its memory; its values now live in `buf`
        self.buf = buf;
        self.tail = 0;
        self.head = len;
    }

    /// Returns a pair of slices which contain, in order, the contents of the deque.
    ///
    /// The second slice is empty unless the elements wrap around the end of
    /// the buffer.
    ///
    /// # Examples
    /// ```
    /// let mut deque = vessels::RingDeque::with_capacity(4);
    /// deque.push_back(2);
    /// deque.push_back(1);
    /// deque.push_front(3);
    /// assert_eq!(deque.as_slices(), (&[3][..], &[2, 1][..]));
    /// ```
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let ptr = ptr_at_index(&self.buf, 0);
        unsafe {
            if self.tail <= self.head {
                let slice = slice::from_raw_parts(ptr.add(self.tail), self.head - self.tail);
                (slice, &[])
            } else {
                let fst = slice::from_raw_parts(ptr.add(self.tail), self.capacity() - self.tail);
                let snd = slice::from_raw_parts(ptr, self.head);
                (fst, snd)
            }
        }
    }

    /// Returns a pair of mutable slices which contain, in order, the contents
    /// of the deque.
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let (tail, head, cap) = (self.tail, self.head, self.capacity());
        let ptr = mut_ptr_at_index(&mut self.buf, 0);
        unsafe {
            if tail <= head {
                let slice = slice::from_raw_parts_mut(ptr.add(tail), head - tail);
                (slice, &mut [])
            } else {
                let fst = slice::from_raw_parts_mut(ptr.add(tail), cap - tail);
                let snd = slice::from_raw_parts_mut(ptr, head);
                (fst, snd)
            }
        }
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    /// ```
    /// let mut deque = vessels::RingDeque::new();
    /// deque.push_back(5);
    /// deque.push_back(3);
    /// deque.push_front(4);
    ///
    /// let collected: Vec<_> = deque.iter().collect();
    /// assert_eq!(collected, [&4, &5, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Copies the contents into a new vector, front to back.
    ///
    /// # Examples
    /// ```
    /// let mut deque = vessels::RingDeque::with_capacity(4);
    /// deque.push_front(2);
    /// deque.push_front(1);
    /// deque.push_back(3);
    /// assert_eq!(deque.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let (front, back) = self.as_slices();
        let mut result = Vec::with_capacity(self.len());
        result.extend_from_slice(front);
        result.extend_from_slice(back);
        result
    }
}

impl<T> Default for RingDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for RingDeque<T> {
    /// Returns an independent deque with the same capacity and contents, laid
    /// out from the start of its buffer.
    fn clone(&self) -> Self {
        let mut result = RingDeque {
            tail: 0,
            head: 0,
            min_capacity: self.min_capacity,
            buf: storage::allocate(self.capacity()),
        };
        result.extend(self.iter().cloned());
        result
    }
}

impl<T> Drop for RingDeque<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Index<usize> for RingDeque<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        self.get(index).expect("index out of bounds")
    }
}

impl<T> IndexMut<usize> for RingDeque<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index).expect("index out of bounds")
    }
}

impl<T: Debug> Debug for RingDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (front, back) = self.as_slices();
        f.debug_list().entries(front).entries(back).finish()
    }
}

impl<T: Hash> Hash for RingDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // element by element, so the hash ignores where the buffer wraps
        self.len().hash(state);
        self.iter().for_each(|elem| elem.hash(state));
    }
}

impl<A: PartialEq<B>, B> PartialEq<RingDeque<B>> for RingDeque<A> {
    fn eq(&self, other: &RingDeque<B>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for RingDeque<T> {}

impl<T: PartialEq, R: AsRef<[T]>> PartialEq<R> for RingDeque<T> {
    fn eq(&self, other: &R) -> bool {
        let other = other.as_ref();
        if self.len() != other.len() {
            return false;
        }

        let (front, back) = self.as_slices();
        let mid = front.len();
        front == &other[..mid] && back == &other[mid..]
    }
}

impl<T> Extend<T> for RingDeque<T> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<'a, T: 'a + Clone> Extend<&'a T> for RingDeque<T> {
    fn extend<It: IntoIterator<Item = &'a T>>(&mut self, iter: It) {
        iter.into_iter().for_each(|item| self.push_back(item.clone()));
    }
}

impl<T> FromIterator<T> for RingDeque<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut result = RingDeque::new();
        result.extend(iter);
        result
    }
}

/// An iterator over the elements of a deque.
///
/// This `struct` is created by the [`iter`](RingDeque::iter) method on [`RingDeque`].
pub struct Iter<'a, T> {
    deque: &'a RingDeque<T>,
    front: usize,
    back: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }

        let result = self.deque.get(self.front);
        self.front += 1;
        debug_assert!(result.is_some());
        result
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        let result = self.deque.get(self.back);
        debug_assert!(result.is_some());
        result
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a deque.
///
/// This `struct` is created by the `into_iter` method on [`RingDeque`]
/// (provided by the [`IntoIterator`] trait).
pub struct IntoIter<T> {
    deque: RingDeque<T>,
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.deque).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.deque.pop_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.deque.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for RingDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a RingDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
