/*!
A max heap on some subset of a fixed collection of indexed values.

Values are stored by index, and stay where they are.
The heap holds indices, and a companion vector notes where (if anywhere) each index sits on the heap.
So, an index may be moved on and off the heap without its value being lost, and the value of an index on the heap may be revised and the heap repaired from the position of the index.

Indices are ordered by value, with ties going to the lower index.
As a result the maximum of the heap does not depend on the order in which indices were activated.

```rust
# use cdcl_sat::generic::index_heap::IndexHeap;
let mut heap = IndexHeap::default();
heap.add(7, 1.0);
heap.add(2, 3.0);
heap.add(5, 3.0);
for index in [7, 5, 2] {
    heap.activate(index);
}

assert_eq!(heap.pop_max(), Some(2));
assert_eq!(heap.pop_max(), Some(5));
assert_eq!(heap.pop_max(), Some(7));
assert!(heap.pop_max().is_none());
```
*/

/// The index heap struct.
pub struct IndexHeap<V: PartialOrd + Default + Clone> {
    /// Values, by index.
    values: Vec<V>,

    /// The position of each index on the heap, if any.
    position_in_heap: Vec<Option<usize>>,

    /// The heap, of indices, with the active part given by `limit`.
    heap: Vec<usize>,

    /// A count of indices on the heap.
    limit: usize,
}

impl<V: PartialOrd + Default + Clone> Default for IndexHeap<V> {
    fn default() -> Self {
        IndexHeap {
            values: Vec::default(),
            position_in_heap: Vec::default(),
            heap: Vec::default(),
            limit: 0,
        }
    }
}

impl<V: PartialOrd + Default + Clone> IndexHeap<V> {
    /// Gives `index` the value `value`, growing the structure if required.
    ///
    /// Returns true if `index` was fresh.
    /// A fresh index is not on the heap until [activated](IndexHeap::activate).
    pub fn add(&mut self, index: usize, value: V) -> bool {
        let fresh = self.values.len() <= index;
        if fresh {
            self.values.resize(index + 1, V::default());
            self.position_in_heap.resize(index + 1, None);
        }
        self.revalue(index, value);
        fresh
    }

    /// Places `index` on the heap, if not already present.
    ///
    /// Returns true if `index` was placed on the heap.
    pub fn activate(&mut self, index: usize) -> bool {
        match self.position_in_heap.get(index) {
            None | Some(Some(_)) => false,
            Some(None) => {
                match self.limit < self.heap.len() {
                    true => self.heap[self.limit] = index,
                    false => self.heap.push(index),
                }
                self.position_in_heap[index] = Some(self.limit);
                self.limit += 1;
                self.heapify_up(self.limit - 1);
                true
            }
        }
    }

    /// Removes `index` from the heap, if present.
    ///
    /// Returns true if `index` was removed.
    pub fn remove(&mut self, index: usize) -> bool {
        let Some(Some(position)) = self.position_in_heap.get(index).copied() else {
            return false;
        };

        self.limit -= 1;
        self.swap(position, self.limit);
        self.position_in_heap[index] = None;

        if position < self.limit {
            self.heapify_down(position);
            self.heapify_up(position);
        }
        true
    }

    /// Whether `index` is on the heap.
    pub fn is_active(&self, index: usize) -> bool {
        matches!(self.position_in_heap.get(index), Some(Some(_)))
    }

    /// The maximum index on the heap.
    pub fn peek_max(&self) -> Option<usize> {
        match self.limit {
            0 => None,
            _ => Some(self.heap[0]),
        }
    }

    /// The value of the maximum index on the heap.
    pub fn peek_max_value(&self) -> Option<&V> {
        self.peek_max().map(|index| &self.values[index])
    }

    /// Removes and returns the maximum index on the heap.
    pub fn pop_max(&mut self) -> Option<usize> {
        let max = self.peek_max()?;
        self.remove(max);
        Some(max)
    }

    /// The value of `index`, if indexed.
    pub fn value_at(&self, index: usize) -> Option<&V> {
        self.values.get(index)
    }

    /// Sets the value of `index` to `value`, without repairing the heap.
    pub fn revalue(&mut self, index: usize, value: V) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value;
        }
    }

    /// Repairs the heap around `index`, if `index` is on the heap.
    pub fn heapify_if_active(&mut self, index: usize) {
        if let Some(Some(position)) = self.position_in_heap.get(index).copied() {
            self.heapify_up(position);
            self.heapify_down(position);
        }
    }

    /// Repairs the whole heap.
    pub fn heapify(&mut self) {
        for position in (0..self.limit / 2).rev() {
            self.heapify_down(position);
        }
    }

    /// Applies `f` to every indexed value, without repairing the heap.
    pub fn apply_to_all(&mut self, f: impl Fn(&V) -> V) {
        for value in self.values.iter_mut() {
            *value = f(value);
        }
    }

    /// A count of indexed values.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// A count of indices on the heap.
    pub fn active_count(&self) -> usize {
        self.limit
    }
}

impl<V: PartialOrd + Default + Clone> IndexHeap<V> {
    /// Whether the index at heap position `a` belongs above the index at heap position `b`.
    fn above(&self, a: usize, b: usize) -> bool {
        let (index_a, index_b) = (self.heap[a], self.heap[b]);
        let (value_a, value_b) = (&self.values[index_a], &self.values[index_b]);
        value_a > value_b || (value_a == value_b && index_a < index_b)
    }

    /// Swaps the indices at heap positions `a` and `b`.
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position_in_heap[self.heap[a]] = Some(a);
        self.position_in_heap[self.heap[b]] = Some(b);
    }

    fn heapify_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if !self.above(position, parent) {
                break;
            }
            self.swap(position, parent);
            position = parent;
        }
    }

    fn heapify_down(&mut self, mut position: usize) {
        loop {
            let left = (2 * position) + 1;
            let right = left + 1;

            let mut update = position;
            if left < self.limit && self.above(left, update) {
                update = left;
            }
            if right < self.limit && self.above(right, update) {
                update = right;
            }

            if update == position {
                break;
            }
            self.swap(position, update);
            position = update;
        }
    }
}
