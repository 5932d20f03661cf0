//! Indexed binary min-heap.
//!
//! Variables:
//!   data : Vec<(usize, P)>    = heap array of (key, priority), 0-indexed
//!   pos  : Vec<Option<usize>> = slot of each key in data, None if absent
//!   N    : usize              = current size
//!
//! Equations:
//!   parent(i)     = (i - 1) / 2
//!   left_child(i) = 2*i + 1
//!   right_child(i)= 2*i + 2
//!
//!   Heap invariant:  data[parent(i)].1 <= data[i].1   for all i > 0
//!   Index invariant: pos[data[i].0] == Some(i)        for all i < N
//!
//!   insert(k, p):   data[N] = (k, p),  sift_up(N),     N' = N+1   O(log N)
//!   extract_min():  swap(0, N-1),  N' = N-1, sift_down(0)         O(log N)
//!   decrease(k, p): if p < data[pos[k]].1 { data[pos[k]].1 = p; sift_up(pos[k]) }
//!
//! Keys are dense vertex indices in [0, capacity).

pub struct IndexedMinHeap<P> {
    data: Vec<(usize, P)>,
    pos: Vec<Option<usize>>,
}

impl<P: Ord + Copy> IndexedMinHeap<P> {
    /// Empty heap able to hold keys `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            pos: vec![None; capacity],
        }
    }

    /// Insert `key` with `priority`. A key that is already queued has its
    /// priority replaced and is moved to its new slot.
    pub fn insert(&mut self, key: usize, priority: P) {
        if key >= self.pos.len() {
            self.pos.resize(key + 1, None);
        }
        if let Some(i) = self.pos[key] {
            let old = self.data[i].1;
            self.data[i].1 = priority;
            if priority < old {
                self.sift_up(i);
            } else {
                self.sift_down(i);
            }
            return;
        }
        self.data.push((key, priority));
        let last = self.data.len() - 1;
        self.pos[key] = Some(last);
        self.sift_up(last);
    }

    pub fn extract_min(&mut self) -> Option<(usize, P)> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.swap(0, last);
        let min = self.data.pop();
        if let Some((key, _)) = min {
            self.pos[key] = None;
        }
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// Lower the priority of `key` to `priority`.
    ///
    /// No-op when the key is not queued (already extracted or never
    /// inserted) or when `priority` is not strictly smaller.
    pub fn decrease(&mut self, key: usize, priority: P) -> bool {
        let Some(i) = self.pos.get(key).copied().flatten() else {
            return false;
        };
        if priority >= self.data[i].1 {
            return false;
        }
        self.data[i].1 = priority;
        self.sift_up(i);
        true
    }

    pub fn peek_min(&self) -> Option<&(usize, P)> {
        self.data.first()
    }
    pub fn contains(&self, key: usize) -> bool {
        matches!(self.pos.get(key), Some(Some(_)))
    }
    pub fn priority(&self, key: usize) -> Option<P> {
        let i = self.pos.get(key).copied().flatten()?;
        Some(self.data[i].1)
    }
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.pos[self.data[a].0] = Some(a);
        self.pos[self.data[b].0] = Some(b);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = (i - 1) / 2;
            if self.data[p].1 <= self.data[i].1 {
                break;
            }
            self.swap(p, i);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.data.len();
        loop {
            let mut smallest = i;
            let l = 2 * i + 1;
            let r = 2 * i + 2;
            if l < n && self.data[l].1 < self.data[smallest].1 {
                smallest = l;
            }
            if r < n && self.data[r].1 < self.data[smallest].1 {
                smallest = r;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(heap: &mut IndexedMinHeap<i64>) -> Vec<(usize, i64)> {
        let mut out = Vec::new();
        while let Some(entry) = heap.extract_min() {
            out.push(entry);
        }
        out
    }

    #[test]
    fn extracts_in_priority_order() {
        let mut heap = IndexedMinHeap::with_capacity(6);
        for (key, priority) in [(0, 9), (1, 3), (2, 7), (3, 1), (4, 5), (5, 3)] {
            heap.insert(key, priority);
        }
        let priorities: Vec<i64> = drain(&mut heap).into_iter().map(|(_, p)| p).collect();
        assert_eq!(priorities, vec![1, 3, 3, 5, 7, 9]);
        assert!(heap.is_empty());
    }

    #[test]
    fn extract_from_empty_is_none() {
        let mut heap: IndexedMinHeap<i64> = IndexedMinHeap::with_capacity(0);
        assert_eq!(heap.extract_min(), None);
    }

    #[test]
    fn decrease_moves_key_to_root() {
        let mut heap = IndexedMinHeap::with_capacity(4);
        heap.insert(0, 10);
        heap.insert(1, 20);
        heap.insert(2, 30);
        assert!(heap.decrease(2, 5));
        assert_eq!(heap.peek_min(), Some(&(2, 5)));
        assert_eq!(heap.priority(2), Some(5));
    }

    #[test]
    fn decrease_ignores_larger_priority_and_absent_key() {
        let mut heap = IndexedMinHeap::with_capacity(3);
        heap.insert(0, 4);
        assert!(!heap.decrease(0, 8));
        assert!(!heap.decrease(1, 1));
        assert!(!heap.decrease(99, 1));
        assert_eq!(heap.priority(0), Some(4));
        assert_eq!(heap.extract_min(), Some((0, 4)));
        assert!(!heap.decrease(0, 0), "extracted keys are no longer queued");
    }

    #[test]
    fn reinsert_replaces_instead_of_duplicating() {
        let mut heap = IndexedMinHeap::with_capacity(2);
        heap.insert(0, 4);
        heap.insert(1, 2);
        heap.insert(0, 1);
        assert_eq!(heap.len(), 2);
        heap.insert(0, 6);
        assert_eq!(drain(&mut heap), vec![(1, 2), (0, 6)]);
    }

    #[test]
    fn index_tracks_every_swap() {
        let mut heap = IndexedMinHeap::with_capacity(64);
        let mut seed = 7u64;
        for key in 0..64 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            heap.insert(key, (seed >> 33) as i64 % 1000);
        }
        for key in (0..64).step_by(3) {
            heap.decrease(key, -(key as i64));
        }
        let drained = drain(&mut heap);
        assert_eq!(drained.len(), 64);
        assert!(drained.windows(2).all(|w| w[0].1 <= w[1].1));
        assert!((0..64).all(|k| !heap.contains(k)));
    }
}
