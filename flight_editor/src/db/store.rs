//! Arena-backed doubly-linked store of flight records.
//!
//! Each live record sits in a slot holding `prev`/`next` slot indices. Link
//! symmetry (`a.next == b` iff `b.prev == a`) is checked by index equality in
//! [`FlightStore::is_consistent`]. Deleted slots are recycled; their
//! generation is bumped so that old handles are detected as stale.

use crate::core::domain::FlightRecord;
use crate::core::error::{StoreError, StoreResult};

/// Stable handle to a record in a [`FlightStore`].
///
/// A handle keeps resolving to the same logical record across sorts and
/// other relinking; its position may change. Once the record is deleted the
/// handle is stale and never resolves again, even if the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId {
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone)]
struct Node {
    record: FlightRecord,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Ordered collection owning every live record of an editing session.
///
/// # Example
///
/// ```
/// use flight_editor::db::FlightStore;
/// use flight_editor::core::domain::{DepartureTime, FlightRecord};
///
/// let time = DepartureTime::new(12, 30).unwrap();
/// let mut store = FlightStore::new();
/// store.append(FlightRecord::new("AB 12", "JFK", "LAX", 180, time, 199.99, 0));
/// store.insert_at(0, FlightRecord::new("CD 34", "LAX", "JFK", 150, time, 89.5, 1)).unwrap();
///
/// let numbers: Vec<_> = store.iter().map(|r| r.flight_number.as_str()).collect();
/// assert_eq!(numbers, ["CD 34", "AB 12"]);
/// assert!(store.is_consistent());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlightStore {
    slots: Vec<Slot>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl FlightStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Build a store holding `records` in iteration order.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = FlightRecord>,
    {
        let records = records.into_iter();
        let mut store = Self::with_capacity(records.size_hint().0);
        for record in records {
            store.append(record);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn head(&self) -> Option<RecordId> {
        self.head.map(|idx| self.id_of(idx))
    }

    pub fn tail(&self) -> Option<RecordId> {
        self.tail.map(|idx| self.id_of(idx))
    }

    pub fn get(&self, id: RecordId) -> Option<&FlightRecord> {
        self.node(id).map(|node| &node.record)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.node(id).is_some()
    }

    pub fn next(&self, id: RecordId) -> Option<RecordId> {
        self.node(id)?.next.map(|idx| self.id_of(idx))
    }

    pub fn prev(&self, id: RecordId) -> Option<RecordId> {
        self.node(id)?.prev.map(|idx| self.id_of(idx))
    }

    /// Handle of the record at 0-based `position`, walking from the head.
    pub fn id_at(&self, position: usize) -> Option<RecordId> {
        if position >= self.len {
            return None;
        }
        self.index_at(position).map(|idx| self.id_of(idx))
    }

    pub fn get_at(&self, position: usize) -> Option<&FlightRecord> {
        self.id_at(position).and_then(|id| self.get(id))
    }

    /// Current 0-based position of a live record.
    pub fn position_of(&self, id: RecordId) -> Option<usize> {
        self.node(id)?;
        self.cursor(self.head, true)
            .position(|(candidate, _)| candidate == id)
    }

    /// Link `record` immediately after `anchor`, or at the tail if `anchor`
    /// is the last record.
    ///
    /// # Errors
    ///
    /// [`StoreError::StaleHandle`] if `anchor` is not a live record of this
    /// store; the store is left untouched.
    pub fn insert_after(
        &mut self,
        anchor: RecordId,
        record: FlightRecord,
    ) -> StoreResult<RecordId> {
        let anchor_next = self.node(anchor).ok_or(StoreError::StaleHandle)?.next;
        let idx = self.allocate(record, Some(anchor.index), anchor_next);

        self.set_next(anchor.index, Some(idx));
        match anchor_next {
            Some(next) => self.set_prev(next, Some(idx)),
            None => self.tail = Some(idx),
        }
        self.len += 1;
        Ok(self.id_of(idx))
    }

    /// Insert `record` so that it ends up at 0-based `position`.
    ///
    /// `position == len()` appends.
    ///
    /// # Errors
    ///
    /// [`StoreError::IndexOutOfRange`] if `position > len()`.
    pub fn insert_at(&mut self, position: usize, record: FlightRecord) -> StoreResult<RecordId> {
        if position > self.len {
            return Err(StoreError::IndexOutOfRange {
                index: position,
                len: self.len,
            });
        }

        if position == 0 {
            return Ok(self.push_front(record));
        }

        let anchor = self
            .id_at(position - 1)
            .ok_or(StoreError::IndexOutOfRange {
                index: position,
                len: self.len,
            })?;
        self.insert_after(anchor, record)
    }

    /// Link `record` at the tail.
    pub fn append(&mut self, record: FlightRecord) -> RecordId {
        match self.tail {
            Some(tail) => {
                let idx = self.allocate(record, Some(tail), None);
                self.set_next(tail, Some(idx));
                self.tail = Some(idx);
                self.len += 1;
                self.id_of(idx)
            }
            None => self.push_front(record),
        }
    }

    /// Link `record` at the head.
    pub fn push_front(&mut self, record: FlightRecord) -> RecordId {
        let old_head = self.head;
        let idx = self.allocate(record, None, old_head);

        match old_head {
            Some(head) => self.set_prev(head, Some(idx)),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
        self.id_of(idx)
    }

    /// Unlink and return the record at 0-based `position`.
    ///
    /// # Errors
    ///
    /// [`StoreError::IndexOutOfRange`] if `position >= len()`.
    pub fn delete_at(&mut self, position: usize) -> StoreResult<FlightRecord> {
        let id = self.id_at(position).ok_or(StoreError::IndexOutOfRange {
            index: position,
            len: self.len,
        })?;
        self.remove(id)
    }

    /// Unlink and return the record behind `id`.
    pub fn remove(&mut self, id: RecordId) -> StoreResult<FlightRecord> {
        let (prev, next) = {
            let node = self.node(id).ok_or(StoreError::StaleHandle)?;
            (node.prev, node.next)
        };

        match prev {
            Some(p) => self.set_next(p, next),
            None => self.head = next,
        }
        match next {
            Some(n) => self.set_prev(n, prev),
            None => self.tail = prev,
        }

        let slot = &mut self.slots[id.index];
        let node = slot.node.take().ok_or(StoreError::StaleHandle)?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        Ok(node.record)
    }

    /// Overwrite every attribute of the record at `position` in place.
    ///
    /// The record keeps its handle and its position.
    pub fn update_at(&mut self, position: usize, record: FlightRecord) -> StoreResult<RecordId> {
        let id = self.id_at(position).ok_or(StoreError::IndexOutOfRange {
            index: position,
            len: self.len,
        })?;
        self.update(id, record)?;
        Ok(id)
    }

    /// Overwrite every attribute of the record behind `id` in place.
    pub fn update(&mut self, id: RecordId, record: FlightRecord) -> StoreResult<()> {
        let node = self.node_mut(id).ok_or(StoreError::StaleHandle)?;
        node.record = record;
        Ok(())
    }

    /// Exchange the positions of `a` and its immediate successor `b` by
    /// relinking the nodes. Record contents never move, so handles held
    /// elsewhere keep resolving to the same records.
    ///
    /// # Errors
    ///
    /// [`StoreError::StaleHandle`] if either handle is dead,
    /// [`StoreError::NotAdjacent`] if `b` is not `a`'s successor.
    pub fn swap_adjacent(&mut self, a: RecordId, b: RecordId) -> StoreResult<()> {
        let (before, a_next) = {
            let node = self.node(a).ok_or(StoreError::StaleHandle)?;
            (node.prev, node.next)
        };
        let (b_prev, after) = {
            let node = self.node(b).ok_or(StoreError::StaleHandle)?;
            (node.prev, node.next)
        };
        if a_next != Some(b.index) || b_prev != Some(a.index) {
            return Err(StoreError::NotAdjacent);
        }

        match before {
            Some(p) => self.set_next(p, Some(b.index)),
            None => self.head = Some(b.index),
        }
        match after {
            Some(n) => self.set_prev(n, Some(a.index)),
            None => self.tail = Some(a.index),
        }

        self.set_links(b.index, before, Some(a.index));
        self.set_links(a.index, Some(b.index), after);
        Ok(())
    }

    /// Forward iteration from the head.
    pub fn iter(&self) -> impl Iterator<Item = &FlightRecord> + '_ {
        self.cursor(self.head, true).map(|(_, record)| record)
    }

    /// Forward iteration starting at 0-based `offset`; empty past the tail.
    pub fn iter_from(&self, offset: usize) -> impl Iterator<Item = &FlightRecord> + '_ {
        let start = if offset < self.len {
            self.index_at(offset)
        } else {
            None
        };
        self.cursor(start, true).map(|(_, record)| record)
    }

    /// Backward iteration from the tail.
    pub fn iter_rev(&self) -> impl Iterator<Item = &FlightRecord> + '_ {
        self.cursor(self.tail, false).map(|(_, record)| record)
    }

    /// Forward iteration yielding handles alongside records.
    pub fn entries(&self) -> impl Iterator<Item = (RecordId, &FlightRecord)> + '_ {
        self.cursor(self.head, true)
    }

    /// Snapshot of all records in traversal order.
    pub fn records(&self) -> Vec<FlightRecord> {
        self.iter().cloned().collect()
    }

    /// Check the list structure: symmetric links, head/tail ends, and
    /// forward and backward walks that are exact reverses of length `len`.
    pub fn is_consistent(&self) -> bool {
        let mut forward = Vec::with_capacity(self.len);
        let mut prev: Option<usize> = None;
        let mut cursor = self.head;

        while let Some(idx) = cursor {
            let Some(node) = self.slots.get(idx).and_then(|slot| slot.node.as_ref()) else {
                return false;
            };
            if node.prev != prev || forward.len() > self.len {
                return false;
            }
            forward.push(idx);
            prev = Some(idx);
            cursor = node.next;
        }
        if prev != self.tail || forward.len() != self.len {
            return false;
        }

        let mut backward = Vec::with_capacity(self.len);
        let mut cursor = self.tail;
        while let Some(idx) = cursor {
            if backward.len() > self.len {
                return false;
            }
            backward.push(idx);
            cursor = self
                .slots
                .get(idx)
                .and_then(|slot| slot.node.as_ref())
                .and_then(|node| node.prev);
        }
        backward.reverse();

        let live = self.slots.iter().filter(|slot| slot.node.is_some()).count();
        forward == backward && live == self.len
    }

    fn cursor(&self, start: Option<usize>, forward: bool) -> Cursor<'_> {
        Cursor {
            store: self,
            current: start,
            forward,
        }
    }

    fn id_of(&self, index: usize) -> RecordId {
        RecordId {
            index,
            generation: self.slots[index].generation,
        }
    }

    fn index_at(&self, position: usize) -> Option<usize> {
        let mut cursor = self.head;
        for _ in 0..position {
            cursor = self.slots[cursor?].node.as_ref()?.next;
        }
        cursor
    }

    fn node(&self, id: RecordId) -> Option<&Node> {
        let slot = self.slots.get(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_ref()
    }

    fn node_mut(&mut self, id: RecordId) -> Option<&mut Node> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_mut()
    }

    fn allocate(
        &mut self,
        record: FlightRecord,
        prev: Option<usize>,
        next: Option<usize>,
    ) -> usize {
        let node = Node { record, prev, next };
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx].node = Some(node);
                idx
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                self.slots.len() - 1
            }
        }
    }

    fn set_next(&mut self, index: usize, next: Option<usize>) {
        if let Some(node) = self.slots[index].node.as_mut() {
            node.next = next;
        }
    }

    fn set_prev(&mut self, index: usize, prev: Option<usize>) {
        if let Some(node) = self.slots[index].node.as_mut() {
            node.prev = prev;
        }
    }

    fn set_links(&mut self, index: usize, prev: Option<usize>, next: Option<usize>) {
        if let Some(node) = self.slots[index].node.as_mut() {
            node.prev = prev;
            node.next = next;
        }
    }
}

impl FromIterator<FlightRecord> for FlightStore {
    fn from_iter<I: IntoIterator<Item = FlightRecord>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

struct Cursor<'a> {
    store: &'a FlightStore,
    current: Option<usize>,
    forward: bool,
}

impl<'a> Iterator for Cursor<'a> {
    type Item = (RecordId, &'a FlightRecord);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        let node = self.store.slots[idx].node.as_ref()?;
        self.current = if self.forward { node.next } else { node.prev };
        Some((self.store.id_of(idx), &node.record))
    }
}
