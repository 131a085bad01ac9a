use heapless::Vec;
use portable_atomic::{AtomicU32, Ordering};

/// Source of per-slab owner tags.
static NEXT_OWNER: AtomicU32 = AtomicU32::new(0);

/// Identifies a chip handle stored in a [`Slab`].
///
/// An id is only valid in the slab that issued it, and only until the handle
/// it names is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandleId {
    owner: u32,
    index: usize,
    generation: u32,
}

struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Fixed-capacity storage for chip handles.
///
/// Freed slots are reused before new ones are appended. Allocation fails once
/// all `N` slots hold a value.
pub struct Slab<T, const N: usize> {
    owner: u32,
    slots: Vec<Slot<T>, N>,
    len: usize,
}

impl<T, const N: usize> Default for Slab<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Slab<T, N> {
    pub fn new() -> Self {
        Self {
            owner: NEXT_OWNER.fetch_add(1, Ordering::Relaxed),
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Store `value`, returning its id and a borrow of the stored handle.
    ///
    /// Hands `value` back if every slot is taken.
    pub fn insert(&mut self, value: T) -> Result<(HandleId, &mut T), T> {
        let index = match self.slots.iter().position(|s| s.value.is_none()) {
            Some(index) => index,
            None => {
                let slot = Slot { generation: 0, value: None };
                if self.slots.push(slot).is_err() {
                    return Err(value);
                }
                self.slots.len() - 1
            }
        };

        self.len += 1;
        let slot = &mut self.slots[index];
        let id = HandleId {
            owner: self.owner,
            index,
            generation: slot.generation,
        };
        Ok((id, slot.value.insert(value)))
    }

    pub fn remove(&mut self, id: HandleId) -> Option<T> {
        let slot = self.slot_mut(id)?;
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.len -= 1;
        Some(value)
    }

    /// Whether `id` was issued here and still names a stored handle.
    pub fn contains(&self, id: HandleId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: HandleId) -> Option<&T> {
        if id.owner != self.owner {
            return None;
        }
        let slot = self.slots.get(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.value.as_ref()
    }

    pub fn get_mut(&mut self, id: HandleId) -> Option<&mut T> {
        self.slot_mut(id)?.value.as_mut()
    }

    fn slot_mut(&mut self, id: HandleId) -> Option<&mut Slot<T>> {
        if id.owner != self.owner {
            return None;
        }
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}
