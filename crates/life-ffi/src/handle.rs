//! Generation-checked handle table for core instances owned by foreign code.
//!
//! A handle packs a slot index (upper 32 bits) and the slot's generation
//! (lower 32 bits). Removing an entry bumps the generation, so a destroyed
//! handle never resolves again, even after its slot is reused.

fn pack(slot: u32, generation: u32) -> u64 {
    (u64::from(slot) << 32) | u64::from(generation)
}

fn unpack(handle: u64) -> (usize, u32) {
    ((handle >> 32) as usize, handle as u32)
}

struct Entry<T> {
    generation: u32,
    value: Option<T>,
}

/// Owned values addressed by opaque `u64` handles.
pub(crate) struct HandleTable<T> {
    entries: Vec<Entry<T>>,
    vacant: Vec<u32>,
}

impl<T> HandleTable<T> {
    /// An empty table, usable in a `static`.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            vacant: Vec::new(),
        }
    }

    /// Store `value`. Returns `None` once every slot index is exhausted.
    pub fn insert(&mut self, value: T) -> Option<u64> {
        if let Some(slot) = self.vacant.pop() {
            let entry = &mut self.entries[slot as usize];
            entry.value = Some(value);
            return Some(pack(slot, entry.generation));
        }
        let slot = u32::try_from(self.entries.len()).ok()?;
        self.entries.push(Entry {
            generation: 0,
            value: Some(value),
        });
        Some(pack(slot, 0))
    }

    /// The value behind `handle`, if it is still live.
    pub fn get(&self, handle: u64) -> Option<&T> {
        let (slot, generation) = unpack(handle);
        let entry = self.entries.get(slot)?;
        if entry.generation != generation {
            return None;
        }
        entry.value.as_ref()
    }

    /// Take the value behind `handle` out of the table.
    ///
    /// Stale and unknown handles return `None`, so a double destroy is
    /// harmless. A slot whose generation wraps back to zero is retired
    /// rather than reused, so no stale handle can ever match it again.
    pub fn remove(&mut self, handle: u64) -> Option<T> {
        let (slot, generation) = unpack(handle);
        let entry = self.entries.get_mut(slot)?;
        if entry.generation != generation {
            return None;
        }
        let value = entry.value.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        if entry.generation != 0 {
            // `slot` came from a packed u32, so it fits.
            self.vacant.push(slot as u32);
        }
        Some(value)
    }

    /// Number of live values.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.value.is_some()).count()
    }
}
