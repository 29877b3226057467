use indexmap::IndexMap;
use std::fmt;

/// Named 32-bit cells, in first-seen order. A variable's position in the
/// table is its slot index, which is also its address: `LDR Rn, =name` puts
/// the slot index into `Rn`, and `[Rk]` operands look it up again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vars(IndexMap<String, i32>);

impl Vars {
    pub fn new() -> Self {
        Vars(IndexMap::new())
    }

    /// Slot of `name`, created with value 0 if it does not exist yet.
    pub fn slot(&mut self, name: &str) -> usize {
        match self.0.get_index_of(name) {
            Some(idx) => idx,
            None => self.0.insert_full(name.to_string(), 0).0,
        }
    }

    /// Declares `name` if needed and assigns `value`. Returns its slot.
    pub fn set(&mut self, name: &str, value: i32) -> usize {
        let slot = self.slot(name);
        self.0[slot] = value;
        slot
    }

    pub fn get(&self, name: &str) -> Option<i32> {
        self.0.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// `None` for negative or out of range slots.
    pub fn get_slot(&self, slot: i32) -> Option<i32> {
        let slot = usize::try_from(slot).ok()?;
        self.0.get_index(slot).map(|(_, val)| *val)
    }

    /// Returns false, and changes nothing, when the slot does not exist.
    pub fn set_slot(&mut self, slot: i32, value: i32) -> bool {
        let Ok(slot) = usize::try_from(slot) else {
            return false;
        };
        match self.0.get_index_mut(slot) {
            Some((_, val)) => {
                *val = value;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.0.iter().map(|(name, val)| (name.as_str(), *val))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Vars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, val) in self.iter() {
            writeln!(f, "{} = {}", name, val)?;
        }
        Ok(())
    }
}
