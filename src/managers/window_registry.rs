//! In-memory registry of tracked windows.
//!
//! Pure bookkeeping: handles are stored as given and never checked for
//! liveness.

/// One tracked window.
#[derive(Debug, Clone)]
pub struct RegistryEntry<H> {
    pub id: String,
    pub name: String,
    pub handle: H,
}

/// Trait defining the registry interface.
pub trait WindowRegistryTrait<H> {
    /// Inserts or replaces the entry for `id`.
    fn put(&mut self, id: &str, name: &str, handle: H);
    fn get(&self, id: &str) -> Option<&H>;
    fn remove(&mut self, id: &str) -> Option<H>;
    fn all(&self) -> Vec<&H>;
    /// First entry whose name matches.
    fn find_by_name(&self, name: &str) -> Option<&H>;
}

/// Registry implementation over a vector.
///
/// Window counts are small; lookups scan linearly.
#[derive(Debug, Clone)]
pub struct WindowRegistry<H> {
    entries: Vec<RegistryEntry<H>>,
}

impl<H> WindowRegistry<H> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn entry(&self, id: &str) -> Option<&RegistryEntry<H>> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entries(&self) -> &[RegistryEntry<H>] {
        &self.entries
    }

    pub fn ids(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H> Default for WindowRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> WindowRegistryTrait<H> for WindowRegistry<H> {
    fn put(&mut self, id: &str, name: &str, handle: H) {
        let entry = RegistryEntry {
            id: id.to_string(),
            name: name.to_string(),
            handle,
        };
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    fn get(&self, id: &str) -> Option<&H> {
        self.entry(id).map(|e| &e.handle)
    }

    fn remove(&mut self, id: &str) -> Option<H> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index).handle)
    }

    fn all(&self) -> Vec<&H> {
        self.entries.iter().map(|e| &e.handle).collect()
    }

    fn find_by_name(&self, name: &str) -> Option<&H> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.handle)
    }
}
