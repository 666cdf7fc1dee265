use rustc_hash::FxHashMap;

/// Opaque reference to a material owned by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub u32);

/// Name-interned material table. Ids are stable for the library's lifetime.
#[derive(Debug, Default)]
pub struct MaterialLibrary {
    by_name: FxHashMap<String, MaterialId>,
    names: Vec<String>,
}

impl MaterialLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, name: &str) -> MaterialId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = MaterialId(self.names.len() as u32);
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), id);
        tracing::debug!(name, id = id.0, "material registered");
        id
    }

    pub fn get(&self, name: &str) -> Option<MaterialId> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, id: MaterialId) -> Option<&str> {
        self.names.get(id.0 as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
