use indexmap::IndexMap;

/// A named set of constants rendered as one exported object
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantGroup {
    pub name: String,
    /// Key to literal text, exactly as it should appear in the output
    /// (`1`, `"SUCCESS"`). Keeps declaration order.
    pub entries: IndexMap<String, String>,
}

impl ConstantGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: IndexMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
