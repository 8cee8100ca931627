/// Reserved placeholder naming the output file.
pub const CLASS_NAME: &str = "ClassName";

/// Reserved placeholder filled with the current year and hidden from editing.
pub const YEAR: &str = "Year";

/// Insertion-ordered placeholder table.
///
/// Keys are fixed once parsing finishes; only values change afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    entries: Vec<(String, String)>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key` with `value` unless it is already present.
    ///
    /// Returns `true` when the key was newly added.
    pub fn register(&mut self, key: &str, value: impl Into<String>) -> bool {
        if self.contains(key) {
            return false;
        }
        self.entries.push((key.to_string(), value.into()));
        true
    }

    /// Overwrite the value of an existing key. Unknown keys are left untouched.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys a user may edit, in registration order.
    pub fn editable_keys(&self) -> impl Iterator<Item = &str> {
        self.keys().filter(|key| is_editable(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether a placeholder is exposed for user editing.
pub fn is_editable(key: &str) -> bool {
    key != YEAR
}
