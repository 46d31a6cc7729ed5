/// One English idiom and its Vietnamese translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdiomRecord {
    pub id: u32,
    pub english: String,
    pub vietnamese: String,
}

impl IdiomRecord {
    pub fn new(id: u32, english: impl Into<String>, vietnamese: impl Into<String>) -> Self {
        Self {
            id,
            english: english.into(),
            vietnamese: vietnamese.into(),
        }
    }

    /// Case-insensitive substring match against both languages.
    ///
    /// `needle` must already be lower-cased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.english.to_lowercase().contains(needle) || self.vietnamese.to_lowercase().contains(needle)
    }
}
