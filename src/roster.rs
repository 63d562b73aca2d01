/// Participant names, in the order they were added. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster(Vec<String>);

impl Roster {
    /// Creates a new, empty roster.
    pub fn new() -> Self {
        Roster(Vec::new())
    }

    /// Appends a name to the end of the roster.
    pub fn push(&mut self, name : String) {
        self.0.push(name)
    }

    /// Gets a name based on its index.
    pub fn get(&self, index : usize) -> Option<&String> {
        self.0.get(index)
    }

    /// Returns the number of names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
