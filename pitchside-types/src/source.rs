/// Canonical identifier for a registered data source.
///
/// Wraps the source's static name so that priority lists, the disabled set,
/// and health reports all agree on the same key without stringly-typed
/// comparisons scattered across call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceKey(&'static str);

impl SourceKey {
    /// Build a key from a source's static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The underlying static name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for SourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}
