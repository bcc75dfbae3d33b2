//! Static catalog store.
//!
//! # Design Decisions
//! - Entries are fixed at compile time; there is no insert/update/delete
//! - A miss is not an error: lookups return Option, never fail the request
//! - Random selection uses a non-cryptographic source (fastrand)

/// The seed entries. Every key carries an `isbn-` or `imdb-` prefix.
const ENTRIES: [(&str, &str); 3] = [
    ("isbn-9781529046137", "The Hitchhiker's Guide to the Galaxy"),
    ("imdb-tt0371724", "The Hitchhiker's Guide to the Galaxy"),
    ("isbn-9781439512982", "Isaac Asimov: The Complete Stories, Vol. 2"),
];

/// Immutable identifier → title mapping, shared read-only by handlers.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [(&'static str, &'static str)],
}

impl Catalog {
    /// Create the catalog with its fixed seed entries.
    pub fn with_defaults() -> Self {
        Self { entries: &ENTRIES }
    }

    /// Look up a title by identifier. A miss returns None.
    pub fn get(&self, id: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, title)| *title)
    }

    /// Pick one entry uniformly at random.
    ///
    /// The catalog is never empty: `with_defaults` is the only constructor
    /// and always seeds three entries.
    pub fn random_entry(&self) -> (&'static str, &'static str) {
        self.entries[fastrand::usize(..self.entries.len())]
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_known_keys() {
        let catalog = Catalog::with_defaults();
        assert_eq!(
            catalog.get("isbn-9781529046137"),
            Some("The Hitchhiker's Guide to the Galaxy")
        );
        assert_eq!(
            catalog.get("imdb-tt0371724"),
            Some("The Hitchhiker's Guide to the Galaxy")
        );
        assert_eq!(
            catalog.get("isbn-9781439512982"),
            Some("Isaac Asimov: The Complete Stories, Vol. 2")
        );
    }

    #[test]
    fn test_get_missing_key() {
        let catalog = Catalog::with_defaults();
        assert_eq!(catalog.get("isbn-0000000000000"), None);
        assert_eq!(catalog.get(""), None);
    }

    #[test]
    fn test_random_entry_comes_from_catalog() {
        let catalog = Catalog::with_defaults();
        for _ in 0..32 {
            let (id, title) = catalog.random_entry();
            assert_eq!(catalog.get(id), Some(title));
        }
    }

    #[test]
    fn test_len() {
        assert_eq!(Catalog::with_defaults().len(), 3);
        assert!(!Catalog::with_defaults().is_empty());
    }
}
