use nalgebra::Point3;
use std::collections::HashMap;

/// One geometry snapshot: atom keys mapped to Cartesian positions in Angstroms.
///
/// Atom keys combine the chemical symbol with the label the source file
/// assigned to the atom (e.g. `"C1"`, `"H12"`), and are stable across all
/// snapshots recorded for the same system.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    coords: HashMap<String, Point3<f64>>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an atom position, returning the previous position if the key
    /// was already present.
    pub fn insert(&mut self, key: impl Into<String>, position: Point3<f64>) -> Option<Point3<f64>> {
        self.coords.insert(key.into(), position)
    }

    pub fn position(&self, key: &str) -> Option<&Point3<f64>> {
        self.coords.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.coords.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Atom keys in lexicographic order, for stable textual output.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.coords.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup_round_trip() {
        let mut snapshot = Snapshot::new();
        assert!(snapshot.is_empty());

        snapshot.insert("C1", Point3::new(0.0, 0.0, 0.0));
        snapshot.insert("H2", Point3::new(1.0, 0.0, 0.0));

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.position("C1"), Some(&Point3::new(0.0, 0.0, 0.0)));
        assert!(snapshot.contains("H2"));
        assert_eq!(snapshot.position("O3"), None);
    }

    #[test]
    fn insert_replaces_existing_key_and_returns_old_position() {
        let mut snapshot = Snapshot::new();
        snapshot.insert("C1", Point3::new(0.0, 0.0, 0.0));
        let previous = snapshot.insert("C1", Point3::new(1.0, 1.0, 1.0));

        assert_eq!(previous, Some(Point3::new(0.0, 0.0, 0.0)));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.position("C1"), Some(&Point3::new(1.0, 1.0, 1.0)));
    }

    #[test]
    fn sorted_keys_are_lexicographic() {
        let mut snapshot = Snapshot::new();
        snapshot.insert("H2", Point3::new(0.0, 0.0, 0.0));
        snapshot.insert("C1", Point3::new(0.0, 0.0, 0.0));
        snapshot.insert("C10", Point3::new(0.0, 0.0, 0.0));

        assert_eq!(snapshot.sorted_keys(), vec!["C1", "C10", "H2"]);
    }
}
