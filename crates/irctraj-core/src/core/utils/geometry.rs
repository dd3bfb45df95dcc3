use crate::core::models::snapshot::Snapshot;
use tracing::warn;

/// Euclidean distance in Angstroms between two named atoms of a snapshot.
///
/// A missing atom key yields `f64::NAN` (with a warning naming the key)
/// rather than an error: distance curves and tables must keep flowing past
/// a snapshot that lacks one of the configured atoms.
pub fn distance(snapshot: &Snapshot, atom1: &str, atom2: &str) -> f64 {
    let Some(p1) = snapshot.position(atom1) else {
        warn!(atom = atom1, "atom key not found in snapshot");
        return f64::NAN;
    };
    let Some(p2) = snapshot.position(atom2) else {
        warn!(atom = atom2, "atom key not found in snapshot");
        return f64::NAN;
    };
    (p2 - p1).norm()
}
