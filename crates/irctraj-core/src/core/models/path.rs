use super::snapshot::Snapshot;
use thiserror::Error;

/// Direction of one IRC integration segment relative to the transition state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

/// An ordered run of snapshots from one direction of the IRC integration.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    pub direction: Direction,
    pub snapshots: Vec<Snapshot>,
}

impl PathSegment {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            snapshots: Vec::new(),
        }
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum PathError {
    #[error("no geometries to assemble into a reaction path")]
    NoGeometries,
    #[error("log recorded no reverse-path geometries")]
    MissingReversePath,
    #[error("reverse path holds only the re-emitted transition-state geometry")]
    ReversePathExhausted,
}

/// The full reactant -> transition state -> product sequence for one system.
///
/// Assembled from the two integration segments of an IRC log. The reverse
/// integration re-emits the shared transition-state geometry as its first
/// block; assembly moves that block to the end of the forward segment before
/// stitching `reversed(backward) ++ forward` together.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionPath {
    snapshots: Vec<Snapshot>,
    ts_index: usize,
}

impl ReactionPath {
    /// Assembles a reaction path from raw forward/backward segments,
    /// applying the orientation correction described above.
    ///
    /// Fails when the backward segment is missing entirely or holds nothing
    /// beyond the re-emitted transition state; a silently empty or
    /// one-sided path would misclassify every downstream distance curve.
    pub fn assemble(
        mut forward: PathSegment,
        mut backward: PathSegment,
    ) -> Result<Self, PathError> {
        if forward.is_empty() && backward.is_empty() {
            return Err(PathError::NoGeometries);
        }
        if backward.is_empty() {
            return Err(PathError::MissingReversePath);
        }

        forward.push(backward.snapshots.remove(0));
        if backward.is_empty() {
            return Err(PathError::ReversePathExhausted);
        }

        let ts_index = backward.len();
        let mut snapshots = backward.snapshots;
        snapshots.reverse();
        snapshots.extend(forward.snapshots);

        Ok(Self { snapshots, ts_index })
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The shared endpoint of both integration segments.
    pub fn transition_state(&self) -> &Snapshot {
        &self.snapshots[self.ts_index]
    }

    /// The reactant-side terminus (first point of the ordered path).
    pub fn reactant(&self) -> &Snapshot {
        &self.snapshots[0]
    }

    /// The product-side terminus (last point of the ordered path).
    pub fn product(&self) -> &Snapshot {
        &self.snapshots[self.snapshots.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn snapshot(tag: f64) -> Snapshot {
        let mut s = Snapshot::new();
        s.insert("C1", Point3::new(tag, 0.0, 0.0));
        s
    }

    fn segment(direction: Direction, tags: &[f64]) -> PathSegment {
        let mut seg = PathSegment::new(direction);
        for &tag in tags {
            seg.push(snapshot(tag));
        }
        seg
    }

    #[test]
    fn assemble_applies_orientation_correction() {
        // Forward blocks 0..3 then the reverse integration re-emits the TS
        // (10.0) before walking toward the reactant.
        let forward = segment(Direction::Forward, &[0.0, 1.0, 2.0]);
        let backward = segment(Direction::Backward, &[10.0, 11.0, 12.0]);

        let path = ReactionPath::assemble(forward, backward).unwrap();

        // len == len(forward) + len(backward_raw) - 1
        assert_eq!(path.len(), 3 + 3 - 1);
        assert_eq!(path.transition_state(), &snapshot(0.0));
        assert_eq!(path.reactant(), &snapshot(12.0));
        assert_eq!(path.product(), &snapshot(10.0));
    }

    #[test]
    fn transition_state_sits_at_the_backward_segment_boundary() {
        let forward = segment(Direction::Forward, &[0.0, 1.0]);
        let backward = segment(Direction::Backward, &[10.0, 11.0, 12.0, 13.0]);

        let path = ReactionPath::assemble(forward, backward).unwrap();

        // Index len(backward_raw) - 1 must be the transition state.
        assert_eq!(&path.snapshots()[4 - 1], path.transition_state());
        assert_eq!(path.transition_state(), &snapshot(0.0));
    }

    #[test]
    fn assemble_rejects_empty_input() {
        let forward = PathSegment::new(Direction::Forward);
        let backward = PathSegment::new(Direction::Backward);
        assert!(matches!(
            ReactionPath::assemble(forward, backward),
            Err(PathError::NoGeometries)
        ));
    }

    #[test]
    fn assemble_rejects_missing_reverse_path() {
        let forward = segment(Direction::Forward, &[0.0, 1.0]);
        let backward = PathSegment::new(Direction::Backward);
        assert!(matches!(
            ReactionPath::assemble(forward, backward),
            Err(PathError::MissingReversePath)
        ));
    }

    #[test]
    fn assemble_rejects_backward_segment_emptied_by_the_shift() {
        let forward = segment(Direction::Forward, &[0.0, 1.0]);
        let backward = segment(Direction::Backward, &[10.0]);
        assert!(matches!(
            ReactionPath::assemble(forward, backward),
            Err(PathError::ReversePathExhausted)
        ));
    }

    #[test]
    fn assemble_accepts_an_empty_forward_segment() {
        let forward = PathSegment::new(Direction::Forward);
        let backward = segment(Direction::Backward, &[10.0, 11.0]);

        let path = ReactionPath::assemble(forward, backward).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.transition_state(), &snapshot(10.0));
        assert_eq!(path.product(), &snapshot(10.0));
        assert_eq!(path.reactant(), &snapshot(11.0));
    }
}
