//! The centipede as an ordered chain of body segments
//!
//! Segments are stored head first. A segment's head neighbour is the one
//! before it and its tail neighbour the one after it, so the links can never
//! disagree and every chain has exactly one head and one tail. Splitting a
//! chain hands back a second, fully independent chain.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Direction, Point, Vector};

/// One body segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub position: Point,
    pub speed: Vector,
    pub direction: Direction,
    /// Drawn above overlapping obstacles when set
    pub is_above: bool,
}

impl Segment {
    pub fn new(position: Point, speed: Vector, direction: Direction) -> Self {
        Self {
            position,
            speed,
            direction,
            is_above: false,
        }
    }

    pub fn toggle_above(&mut self) {
        self.is_above = !self.is_above;
    }

    /// Advance the position by `speed * dt`
    pub fn step(&mut self, dt: f32) {
        self.position = self.position + self.speed * dt;
    }

    /// Head in `direction`, keeping the current speed magnitude
    pub fn turn(&mut self, direction: Direction) {
        let magnitude = self.speed.length();
        self.direction = direction;
        self.speed = direction.unit() * magnitude;
    }

}

/// Rejected chain construction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChainError {
    #[error("a centipede needs at least one segment")]
    Empty,
    #[error("segment radius must be finite and positive, got {0}")]
    InvalidRadius(f32),
}

fn check_radius(segment_radius: f32) -> Result<(), ChainError> {
    if !(segment_radius.is_finite() && segment_radius > 0.0) {
        return Err(ChainError::InvalidRadius(segment_radius));
    }
    Ok(())
}

/// Per-segment draw data for the textured segment quad
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SegmentInstance {
    pub translation: [f32; 2],
    /// Degrees, counter-clockwise
    pub rotation: f32,
    /// 1 = above obstacles, 0 = below
    pub layer: u32,
}

impl From<&Segment> for SegmentInstance {
    fn from(segment: &Segment) -> Self {
        Self {
            translation: [segment.position.x, segment.position.y],
            rotation: segment.direction.rotation_degrees(),
            layer: segment.is_above as u32,
        }
    }
}

/// What is left after a segment is shot out of a chain
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub destroyed: Segment,
    /// Segments ahead of the destroyed one
    pub front: Option<Centipede>,
    /// Segments behind it, now a chain of their own
    pub back: Option<Centipede>,
}

/// Unchecked serialized form of [`Centipede`]
#[derive(Deserialize)]
struct CentipedeRepr {
    segments: Vec<Segment>,
    segment_radius: f32,
}

impl TryFrom<CentipedeRepr> for Centipede {
    type Error = ChainError;

    fn try_from(repr: CentipedeRepr) -> Result<Self, ChainError> {
        check_radius(repr.segment_radius)?;
        if repr.segments.is_empty() {
            return Err(ChainError::Empty);
        }
        Ok(Self {
            segments: repr.segments,
            segment_radius: repr.segment_radius,
        })
    }
}

/// A non-empty chain of segments, head first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CentipedeRepr")]
pub struct Centipede {
    segments: Vec<Segment>,
    segment_radius: f32,
}

impl Centipede {
    /// A single segment that is both head and tail
    pub fn new(
        position: Point,
        speed: Vector,
        direction: Direction,
        segment_radius: f32,
    ) -> Result<Self, ChainError> {
        Self::from_head(Segment::new(position, speed, direction), segment_radius)
    }

    pub fn from_head(head: Segment, segment_radius: f32) -> Result<Self, ChainError> {
        check_radius(segment_radius)?;
        Ok(Self {
            segments: vec![head],
            segment_radius,
        })
    }

    pub fn segment_radius(&self) -> f32 {
        self.segment_radius
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Never true for a live chain
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Mutable access for the update step; the chain order is unaffected
    pub fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Segment> {
        self.segments.get_mut(index)
    }

    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn head_mut(&mut self) -> &mut Segment {
        &mut self.segments[0]
    }

    pub fn tail(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    /// The segment in front of `index`, `None` for the head
    pub fn head_of(&self, index: usize) -> Option<&Segment> {
        index.checked_sub(1).and_then(|i| self.segments.get(i))
    }

    /// The segment behind `index`, `None` for the tail
    pub fn tail_of(&self, index: usize) -> Option<&Segment> {
        index.checked_add(1).and_then(|i| self.segments.get(i))
    }

    pub fn is_head(&self, index: usize) -> bool {
        index == 0
    }

    pub fn is_tail(&self, index: usize) -> bool {
        index + 1 == self.segments.len()
    }

    /// Append a segment `2 * segment_radius` beyond the tail along `going`
    ///
    /// The new tail copies speed, heading and layer from the old tail.
    pub fn add_tail(&mut self, going: Direction) {
        let tail = *self.tail();
        let offset = going.unit() * (2.0 * self.segment_radius);
        self.segments.push(Segment {
            position: tail.position + offset,
            ..tail
        });
    }

    pub fn add_tails(&mut self, count: usize, going: Direction) {
        self.segments.reserve(count);
        for _ in 0..count {
            self.add_tail(going);
        }
    }

    /// Detach `index..` as a new chain, keeping `..index` here
    ///
    /// Returns `None` when `index` would leave either side empty.
    pub fn split_at(&mut self, index: usize) -> Option<Centipede> {
        if index == 0 || index >= self.segments.len() {
            return None;
        }

        let back = self.segments.split_off(index);
        log::debug!(
            "split centipede into {} + {} segments",
            self.segments.len(),
            back.len()
        );
        Some(Centipede {
            segments: back,
            segment_radius: self.segment_radius,
        })
    }

    /// Detach the head as a singleton chain and promote the next segment
    ///
    /// A one-segment chain has nothing to detach and returns `None`.
    pub fn remove_head(&mut self) -> Option<Centipede> {
        let rest = self.split_at(1)?;
        Some(std::mem::replace(self, rest))
    }

    /// Detach the tail as a singleton chain and promote the one before it
    pub fn remove_tail(&mut self) -> Option<Centipede> {
        self.split_at(self.segments.len() - 1)
    }

    /// Remove the segment at `index`, splitting the chain around it
    ///
    /// Gives the chain back unchanged if `index` is out of range.
    pub fn destroy_segment(mut self, index: usize) -> Result<Hit, Centipede> {
        if index >= self.segments.len() {
            return Err(self);
        }

        let mut back_segments = self.segments.split_off(index);
        let destroyed = back_segments.remove(0);
        let radius = self.segment_radius;
        let chain = |segments: Vec<Segment>| {
            (!segments.is_empty()).then_some(Centipede {
                segments,
                segment_radius: radius,
            })
        };

        log::debug!(
            "segment {} destroyed, {} ahead, {} behind",
            index,
            self.segments.len(),
            back_segments.len()
        );
        Ok(Hit {
            destroyed,
            front: chain(self.segments),
            back: chain(back_segments),
        })
    }

    /// Move every segment by its own speed
    pub fn advance(&mut self, dt: f32) {
        for segment in &mut self.segments {
            segment.step(dt);
        }
    }

    /// Per-segment draw data, head first
    pub fn instances(&self) -> impl Iterator<Item = SegmentInstance> + '_ {
        self.segments.iter().map(SegmentInstance::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: f32 = 8.0;

    fn chain() -> Centipede {
        Centipede::new(Point::ORIGIN, Vector::new(1.0, 0.0), Direction::Right, R).unwrap()
    }

    #[test]
    fn test_rejects_bad_radius() {
        for radius in [0.0, -8.0, f32::NAN, f32::INFINITY] {
            let err = Centipede::new(Point::ORIGIN, Vector::ZERO, Direction::Up, radius);
            assert!(matches!(err, Err(ChainError::InvalidRadius(_))));
        }
    }

    #[test]
    fn test_deserialize_rejects_empty_chain() {
        let json = r#"{"segments":[],"segment_radius":8.0}"#;
        assert!(serde_json::from_str::<Centipede>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_bad_radius() {
        let mut json = serde_json::to_value(chain()).unwrap();
        json["segment_radius"] = serde_json::json!(-1.0);
        assert!(serde_json::from_value::<Centipede>(json).is_err());
    }

    #[test]
    fn test_serde_keeps_chain_usable() {
        let mut c = chain();
        c.add_tails(2, Direction::Right);
        let json = serde_json::to_string(&c).unwrap();
        let mut loaded: Centipede = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, c);
        assert!(loaded.remove_tail().is_some());
        assert_eq!(loaded.head().position, Point::ORIGIN);
    }

    #[test]
    fn test_tail_of_past_end() {
        let c = chain();
        assert_eq!(c.tail_of(0), None);
        assert_eq!(c.tail_of(5), None);
    }

    #[test]
    fn test_new_is_head_and_tail() {
        let c = chain();
        assert_eq!(c.len(), 1);
        assert!(c.is_head(0) && c.is_tail(0));
        assert_eq!(c.head_of(0), None);
        assert_eq!(c.tail_of(0), None);
    }

    #[test]
    fn test_add_tails_grows_in_a_line() {
        let mut c = chain();
        c.head_mut().is_above = true;
        c.add_tails(3, Direction::Right);

        let xs: Vec<f32> = c.segments().iter().map(|s| s.position.x).collect();
        assert_eq!(xs, vec![0.0, 2.0 * R, 4.0 * R, 6.0 * R]);
        assert!(c.segments().iter().all(|s| s.is_above));
        assert!(c.segments().iter().all(|s| s.direction == Direction::Right));

        let heads = (0..c.len()).filter(|&i| c.head_of(i).is_none()).count();
        let tails = (0..c.len()).filter(|&i| c.tail_of(i).is_none()).count();
        assert_eq!((heads, tails), (1, 1));
        assert_eq!(c.head().position.x, 0.0);
        assert_eq!(c.tail().position.x, 6.0 * R);
    }

    #[test]
    fn test_new_tail_inherits_from_current_tail() {
        let mut c = chain();
        c.add_tail(Direction::Down);
        c.get_mut(1).unwrap().toggle_above();
        c.get_mut(1).unwrap().speed = Vector::new(0.0, -3.0);
        c.add_tail(Direction::Down);

        let newest = c.tail();
        assert!(newest.is_above);
        assert_eq!(newest.speed, Vector::new(0.0, -3.0));
        assert_eq!(newest.position, Point::new(0.0, -4.0 * R));
        // Head unaffected by toggling another segment
        assert!(!c.head().is_above);
    }

    #[test]
    fn test_split_at_relinks_both_sides() {
        let mut c = chain();
        c.add_tails(4, Direction::Right);
        let back = c.split_at(2).unwrap();

        assert_eq!(c.len(), 2);
        assert_eq!(back.len(), 3);
        assert_eq!(c.tail().position.x, 2.0 * R);
        assert_eq!(back.head().position.x, 4.0 * R);
        assert_eq!(c.tail_of(1), None);
        assert_eq!(back.head_of(0), None);
        assert_eq!(back.segment_radius(), R);
    }

    #[test]
    fn test_split_at_bounds() {
        let mut c = chain();
        c.add_tail(Direction::Right);
        assert!(c.split_at(0).is_none());
        assert!(c.split_at(2).is_none());
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_remove_head_and_tail() {
        let mut c = chain();
        c.add_tails(2, Direction::Right);

        let old_head = c.remove_head().unwrap();
        assert_eq!(old_head.len(), 1);
        assert_eq!(old_head.head().position.x, 0.0);
        assert_eq!(c.head().position.x, 2.0 * R);

        let old_tail = c.remove_tail().unwrap();
        assert_eq!(old_tail.head().position.x, 4.0 * R);
        assert_eq!(c.len(), 1);

        // Singleton: nothing left to detach
        assert!(c.remove_head().is_none());
        assert!(c.remove_tail().is_none());
    }

    #[test]
    fn test_destroy_segment_middle() {
        let mut c = chain();
        c.add_tails(4, Direction::Right);
        let hit = c.destroy_segment(2).unwrap();

        assert_eq!(hit.destroyed.position.x, 4.0 * R);
        assert_eq!(hit.front.as_ref().map(Centipede::len), Some(2));
        assert_eq!(hit.back.as_ref().map(Centipede::len), Some(2));
        assert_eq!(hit.back.unwrap().head().position.x, 6.0 * R);
    }

    #[test]
    fn test_destroy_only_segment() {
        let hit = chain().destroy_segment(0).unwrap();
        assert!(hit.front.is_none());
        assert!(hit.back.is_none());
    }

    #[test]
    fn test_destroy_out_of_range_returns_chain() {
        let c = chain();
        let back = c.clone().destroy_segment(5).unwrap_err();
        assert_eq!(back, c);
    }

    #[test]
    fn test_turn_keeps_magnitude() {
        let mut s = Segment::new(Point::ORIGIN, Vector::new(3.0, 0.0), Direction::Right);
        s.turn(Direction::Up);
        assert_eq!(s.direction, Direction::Up);
        assert_eq!(s.speed, Vector::new(0.0, 3.0));
        s.step(2.0);
        assert_eq!(s.position, Point::new(0.0, 6.0));
    }

    #[test]
    fn test_instances() {
        let mut c = chain();
        c.add_tail(Direction::Right);
        c.get_mut(1).unwrap().toggle_above();
        let instances: Vec<_> = c.instances().collect();
        assert_eq!(instances[0].rotation, 270.0);
        assert_eq!(instances[0].layer, 0);
        assert_eq!(instances[1].translation, [2.0 * R, 0.0]);
        assert_eq!(instances[1].layer, 1);
    }
}
