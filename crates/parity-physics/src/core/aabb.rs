//! Axis-aligned bounding boxes and the per-axis sweep used by collision
//! resolution.
//!
//! `max_offset` is the primitive everything else builds on: given a block box
//! and a moving box, how far can the moving box travel along one axis before
//! the faces touch. The perpendicular overlap test uses open intervals, so
//! boxes that merely share a face do not obstruct each other.

use glam::{DVec3, IVec3};

/// One of the three world axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn next(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    pub fn previous(self) -> Axis {
        match self {
            Axis::X => Axis::Z,
            Axis::Y => Axis::X,
            Axis::Z => Axis::Y,
        }
    }

    /// Extract this axis' component from a vector.
    pub fn of(self, v: DVec3) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}

/// Block coordinate range covered by a span along one axis.
///
/// `floor(min) .. ceil(max)`, exclusive at the top.
pub fn block_range(min: f64, max: f64) -> std::ops::Range<i32> {
    (min.floor() as i32)..(max.ceil() as i32)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    /// The unit cube at the origin.
    pub const FULL_BLOCK: Aabb = Aabb {
        min: DVec3::ZERO,
        max: DVec3::ONE,
    };

    pub fn new(min: DVec3, max: DVec3) -> Aabb {
        Aabb {
            min: min.min(max),
            max: max.max(min),
        }
    }

    pub fn from_coords(min_x: f64, min_y: f64, min_z: f64, max_x: f64, max_y: f64, max_z: f64) -> Aabb {
        Aabb::new(
            DVec3::new(min_x, min_y, min_z),
            DVec3::new(max_x, max_y, max_z),
        )
    }

    pub fn offset(&self, by: DVec3) -> Aabb {
        Aabb {
            min: self.min + by,
            max: self.max + by,
        }
    }

    /// Stretch the box to cover everything it would sweep through when moved.
    pub fn extend(&self, movement: DVec3) -> Aabb {
        let mut min = self.min;
        let mut max = self.max;
        if movement.x < 0.0 {
            min.x += movement.x;
        } else {
            max.x += movement.x;
        }
        if movement.y < 0.0 {
            min.y += movement.y;
        } else {
            max.y += movement.y;
        }
        if movement.z < 0.0 {
            min.z += movement.z;
        } else {
            max.z += movement.z;
        }
        Aabb { min, max }
    }

    pub fn grow(&self, size: f64) -> Aabb {
        Aabb::new(self.min - size, self.max + size)
    }

    pub fn shrink(&self, size: f64) -> Aabb {
        self.grow(-size)
    }

    /// Strict overlap test: face contact does not count as intersection.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    /// Whether a block position falls inside the box's block coverage.
    pub fn contains_block(&self, position: IVec3) -> bool {
        block_range(self.min.x, self.max.x).contains(&position.x)
            && block_range(self.min.y, self.max.y).contains(&position.y)
            && block_range(self.min.z, self.max.z).contains(&position.z)
    }

    /// All block positions the box covers.
    pub fn blocks(&self) -> BlockIter {
        BlockIter::new(self)
    }

    /// Translate the box in place along one axis.
    pub fn translate_axis(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => {
                self.min.x += value;
                self.max.x += value;
            }
            Axis::Y => {
                self.min.y += value;
                self.max.y += value;
            }
            Axis::Z => {
                self.min.z += value;
                self.max.z += value;
            }
        }
    }

    fn span(&self, axis: Axis) -> (f64, f64) {
        (axis.of(self.min), axis.of(self.max))
    }

    /// Open-interval overlap on one axis, with exact coincidence counting.
    fn axis_intersects(&self, axis: Axis, other: &Aabb) -> bool {
        fn inside(value: f64, min: f64, max: f64) -> bool {
            value > min && value < max
        }

        let (min, max) = self.span(axis);
        let (other_min, other_max) = other.span(axis);

        inside(min, other_min, other_max)
            || inside(max, other_min, other_max)
            || inside(other_min, min, max)
            || inside(other_max, min, max)
            || (min == other_min && max == other_max)
    }

    /// Clamp `offset` so that `other` moved along `axis` stops at this box.
    ///
    /// Returns `offset` unchanged when the boxes cannot meet (no overlap on
    /// both perpendicular axes, or `other` is not approaching from the
    /// relevant side).
    pub fn max_offset(&self, other: &Aabb, offset: f64, axis: Axis) -> f64 {
        if !self.axis_intersects(axis.next(), other) || !self.axis_intersects(axis.previous(), other) {
            return offset;
        }
        let (min, max) = self.span(axis);
        let (other_min, other_max) = other.span(axis);

        if offset > 0.0 && other_max <= min && other_max + offset > min {
            return (min - other_max).clamp(0.0, offset);
        }
        if offset < 0.0 && max <= other_min && other_min + offset < max {
            return (max - other_min).clamp(offset, 0.0);
        }

        offset
    }
}

/// Iterator over the block positions inside a box, x-major.
pub struct BlockIter {
    min: IVec3,
    max: IVec3, // exclusive
    cursor: IVec3,
}

impl BlockIter {
    fn new(aabb: &Aabb) -> BlockIter {
        let x = block_range(aabb.min.x, aabb.max.x);
        let y = block_range(aabb.min.y, aabb.max.y);
        let z = block_range(aabb.min.z, aabb.max.z);
        let min = IVec3::new(x.start, y.start, z.start);
        let max = IVec3::new(x.end, y.end, z.end);
        BlockIter {
            min,
            max,
            cursor: min,
        }
    }
}

impl Iterator for BlockIter {
    type Item = IVec3;

    fn next(&mut self) -> Option<IVec3> {
        if self.cursor.x >= self.max.x || self.cursor.y >= self.max.y || self.cursor.z >= self.max.z {
            return None;
        }
        let position = self.cursor;
        self.cursor.z += 1;
        if self.cursor.z >= self.max.z {
            self.cursor.z = self.min.z;
            self.cursor.y += 1;
            if self.cursor.y >= self.max.y {
                self.cursor.y = self.min.y;
                self.cursor.x += 1;
                if self.cursor.x >= self.max.x {
                    // exhaust
                    self.cursor = self.max;
                }
            }
        }
        Some(position)
    }
}
