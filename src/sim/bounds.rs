//! Axis-aligned bounding boxes
//!
//! Boxes live on the integer pixel grid. Actors keep a fractional `Vec2`
//! position as the source of truth and derive their box from it by
//! truncating toward zero, so a box never drifts from its position.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// An integer axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box of the given size whose top-left is the truncated position
    #[inline]
    pub fn at(position: Vec2, size: IVec2) -> Self {
        Self::new(position.x as i32, position.y as i32, size.x, size.y)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Move the box so its left edge sits at `left`
    #[inline]
    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    /// Move the box so its right edge sits at `right`
    #[inline]
    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.width;
    }

    /// Move the box so its top edge sits at `top`
    #[inline]
    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    /// Move the box so its bottom edge sits at `bottom`
    #[inline]
    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.height;
    }

    /// Center point (integer halves, rounded toward the top-left)
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.x + self.width / 2) as f32,
            (self.y + self.height / 2) as f32,
        )
    }

    /// Check for overlap with another box
    ///
    /// Boxes that only share an edge do not intersect, and an empty box
    /// never intersects anything.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        if self.width <= 0 || self.height <= 0 || other.width <= 0 || other.height <= 0 {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
