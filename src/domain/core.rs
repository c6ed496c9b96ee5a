//! Core domain types and operations
//!
//! This module defines pure geometry types for the keyboard window. They have
//! no knowledge of Win32; the platform layer converts into them.

/// Raw window edges as reported by the OS (`RECT`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowEdges {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl WindowEdges {
    /// Creates a new set of edges
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// Rectangle in screen pixel coordinates (position + size)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// The empty rectangle, returned whenever the keyboard is closed or unknown
    pub const EMPTY: Rect = Rect {
        x: 0,
        y: 0,
        w: 0,
        h: 0,
    };

    /// Creates a new rectangle
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Converts OS window edges treating both edges as inclusive
    ///
    /// The keyboard rectangle has always been reported with `right - left + 1`
    /// width and `bottom - top + 1` height; callers depend on that. Edges
    /// spanning the whole `i32` range wrap rather than panic.
    pub fn from_inclusive_edges(edges: WindowEdges) -> Self {
        Self {
            x: edges.left,
            y: edges.top,
            w: edges.right.wrapping_sub(edges.left).wrapping_add(1),
            h: edges.bottom.wrapping_sub(edges.top).wrapping_add(1),
        }
    }

    /// Returns true if this is the all-zero rectangle
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Returns the right edge coordinate, saturating at `i32::MAX`
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// Returns the bottom edge coordinate, saturating at `i32::MAX`
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Returns the intersection of two rectangles, or None if they don't intersect
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        // Edges are compared in i64 so rectangles near the i32 limits still work
        let left = i64::from(self.x.max(other.x));
        let top = i64::from(self.y.max(other.y));
        let right = (i64::from(self.x) + i64::from(self.w)).min(i64::from(other.x) + i64::from(other.w));
        let bottom = (i64::from(self.y) + i64::from(self.h)).min(i64::from(other.y) + i64::from(other.h));

        if left < right && top < bottom {
            Some(Rect::new(
                left as i32,
                top as i32,
                i32::try_from(right - left).unwrap_or(i32::MAX),
                i32::try_from(bottom - top).unwrap_or(i32::MAX),
            ))
        } else {
            None
        }
    }
}
