use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed number of content panes allocated at startup.
pub const MAX_PANES: usize = 4;

/// Default endpoint of the local log ingest server.
pub const DEFAULT_INGEST_URL: &str = "http://127.0.0.1:8787/log";

/// A rectangle in window pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether two rectangles share any interior area.
    pub fn overlaps(&self, other: &Rect) -> bool {
        (self.x as i64) < other.right()
            && (other.x as i64) < self.right()
            && (self.y as i64) < other.bottom()
            && (other.y as i64) < self.bottom()
    }
}

/// Window inner size in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Stable index of a content pane, `0..MAX_PANES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaneIndex(pub usize);

impl PaneIndex {
    /// Returns `None` when `index` is outside the fixed pane range.
    pub fn checked(index: usize) -> Option<Self> {
        (index < MAX_PANES).then_some(Self(index))
    }

    /// Clamp any signed index into `0..MAX_PANES`.
    pub fn clamped(index: i64) -> Self {
        Self(index.clamp(0, MAX_PANES as i64 - 1) as usize)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for PaneIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pane-{}", self.0)
    }
}
