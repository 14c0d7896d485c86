//! Rooms and their hotspots.
//!
//! A room is a flat list of clickable hotspots. Rooms have no exits of their
//! own; the player cycles through them with next/prev.

use crate::action::ActionDescriptor;

/// Background color of a room, from a `0xRRGGBB` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<u32> for RoomColor {
    fn from(hex: u32) -> Self {
        let [_, r, g, b] = hex.to_be_bytes();
        Self { r, g, b }
    }
}

/// Clickable area in room coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (dx, dy) = (i64::from(x) - i64::from(self.x), i64::from(y) - i64::from(self.y));
        (0..i64::from(self.w)).contains(&dx) && (0..i64::from(self.h)).contains(&dy)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotspot {
    pub id: String,
    pub label: String,
    pub area: Rect,
    /// `None` for decorative hotspots that only say "Nothing special here."
    pub action: Option<ActionDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// 1-based position in the room cycle.
    pub number: usize,
    pub name: String,
    pub color: RoomColor,
    pub hotspots: Vec<Hotspot>,
}

impl Room {
    /// Find a hotspot index by 1-based number, id, or label (case-insensitive).
    pub fn find_hotspot(&self, query: &str) -> Option<usize> {
        let query = query.trim();
        if let Ok(number) = query.parse::<usize>() {
            return (1..=self.hotspots.len()).contains(&number).then(|| number - 1);
        }
        let lc = query.to_lowercase();
        self.hotspots
            .iter()
            .position(|spot| spot.id.to_lowercase() == lc || spot.label.to_lowercase() == lc)
            .or_else(|| {
                // fall back to a unique partial label match ("map" -> "Wall Map")
                let mut partial = self
                    .hotspots
                    .iter()
                    .enumerate()
                    .filter(|(_, spot)| spot.label.to_lowercase().contains(&lc));
                match (partial.next(), partial.next()) {
                    (Some((index, _)), None) if !lc.is_empty() => Some(index),
                    _ => None,
                }
            })
    }

    /// Index of the topmost hotspot under a point. Later hotspots draw over earlier ones.
    pub fn hotspot_at(&self, x: i32, y: i32) -> Option<usize> {
        self.hotspots.iter().rposition(|spot| spot.area.contains(x, y))
    }
}
