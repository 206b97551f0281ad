//! Wheel geometry: wedge layout and the pointer query.
//!
//! The pointer sits at 0 degrees in the unrotated frame. Wedges are drawn
//! starting at the current rotation, so the wedge under the pointer is the
//! one whose unrotated span contains `360 - angle`.

use crate::domain::models::{ResolvedItem, Wedge};

pub const FULL_TURN: f64 = 360.0;

/// Maps any finite angle into `[0, 360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= FULL_TURN {
        0.0
    } else {
        a
    }
}

/// Angle in the unrotated layout that currently lines up with the pointer.
pub fn target_angle(angle: f64) -> f64 {
    normalize_angle(FULL_TURN - normalize_angle(angle))
}

pub fn layout(items: &[ResolvedItem], angle: f64) -> Vec<Wedge> {
    let mut start = normalize_angle(angle);
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let extent = item.extent_deg();
            let wedge = Wedge {
                index,
                name: item.name.clone(),
                share: item.share,
                start_deg: start,
                end_deg: start + extent,
                extent_deg: extent,
            };
            start += extent;
            wedge
        })
        .collect()
}

/// Index of the item under the pointer when the wheel is rotated by `angle`.
///
/// Spans are half-open `[low, high)`, so a target exactly on a boundary
/// belongs to the later wedge. If rounding leaves the target past the last
/// accumulated boundary, the last item wins.
///
/// # Panics
///
/// Panics if `items` is empty.
pub fn winner_index(items: &[ResolvedItem], angle: f64) -> usize {
    assert!(!items.is_empty(), "winner_index called with no items");
    let target = target_angle(angle);
    let mut current = 0.0;
    for (idx, item) in items.iter().enumerate() {
        let extent = item.extent_deg();
        if current <= target && target < current + extent {
            return idx;
        }
        current += extent;
    }
    items.len() - 1
}

/// # Panics
///
/// Panics if `items` is empty.
pub fn winner_at(items: &[ResolvedItem], angle: f64) -> &ResolvedItem {
    &items[winner_index(items, angle)]
}

/// A resolved wheel plus its current rotation.
#[derive(Debug, Clone)]
pub struct WheelState {
    items: Vec<ResolvedItem>,
    angle: f64,
}

impl WheelState {
    pub fn new(items: Vec<ResolvedItem>) -> Self {
        Self { items, angle: 0.0 }
    }

    pub fn items(&self) -> &[ResolvedItem] {
        &self.items
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn advance(&mut self, delta: f64) {
        self.angle = normalize_angle(self.angle + delta);
    }

    pub fn reset_angle(&mut self) {
        self.angle = 0.0;
    }

    pub fn set_angle(&mut self, angle: f64) {
        self.angle = normalize_angle(angle);
    }

    pub fn layout(&self) -> Vec<Wedge> {
        layout(&self.items, self.angle)
    }

    pub fn winner_index(&self) -> usize {
        winner_index(&self.items, self.angle)
    }
}
