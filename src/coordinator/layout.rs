// SPDX-License-Identifier: MPL-2.0
//! Slot geometry.
//!
//! A banner's frame is derived from its anchor, its height and its
//! distance from the anchor edge (the summed height of the newer siblings
//! in its stack).

use crate::banner::Position;
use iced_core::{Point, Rectangle, Size};

/// Frame of a banner resting `offset` away from its anchor.
pub(crate) fn slot_frame(
    bounds: Rectangle,
    nav_bar_bottom: f32,
    position: Position,
    offset: f32,
    height: f32,
) -> Rectangle {
    let y = match position {
        Position::Top => bounds.y + offset,
        Position::UnderNavBar => bounds.y + nav_bar_bottom + offset,
        Position::Bottom => bounds.y + bounds.height - height - offset,
    };
    Rectangle::new(Point::new(bounds.x, y), Size::new(bounds.width, height))
}

/// Frame a banner enters from and exits to: one banner height beyond
/// its resting frame, on the anchor side.
pub(crate) fn offstage_frame(position: Position, frame: Rectangle) -> Rectangle {
    let y = match position {
        Position::Top | Position::UnderNavBar => frame.y - frame.height,
        Position::Bottom => frame.y + frame.height,
    };
    Rectangle { y, ..frame }
}
