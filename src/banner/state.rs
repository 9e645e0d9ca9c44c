// SPDX-License-Identifier: MPL-2.0
//! Banner lifecycle states and the legal transitions between them.

/// Where a banner is in its lifecycle.
///
/// `MovingForward` and `MovingBackward` are transient re-flow states a
/// visible banner passes through while it slides to a new slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BannerState {
    /// Entrance animation in progress.
    #[default]
    Showing,
    /// Exit animation in progress.
    Hiding,
    /// Sliding away from the anchor to make room for a newer sibling.
    MovingForward,
    /// Sliding toward the anchor to close a gap.
    MovingBackward,
    /// Fully on screen.
    Visible,
    /// Off screen; the banner is about to be released.
    Hidden,
}

impl BannerState {
    /// Returns whether the transition table allows `self -> next`.
    ///
    /// | from | to |
    /// |---|---|
    /// | Showing | Visible, Hiding |
    /// | Visible | MovingForward, MovingBackward, Hiding |
    /// | MovingForward | Visible, MovingBackward, Hiding |
    /// | MovingBackward | Visible, MovingForward, Hiding |
    /// | Hiding | Hidden |
    /// | Hidden | - |
    #[must_use]
    pub fn can_transition_to(self, next: BannerState) -> bool {
        use BannerState::{Hidden, Hiding, MovingBackward, MovingForward, Showing, Visible};

        matches!(
            (self, next),
            (Showing, Visible | Hiding)
                | (Visible, MovingForward | MovingBackward | Hiding)
                | (MovingForward, Visible | MovingBackward | Hiding)
                | (MovingBackward, Visible | MovingForward | Hiding)
                | (Hiding, Hidden)
        )
    }

    /// Fully shown, possibly mid re-flow.
    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(
            self,
            BannerState::Visible | BannerState::MovingForward | BannerState::MovingBackward
        )
    }

    /// Leaving the screen or already gone.
    #[must_use]
    pub fn is_leaving(self) -> bool {
        matches!(self, BannerState::Hiding | BannerState::Hidden)
    }
}
