use glam::Vec2;

use super::overlay::OverlayOpacities;
use crate::options::FlipAxis;

/// Rotation of each face of a flippable card, in degrees.
///
/// The faces read `spin` and `180 - spin` so they stay back to back; a
/// face turned 90 degrees or more away is hidden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipFaces {
    /// Spin axis.
    pub axis: FlipAxis,
    /// Front face rotation.
    pub front_rotation: f32,
    /// Back face rotation.
    pub back_rotation: f32,
}

impl FlipFaces {
    /// Faces at `spin` degrees (0 = front showing, 180 = back showing).
    #[must_use]
    pub fn at(spin: f32, axis: FlipAxis) -> Self {
        Self {
            axis,
            front_rotation: spin,
            back_rotation: 180.0 - spin,
        }
    }

    /// Whether the front face is towards the viewer.
    #[must_use]
    pub fn front_visible(&self) -> bool {
        self.front_rotation < 90.0
    }

    /// Whether the back face is towards the viewer.
    #[must_use]
    pub fn back_visible(&self) -> bool {
        self.back_rotation < 90.0
    }
}

/// Everything the host needs to draw one card this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisual {
    /// Offset from the resting position, px.
    pub translation: Vec2,
    /// In-plane rotation, radians.
    pub rotation: f32,
    /// Stack scale times press feedback.
    pub scale: f32,
    /// Card opacity.
    pub opacity: f32,
    /// Paint order: higher draws on top.
    pub z_index: i64,
    /// Whether any part of the card should be drawn.
    pub visible: bool,
    /// Whether the card accepts gestures (only the active card).
    pub interactive: bool,
    /// Overlay label opacities.
    pub overlays: OverlayOpacities,
    /// Face rotations, if the card has a back.
    pub flip: Option<FlipFaces>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_face_shows_at_rest() {
        let front = FlipFaces::at(0.0, FlipAxis::Y);
        assert!(front.front_visible() && !front.back_visible());
        let back = FlipFaces::at(180.0, FlipAxis::Y);
        assert!(!back.front_visible() && back.back_visible());
        let mid = FlipFaces::at(120.0, FlipAxis::X);
        assert!(!mid.front_visible() && mid.back_visible());
    }
}
