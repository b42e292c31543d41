//! Pointer-driven image tilt inside the modal media area.

/// Maximum image shift in pixels at the media edges.
const PARALLAX_SHIFT_PX: f64 = 8.0;
/// Scale applied while the pointer hovers the media area.
const PARALLAX_SCALE: f64 = 1.03;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Client-space bounds of the media area.
pub struct MediaRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Returns the CSS transform for a pointer at (`client_x`, `client_y`) over `rect`.
///
/// The pointer offset from the centre is normalised to `[-0.5, 0.5]` on each axis. Degenerate
/// rects produce no shift.
pub fn parallax_transform(rect: MediaRect, client_x: f64, client_y: f64) -> String {
    let x = normalised_offset(client_x - rect.left, rect.width);
    let y = normalised_offset(client_y - rect.top, rect.height);
    format!(
        "scale({PARALLAX_SCALE}) translate3d({}px, {}px, 0)",
        x * PARALLAX_SHIFT_PX,
        y * PARALLAX_SHIFT_PX
    )
}

fn normalised_offset(offset: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    offset / extent - 0.5
}
