//! CSS values written to the track.

/// Eased slide used whenever the track recenters on the active card.
pub const TRACK_TRANSITION: &str = "transform 0.5s cubic-bezier(0.25, 0.46, 0.45, 0.94)";

/// Transition value while a drag is in progress, so the track follows the pointer.
pub const NO_TRANSITION: &str = "none";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Eased,
    None,
}

impl Transition {
    pub fn css(self) -> &'static str {
        match self {
            Transition::Eased => TRACK_TRANSITION,
            Transition::None => NO_TRANSITION,
        }
    }
}

/// `transform` value for a horizontal track offset in CSS px.
pub fn translate_x(offset_px: f64) -> String {
    format!("translateX({}px)", offset_px)
}
