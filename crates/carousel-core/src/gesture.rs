//! Drag/swipe bookkeeping shared by the mouse and touch paths.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    Mouse,
    Touch,
}

impl InputSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputSource::Mouse => "mouse",
            InputSource::Touch => "touch",
        }
    }
}

/// An in-progress drag, alive from press until release or abort.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub source: InputSource,
    pub start_x: f64,
    /// Track offset at the moment of the press.
    pub initial_offset: f64,
}

impl DragSession {
    pub fn new(source: InputSource, start_x: f64, initial_offset: f64) -> Self {
        Self {
            source,
            start_x,
            initial_offset,
        }
    }

    #[inline]
    pub fn delta(&self, x: f64) -> f64 {
        x - self.start_x
    }

    /// Raw track offset that keeps the grabbed point under the pointer.
    #[inline]
    pub fn follow_offset(&self, x: f64) -> f64 {
        self.initial_offset + self.delta(x)
    }
}

/// What a finished drag asks the carousel to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    /// Dragged right past the threshold.
    Previous,
    /// Dragged left past the threshold.
    Next,
    SnapBack,
}

/// Classify a total displacement. Exactly `threshold` is not a swipe.
pub fn classify_swipe(diff_x: f64, threshold: f64) -> Swipe {
    if diff_x > threshold {
        Swipe::Previous
    } else if diff_x < -threshold {
        Swipe::Next
    } else {
        Swipe::SnapBack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(classify_swipe(50.0, 50.0), Swipe::SnapBack);
        assert_eq!(classify_swipe(-50.0, 50.0), Swipe::SnapBack);
        assert_eq!(classify_swipe(50.5, 50.0), Swipe::Previous);
        assert_eq!(classify_swipe(-60.0, 50.0), Swipe::Next);
        assert_eq!(classify_swipe(0.0, 50.0), Swipe::SnapBack);
    }

    #[test]
    fn follow_offset_adds_delta() {
        let s = DragSession::new(InputSource::Touch, 200.0, -150.0);
        assert_eq!(s.delta(170.0), -30.0);
        assert_eq!(s.follow_offset(170.0), -180.0);
        assert_eq!(s.follow_offset(260.0), -90.0);
    }
}
