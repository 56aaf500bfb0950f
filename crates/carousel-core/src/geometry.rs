//! Layout measurements needed to center a card inside the visible area.
//!
//! All values are CSS pixels in the track's own coordinate space: a card's
//! `left` is its `offsetLeft` relative to the track, and the container width
//! is the width of the element that clips the track.

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardMetrics {
    pub left: f64,
    pub width: f64,
}

impl CardMetrics {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    #[inline]
    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Source of layout numbers for the track and its cards.
pub trait TrackGeometry {
    fn container_width(&self) -> f64;
    fn card(&self, index: usize) -> Option<CardMetrics>;
}

/// Track translation that puts the card's center on the container's center.
#[inline]
pub fn centering_offset(container_width: f64, card: CardMetrics) -> f64 {
    container_width / 2.0 - card.center()
}

/// Snapshot of the track layout taken at one point in time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeasuredTrack {
    pub container_width: f64,
    pub cards: SmallVec<[CardMetrics; 8]>,
}

impl MeasuredTrack {
    pub fn new(container_width: f64, cards: impl IntoIterator<Item = CardMetrics>) -> Self {
        Self {
            container_width,
            cards: cards.into_iter().collect(),
        }
    }

    /// Equal-width cards laid out edge to edge with a fixed gap between them.
    pub fn uniform(container_width: f64, count: usize, card_width: f64, gap: f64) -> Self {
        Self::new(
            container_width,
            (0..count).map(|i| CardMetrics::new(i as f64 * (card_width + gap), card_width)),
        )
    }
}

impl TrackGeometry for MeasuredTrack {
    fn container_width(&self) -> f64 {
        self.container_width
    }

    fn card(&self, index: usize) -> Option<CardMetrics> {
        self.cards.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_centers_card() {
        // 300px container, 100px card starting at 250 -> center 300 -> shift by -150
        let card = CardMetrics::new(250.0, 100.0);
        assert_eq!(centering_offset(300.0, card), -150.0);
    }

    #[test]
    fn first_card_can_shift_right() {
        let card = CardMetrics::new(0.0, 100.0);
        assert_eq!(centering_offset(400.0, card), 150.0);
    }

    #[test]
    fn uniform_layout_positions() {
        let track = MeasuredTrack::uniform(300.0, 3, 100.0, 20.0);
        assert_eq!(track.card(0), Some(CardMetrics::new(0.0, 100.0)));
        assert_eq!(track.card(2), Some(CardMetrics::new(240.0, 100.0)));
        assert_eq!(track.card(3), None);
    }
}
