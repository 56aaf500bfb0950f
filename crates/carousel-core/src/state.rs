//! The carousel controller state machine.
//!
//! `Carousel` owns everything the widget remembers between events: which card
//! is active, where the track currently sits, the live drag session and the
//! hovered card. Every operation is synchronous and returns plain data that
//! the web layer writes back to the DOM, so the whole widget can be driven
//! from host tests with a [`MeasuredTrack`](crate::MeasuredTrack).

use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::geometry::{centering_offset, TrackGeometry};
use crate::gesture::{classify_swipe, DragSession, InputSource, Swipe};
use crate::style::Transition;

/// Everything a render writes to the DOM.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderPlan {
    pub active_index: usize,
    /// `None` when the active card could not be measured; the track is left as is.
    pub offset: Option<f64>,
    pub transition: Transition,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

#[derive(Clone, Debug)]
pub struct Carousel {
    config: CarouselConfig,
    card_count: usize,
    current_index: usize,
    offset: f64,
    drag: Option<DragSession>,
    hovered: Option<usize>,
}

impl Carousel {
    pub fn new(card_count: usize, config: CarouselConfig) -> Result<Self, CarouselError> {
        if card_count == 0 {
            return Err(CarouselError::NoCards);
        }
        let last = card_count - 1;
        let current_index = if config.initial_index > last {
            log::warn!(
                "[carousel] initial index {} out of range for {} cards; using {}",
                config.initial_index,
                card_count,
                last
            );
            last
        } else {
            config.initial_index
        };
        Ok(Self {
            config,
            card_count,
            current_index,
            offset: 0.0,
            drag: None,
            hovered: None,
        })
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Track translation last written by a render or a drag move.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    #[inline]
    fn last_index(&self) -> usize {
        self.card_count - 1
    }

    pub fn prev_enabled(&self) -> bool {
        self.current_index > 0
    }

    pub fn next_enabled(&self) -> bool {
        self.current_index < self.last_index()
    }

    // Stores the index unchecked so renders can be exercised against drift.
    #[cfg(test)]
    fn force_index(&mut self, index: usize) {
        self.current_index = index;
    }

    /// Re-derive the visual state from `current_index`.
    pub fn render(&mut self, geometry: &impl TrackGeometry) -> RenderPlan {
        if self.current_index > self.last_index() {
            let clamped = self.last_index();
            log::warn!(
                "[carousel] index {} out of range; clamping to {}",
                self.current_index,
                clamped
            );
            self.current_index = clamped;
        }

        let offset = match geometry.card(self.current_index) {
            Some(card) => {
                let offset = centering_offset(geometry.container_width(), card);
                self.offset = offset;
                Some(offset)
            }
            None => {
                log::error!(
                    "[carousel] active card {} could not be measured; track not moved",
                    self.current_index
                );
                None
            }
        };

        let plan = RenderPlan {
            active_index: self.current_index,
            offset,
            transition: Transition::Eased,
            prev_disabled: !self.prev_enabled(),
            next_disabled: !self.next_enabled(),
        };
        log::debug!(
            "[carousel] render index={} offset={:?} prev_disabled={} next_disabled={}",
            plan.active_index,
            plan.offset,
            plan.prev_disabled,
            plan.next_disabled
        );
        plan
    }

    /// Step back one card. Returns `false` at the first card.
    pub fn previous(&mut self) -> bool {
        if self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        log::debug!("[nav] previous -> {}", self.current_index);
        true
    }

    /// Step forward one card. Returns `false` at the last card.
    pub fn next(&mut self) -> bool {
        if self.current_index >= self.last_index() {
            return false;
        }
        self.current_index += 1;
        log::debug!("[nav] next -> {}", self.current_index);
        true
    }

    /// Start a drag at pointer `x`. Returns the offset to hold the track at,
    /// to be written with [`Transition::None`].
    pub fn press(&mut self, source: InputSource, x: f64) -> f64 {
        if let Some(prev) = self.drag {
            log::debug!(
                "[drag] {} press while a {} drag was active; restarting",
                source.as_str(),
                prev.source.as_str()
            );
        }
        self.drag = Some(DragSession::new(source, x, self.offset));
        log::debug!("[drag] {} start x={} offset={}", source.as_str(), x, self.offset);
        self.offset
    }

    /// Follow the pointer. `None` when no drag is active.
    pub fn drag_to(&mut self, x: f64) -> Option<f64> {
        let session = self.drag?;
        self.offset = session.follow_offset(x);
        Some(self.offset)
    }

    /// Finish the drag at pointer `x` and apply the resulting navigation.
    ///
    /// Returns the swipe that was actually applied; a swipe past the bounds
    /// comes back as [`Swipe::SnapBack`]. `None` when no drag was active.
    /// The caller renders afterwards in every `Some` case.
    pub fn release(&mut self, x: f64) -> Option<Swipe> {
        let session = self.drag.take()?;
        let diff = session.delta(x);
        let applied = match classify_swipe(diff, self.config.swipe_threshold_px) {
            Swipe::Previous if self.previous() => Swipe::Previous,
            Swipe::Next if self.next() => Swipe::Next,
            _ => Swipe::SnapBack,
        };
        log::debug!(
            "[drag] {} release diff={} -> {:?} (index {})",
            session.source.as_str(),
            diff,
            applied,
            self.current_index
        );
        Some(applied)
    }

    /// Drop the drag without evaluating displacement. Returns whether a drag
    /// was active; the caller renders to snap back when it was.
    pub fn abort(&mut self) -> bool {
        match self.drag.take() {
            Some(session) => {
                log::debug!("[drag] {} aborted", session.source.as_str());
                true
            }
            None => false,
        }
    }

    /// Pointer entered card `index`. Returns `false` for unknown cards.
    pub fn hover_enter(&mut self, index: usize) -> bool {
        if index >= self.card_count {
            return false;
        }
        self.hovered = Some(index);
        true
    }

    /// Pointer left card `index`.
    pub fn hover_leave(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
    }
}
