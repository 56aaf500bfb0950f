//! DOM side of a mounted carousel: the bound elements plus the writes that
//! turn a [`RenderPlan`] into classes, inline styles and button state.

use crate::constants::{
    cursor_for, ACTIVE_CLASS, CARD_LABEL_SELECTOR, HOVER_CLASS, NEXT_BUTTON_SELECTOR, PREV_BUTTON_SELECTOR,
    TRACK_SELECTOR,
};
use crate::dom;
use crate::label::card_label;
use carousel_core::{
    translate_x, CardMetrics, CarouselConfig, MeasuredTrack, RenderPlan, Transition,
};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CarouselView {
    pub track: web::HtmlElement,
    pub cards: Vec<web::HtmlElement>,
    pub prev: web::HtmlButtonElement,
    pub next: web::HtmlButtonElement,
}

impl CarouselView {
    pub fn bind(document: &web::Document) -> anyhow::Result<Self> {
        let track: web::HtmlElement = dom::query_as(document, TRACK_SELECTOR)?;
        let prev: web::HtmlButtonElement = dom::query_as(document, PREV_BUTTON_SELECTOR)?;
        let next: web::HtmlButtonElement = dom::query_as(document, NEXT_BUTTON_SELECTOR)?;

        let children = track.children();
        let cards = (0..children.length())
            .filter_map(|i| children.item(i))
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .collect();

        Ok(Self {
            track,
            cards,
            prev,
            next,
        })
    }

    /// Config from the track's `data-*` attributes, or defaults if any is invalid.
    pub fn config(&self) -> CarouselConfig {
        CarouselConfig::from_attributes(|name| self.track.get_attribute(name)).unwrap_or_else(|e| {
            log::warn!("[config] {}; using defaults", e);
            CarouselConfig::default()
        })
    }

    /// Snapshot of the current layout. The container is the element that
    /// clips the track, i.e. its parent.
    pub fn measure(&self) -> MeasuredTrack {
        let container_width = self
            .track
            .parent_element()
            .and_then(|p| p.dyn_into::<web::HtmlElement>().ok())
            .map(|p| p.offset_width())
            .unwrap_or_else(|| self.track.offset_width());
        MeasuredTrack::new(
            container_width as f64,
            self.cards
                .iter()
                .map(|c| CardMetrics::new(c.offset_left() as f64, c.offset_width() as f64)),
        )
    }

    pub fn apply(&self, plan: &RenderPlan) {
        for card in &self.cards {
            dom::set_class(card, ACTIVE_CLASS, false);
        }
        if let Some(card) = self.cards.get(plan.active_index) {
            dom::set_class(card, ACTIVE_CLASS, true);
        }

        if let Some(offset) = plan.offset {
            self.set_transform(plan.transition, offset);
        }

        self.prev.set_disabled(plan.prev_disabled);
        self.next.set_disabled(plan.next_disabled);
    }

    /// Pin the track at `offset` with easing off, ready to follow a drag.
    pub fn hold(&self, offset: f64) {
        self.set_transform(Transition::None, offset);
    }

    /// Move the track during a drag; the transition set by `hold` stays.
    pub fn follow(&self, offset: f64) {
        dom::set_style(&self.track, "transform", &translate_x(offset));
    }

    /// One-line text of card `index`, preferring its label paragraph.
    pub fn card_text(&self, index: usize) -> Option<String> {
        let card = self.cards.get(index)?;
        let text = card
            .query_selector(CARD_LABEL_SELECTOR)
            .ok()
            .flatten()
            .and_then(|p| p.text_content())
            .or_else(|| card.text_content())?;
        Some(card_label(&text))
    }

    pub fn set_hover(&self, index: usize, on: bool) {
        if let Some(card) = self.cards.get(index) {
            dom::set_class(card, HOVER_CLASS, on);
        }
    }

    pub fn set_grabbing(&self, dragging: bool) {
        dom::set_style(&self.track, "cursor", cursor_for(dragging));
    }

    fn set_transform(&self, transition: Transition, offset: f64) {
        dom::set_style(&self.track, "transition", transition.css());
        dom::set_style(&self.track, "transform", &translate_x(offset));
    }
}
