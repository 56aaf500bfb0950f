/// DOM contract for the carousel markup.
///
/// The track's element children are the cards; the two buttons sit next to
/// the track inside the same container.
pub const TRACK_SELECTOR: &str = ".carousel-track";
pub const PREV_BUTTON_SELECTOR: &str = ".carousel-button.prev";
pub const NEXT_BUTTON_SELECTOR: &str = ".carousel-button.next";

// `document.readyState` before parsing finishes
pub const READY_STATE_LOADING: &str = "loading";

// Class markers toggled on cards
pub const ACTIVE_CLASS: &str = "active";
pub const HOVER_CLASS: &str = "hover-effect";

// Element inside a card whose text names it in logs
pub const CARD_LABEL_SELECTOR: &str = "p";

// Track cursor while idle / while a mouse drag is held
pub const CURSOR_GRAB: &str = "grab";
pub const CURSOR_GRABBING: &str = "grabbing";

#[inline]
pub fn cursor_for(dragging: bool) -> &'static str {
    if dragging {
        CURSOR_GRABBING
    } else {
        CURSOR_GRAB
    }
}

/// Whether `DOMContentLoaded` is still to come for a given `readyState`.
#[inline]
pub fn is_still_loading(ready_state: &str) -> bool {
    ready_state == READY_STATE_LOADING
}
