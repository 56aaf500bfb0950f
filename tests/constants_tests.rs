// Host-side tests for the DOM contract constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn selectors_are_class_selectors() {
    for sel in [TRACK_SELECTOR, PREV_BUTTON_SELECTOR, NEXT_BUTTON_SELECTOR] {
        assert!(sel.starts_with('.'), "{} should select by class", sel);
        assert!(!sel.contains(' '), "{} should not be a descendant selector", sel);
    }
}

#[test]
fn button_selectors_differ_only_by_direction() {
    assert_ne!(PREV_BUTTON_SELECTOR, NEXT_BUTTON_SELECTOR);
    assert_eq!(
        PREV_BUTTON_SELECTOR.trim_end_matches(".prev"),
        NEXT_BUTTON_SELECTOR.trim_end_matches(".next")
    );
}

#[test]
fn card_markers_are_distinct_class_names() {
    assert_ne!(ACTIVE_CLASS, HOVER_CLASS);
    for class in [ACTIVE_CLASS, HOVER_CLASS] {
        assert!(!class.is_empty());
        assert!(!class.contains(char::is_whitespace));
        assert!(!class.starts_with('.'));
    }
}

#[test]
fn cursor_switches_while_dragging() {
    assert_eq!(cursor_for(true), "grabbing");
    assert_eq!(cursor_for(false), "grab");
}

#[test]
fn mount_waits_only_while_document_is_loading() {
    assert!(is_still_loading("loading"));
    assert!(!is_still_loading("interactive"));
    assert!(!is_still_loading("complete"));
}

#[test]
fn card_label_selector_is_an_element_name() {
    assert!(!CARD_LABEL_SELECTOR.is_empty());
    assert!(CARD_LABEL_SELECTOR.chars().all(|c| c.is_ascii_alphabetic()));
}
