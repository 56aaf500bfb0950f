mod buttons;
mod hover;
mod pointer;
mod touch;

use crate::view::CarouselView;
use carousel_core::{Carousel, InputSource};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handles captured by every listener of one carousel.
#[derive(Clone)]
pub struct CarouselWiring {
    pub view: Rc<CarouselView>,
    pub carousel: Rc<RefCell<Carousel>>,
}

impl CarouselWiring {
    /// Measure, re-derive the visual state and write it to the DOM.
    pub fn render(&self) {
        let track = self.view.measure();
        let plan = self.carousel.borrow_mut().render(&track);
        self.view.apply(&plan);
        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "[carousel] active card: {}",
                self.view.card_text(plan.active_index).unwrap_or_default()
            );
        }
    }

    fn begin_drag(&self, source: InputSource, x: f64) {
        let offset = self.carousel.borrow_mut().press(source, x);
        self.view.hold(offset);
    }

    /// Returns `true` when a drag consumed the move.
    fn drag_to(&self, x: f64) -> bool {
        let offset = self.carousel.borrow_mut().drag_to(x);
        match offset {
            Some(offset) => {
                self.view.follow(offset);
                true
            }
            None => false,
        }
    }

    /// Returns `true` when a drag was active.
    fn end_drag(&self, x: f64) -> bool {
        let swipe = self.carousel.borrow_mut().release(x);
        if swipe.is_none() {
            return false;
        }
        self.render();
        true
    }

    fn abort_drag(&self) -> bool {
        let was_dragging = self.carousel.borrow_mut().abort();
        if was_dragging {
            self.render();
        }
        was_dragging
    }
}

pub fn wire_carousel(w: &CarouselWiring) {
    buttons::wire(w);
    hover::wire(w);
    pointer::wire(w);
    touch::wire(w);
}
