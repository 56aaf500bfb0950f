use super::CarouselWiring;
use crate::dom;
use web_sys as web;

pub fn wire(w: &CarouselWiring) {
    for (index, card) in w.view.cards.iter().enumerate() {
        let we = w.clone();
        dom::add_listener(card, "mouseenter", move |_: web::MouseEvent| {
            if we.carousel.borrow_mut().hover_enter(index) {
                we.view.set_hover(index, true);
            }
        });

        let wl = w.clone();
        dom::add_listener(card, "mouseleave", move |_: web::MouseEvent| {
            wl.carousel.borrow_mut().hover_leave(index);
            wl.view.set_hover(index, false);
        });
    }
}
