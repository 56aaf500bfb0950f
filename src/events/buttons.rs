use super::CarouselWiring;
use crate::dom;
use web_sys as web;

pub fn wire(w: &CarouselWiring) {
    let wp = w.clone();
    dom::add_listener(&w.view.prev, "click", move |_: web::MouseEvent| {
        let moved = wp.carousel.borrow_mut().previous();
        if moved {
            wp.render();
        }
    });

    let wn = w.clone();
    dom::add_listener(&w.view.next, "click", move |_: web::MouseEvent| {
        let moved = wn.carousel.borrow_mut().next();
        if moved {
            wn.render();
        }
    });
}
