use super::CarouselWiring;
use crate::dom;
use carousel_core::InputSource;
use web_sys as web;

pub fn wire(w: &CarouselWiring) {
    wire_mousedown(w);
    wire_mousemove(w);
    wire_mouseup(w);
    wire_mouseleave(w);
}

fn wire_mousedown(w: &CarouselWiring) {
    let w2 = w.clone();
    dom::add_listener(&w.view.track, "mousedown", move |ev: web::MouseEvent| {
        w2.begin_drag(InputSource::Mouse, ev.client_x() as f64);
        w2.view.set_grabbing(true);
    });
}

fn wire_mousemove(w: &CarouselWiring) {
    let w2 = w.clone();
    dom::add_listener(&w.view.track, "mousemove", move |ev: web::MouseEvent| {
        if w2.drag_to(ev.client_x() as f64) {
            ev.prevent_default();
        }
    });
}

fn wire_mouseup(w: &CarouselWiring) {
    let w2 = w.clone();
    dom::add_listener(&w.view.track, "mouseup", move |ev: web::MouseEvent| {
        if w2.end_drag(ev.client_x() as f64) {
            w2.view.set_grabbing(false);
        }
    });
}

// Leaving the track mid-drag aborts: no swipe, snap back to the current card.
fn wire_mouseleave(w: &CarouselWiring) {
    let w2 = w.clone();
    dom::add_listener(&w.view.track, "mouseleave", move |_: web::MouseEvent| {
        if w2.abort_drag() {
            w2.view.set_grabbing(false);
        }
    });
}
