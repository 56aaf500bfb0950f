use super::CarouselWiring;
use crate::dom;
use carousel_core::InputSource;
use web_sys as web;

#[inline]
fn first_x(list: &web::TouchList) -> Option<f64> {
    list.item(0).map(|t| t.client_x() as f64)
}

pub fn wire(w: &CarouselWiring) {
    let ws = w.clone();
    dom::add_listener(&w.view.track, "touchstart", move |ev: web::TouchEvent| {
        if let Some(x) = first_x(&ev.touches()) {
            ws.begin_drag(InputSource::Touch, x);
        }
    });

    let wm = w.clone();
    dom::add_active_listener(&w.view.track, "touchmove", move |ev: web::TouchEvent| {
        let Some(x) = first_x(&ev.touches()) else {
            return;
        };
        if wm.drag_to(x) {
            ev.prevent_default();
        }
    });

    let we = w.clone();
    dom::add_listener(&w.view.track, "touchend", move |ev: web::TouchEvent| {
        if let Some(x) = first_x(&ev.changed_touches()) {
            we.end_drag(x);
        }
    });

    // The browser took the touch away mid-swipe; snap back like a mouse leave.
    let wc = w.clone();
    dom::add_listener(&w.view.track, "touchcancel", move |_: web::TouchEvent| {
        wc.abort_drag();
    });
}
