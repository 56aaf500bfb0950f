#![cfg(target_arch = "wasm32")]
use carousel_core::Carousel;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod label;
mod view;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("carousel-web starting");

    let Some(document) = dom::window_document() else {
        log::error!("init error: no document");
        return Ok(());
    };

    // The module may load before or after parsing finishes.
    if constants::is_still_loading(&document.ready_state()) {
        dom::add_listener(&document, "DOMContentLoaded", move |_: web::Event| {
            run_mount();
        });
    } else {
        run_mount();
    }
    Ok(())
}

fn run_mount() {
    if let Err(e) = mount() {
        log::error!("init error: {:#}", e);
    }
}

fn mount() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let view = view::CarouselView::bind(&document)?;
    let config = view.config();

    // Fails with NoCards before any listener is attached.
    let carousel = Carousel::new(view.cards.len(), config)?;
    log::info!(
        "[carousel] {} cards, starting at {}, swipe threshold {}px",
        carousel.card_count(),
        carousel.current_index(),
        config.swipe_threshold_px
    );

    let wiring = events::CarouselWiring {
        view: Rc::new(view),
        carousel: Rc::new(RefCell::new(carousel)),
    };
    events::wire_carousel(&wiring);
    wiring.view.set_grabbing(false);
    wiring.render();
    Ok(())
}
