use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// First element matching `selector`, cast to `T`.
pub fn query_as<T: JsCast>(document: &web::Document, selector: &str) -> anyhow::Result<T> {
    let el = document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("bad selector {}: {:?}", selector, e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))?;
    el.dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("{} has unexpected type: {:?}", selector, e))
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: E| handler(ev)) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("failed to add {} listener: {:?}", event, e);
    }
    closure.forget();
}

/// Like [`add_listener`], but marked non-passive so the handler may call
/// `preventDefault` on touch and wheel events.
pub fn add_active_listener<E>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) where
    E: FromWasmAbi + 'static,
{
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: E| handler(ev)) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::error!("failed to add {} listener: {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("could not set {}={}: {:?}", property, value, e);
    }
}
