use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn create_svg(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document.create_element_ns(Some(SVG_NS), tag).map_err(js_err)
}

pub fn create_div(document: &web::Document, class: &str) -> anyhow::Result<web::Element> {
    let div = document.create_element("div").map_err(js_err)?;
    div.class_list().add_1(class).map_err(js_err)?;
    Ok(div)
}

pub fn set_attributes(el: &web::Element, attrs: &[(&str, String)]) -> anyhow::Result<()> {
    for (name, value) in attrs {
        el.set_attribute(name, value).map_err(js_err)?;
    }
    Ok(())
}

/// A pointer-event subscription that removes itself from its target when
/// dropped.
pub struct PointerListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::PointerEvent)>,
}

impl PointerListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::PointerEvent) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for PointerListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}
