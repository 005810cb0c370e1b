use crate::dom::{self, PointerListener};
use crate::input;
use crate::options;
use crate::render::{self, RingNodes};
use crate::surface;
use slider_core::{HostId, MountTable, SliderState, ValueChange};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use web_sys as web;

struct Inner {
    state: SliderState,
    host: HostId,
    svg: web::Element,
    nodes: RingNodes,
    on_change: SmallVec<[js_sys::Function; 2]>,
    // Ring/handle pointerdown and document pointerup/pointercancel, alive until destroy()
    listeners: Vec<PointerListener>,
    // Document pointermove, alive only while dragging
    drag_move: Option<PointerListener>,
}

thread_local! {
    // Mounted sliders stay alive here until `destroy()`, whether or not the
    // script keeps its `RadialSlider` object.
    static MOUNTED: RefCell<MountTable<Rc<RefCell<Inner>>>> = RefCell::new(MountTable::new());
}

impl Inner {
    fn surface_size(&self) -> f64 {
        surface::size(self.host).unwrap_or(self.state.geometry.surface_size)
    }
}

/// Circular slider mounted into a host element.
///
/// ```js
/// const slider = new RadialSlider({
///   container: document.querySelector("#sliders"),
///   radius: 100, color: "#3a8fd9", minValue: 0, maxValue: 100, step: 1,
/// });
/// slider.onChange((v) => console.log(v));
/// ```
#[wasm_bindgen]
pub struct RadialSlider {
    slot: u32,
    inner: Option<Rc<RefCell<Inner>>>,
}

#[wasm_bindgen]
impl RadialSlider {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<RadialSlider, JsValue> {
        let inner = mount(&options).map_err(|e| js_sys::Error::new(&e.to_string()))?;
        let slot = MOUNTED.with(|table| table.borrow_mut().insert(inner.clone()));
        Ok(RadialSlider {
            slot,
            inner: Some(inner),
        })
    }

    /// Current (snapped) value.
    pub fn value(&self) -> f64 {
        self.inner
            .as_ref()
            .map(|inner| inner.borrow().state.value())
            .unwrap_or(f64::NAN)
    }

    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.inner
            .as_ref()
            .map(|inner| inner.borrow().state.is_dragging())
            .unwrap_or(false)
    }

    /// Move the handle to `value`, snapped to the step grid and clamped into
    /// range. Change callbacks fire when the snapped value differs.
    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(&self, value: f64) {
        if let Some(inner) = &self.inner {
            update(inner, |s| s.state.set_value(value));
        }
    }

    /// Register a callback invoked with the new value whenever it changes.
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, callback: js_sys::Function) {
        if let Some(inner) = &self.inner {
            inner.borrow_mut().on_change.push(callback);
        }
    }

    /// Remove this slider's nodes and listeners. The shared surface goes
    /// away with the last slider on its host.
    pub fn destroy(&mut self) {
        let Some(inner) = self.inner.take() else {
            return;
        };
        let mounted = MOUNTED.with(|table| table.borrow_mut().remove(self.slot));
        drop(mounted);
        let mut s = inner.borrow_mut();
        s.drag_move = None;
        s.listeners.clear();
        s.on_change.clear();
        s.nodes.remove();
        surface::release(s.host);
        log::info!("[slider] destroyed on host {:?}", s.host);
    }
}

fn mount(options: &JsValue) -> anyhow::Result<Rc<RefCell<Inner>>> {
    let options::MountOptions { container, config } = options::parse(options)?;
    if let Err(e) = config.validate() {
        log::warn!("[slider] invalid config, rendering anyway: {}", e);
    }
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let state = SliderState::new(&config);
    let (host, surface_nodes) =
        surface::acquire(&document, &container, state.geometry.surface_size)?;
    let nodes = match render::build(
        &document,
        &surface_nodes.svg,
        &surface_nodes.legend,
        &config,
        &state.geometry,
        &state.snapshot(),
    ) {
        Ok(nodes) => nodes,
        Err(e) => {
            surface::release(host);
            return Err(e);
        }
    };
    log::info!(
        "[slider] mounted r={} range=[{}, {}] step={} on host {:?}",
        config.radius,
        config.min_value,
        config.max_value,
        config.step,
        host
    );

    let inner = Rc::new(RefCell::new(Inner {
        state,
        host,
        svg: surface_nodes.svg,
        nodes,
        on_change: SmallVec::new(),
        listeners: Vec::new(),
        drag_move: None,
    }));

    let listeners = match wire_listeners(&inner, &document, config.draggable) {
        Ok(listeners) => listeners,
        Err(e) => {
            inner.borrow().nodes.remove();
            surface::release(host);
            return Err(e);
        }
    };
    inner.borrow_mut().listeners = listeners;
    Ok(inner)
}

fn wire_listeners(
    inner: &Rc<RefCell<Inner>>,
    document: &web::Document,
    draggable: bool,
) -> anyhow::Result<Vec<PointerListener>> {
    let mut listeners = Vec::with_capacity(4);

    let weak = Rc::downgrade(inner);
    let rings = inner.borrow().nodes.rings.clone();
    listeners.push(PointerListener::new(&rings, "pointerdown", move |ev| {
        let Some(inner) = weak.upgrade() else { return };
        ev.prevent_default();
        update(&inner, |s| {
            let offset = input::pointer_offset(&ev, &s.svg, s.surface_size());
            s.state.jump_to(offset)
        });
    })?);

    if draggable {
        let weak = Rc::downgrade(inner);
        let handle = inner.borrow().nodes.handle.clone();
        listeners.push(PointerListener::new(&handle, "pointerdown", move |ev| {
            let Some(inner) = weak.upgrade() else { return };
            ev.prevent_default();
            begin_drag(&inner);
        })?);

        // A cancelled pointer (touch scroll, lost window) ends the drag too
        for kind in ["pointerup", "pointercancel"] {
            let weak = Rc::downgrade(inner);
            listeners.push(PointerListener::new(document, kind, move |_ev| {
                let Some(inner) = weak.upgrade() else { return };
                end_drag(&inner);
            })?);
        }
    }

    Ok(listeners)
}

fn begin_drag(inner: &Rc<RefCell<Inner>>) {
    if !inner.borrow_mut().state.begin_drag() {
        return;
    }
    let Some(document) = dom::window_document() else {
        return;
    };
    let weak: Weak<RefCell<Inner>> = Rc::downgrade(inner);
    let listener = PointerListener::new(&document, "pointermove", move |ev| {
        let Some(inner) = weak.upgrade() else { return };
        update(&inner, |s| {
            let offset = input::pointer_offset(&ev, &s.svg, s.surface_size());
            s.state.drag_to(offset)
        });
    });
    let mut s = inner.borrow_mut();
    match listener {
        Ok(listener) => {
            s.drag_move = Some(listener);
            log::debug!("[drag] begin value={}", s.state.value());
        }
        Err(e) => {
            s.state.end_drag();
            log::error!("[drag] could not subscribe to pointermove: {:?}", e);
        }
    }
}

fn end_drag(inner: &Rc<RefCell<Inner>>) {
    let mut s = inner.borrow_mut();
    if s.state.end_drag() {
        s.drag_move = None;
        log::debug!("[drag] end value={}", s.state.value());
    }
}

/// Run a state transition, redraw on change, then notify callbacks with no
/// borrow held so they may call back into the slider.
fn update(inner: &Rc<RefCell<Inner>>, f: impl FnOnce(&mut Inner) -> Option<ValueChange>) {
    let (change, callbacks) = {
        let mut guard = inner.borrow_mut();
        let s = &mut *guard;
        let Some(change) = f(s) else { return };
        if let Err(e) = s.nodes.apply(&s.state.geometry, &s.state.scale, &change) {
            log::error!("[slider] redraw failed: {:?}", e);
        }
        (change, s.on_change.clone())
    };
    let arg = JsValue::from_f64(change.value);
    for cb in &callbacks {
        if let Err(e) = cb.call1(&JsValue::NULL, &arg) {
            log::warn!("[slider] onChange callback threw: {:?}", e);
        }
    }
}
