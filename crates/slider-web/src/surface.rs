//! Shared drawing surfaces, one per host element.
//!
//! The first slider mounted on a host builds the `<svg>` plus the legend and
//! slider containers; later sliders on the same host reuse them. Host
//! identity is tracked here instead of being read back from marker classes.

use crate::dom::{self, js_err};
use fnv::FnvHashMap;
use slider_core::{
    view_box, HostId, SurfaceClaim, SurfaceRegistry, SurfaceRelease, CLASS_HOST,
    CLASS_INITIALIZED, CLASS_LEGEND_CONTAINER, CLASS_SLIDER_CONTAINER, CLASS_SVG,
};
use std::cell::RefCell;
use web_sys as web;

#[derive(Clone)]
pub struct SurfaceNodes {
    pub svg: web::Element,
    pub legend: web::Element,
    pub slider_container: web::Element,
}

#[derive(Default)]
struct HostTable {
    registry: SurfaceRegistry,
    hosts: Vec<(web::Element, HostId)>,
    surfaces: FnvHashMap<HostId, SurfaceNodes>,
}

impl HostTable {
    fn host_id(&mut self, host: &web::Element) -> HostId {
        if let Some((_, id)) = self.hosts.iter().find(|(el, _)| el == host) {
            return *id;
        }
        let id = self.registry.allocate_host();
        self.hosts.push((host.clone(), id));
        id
    }
}

thread_local! {
    static HOSTS: RefCell<HostTable> = RefCell::new(HostTable::default());
}

/// Find or create the surface on `host`, growing it to at least
/// `required_size`.
pub fn acquire(
    document: &web::Document,
    host: &web::Element,
    required_size: f64,
) -> anyhow::Result<(HostId, SurfaceNodes)> {
    HOSTS.with(|table| {
        let mut table = table.borrow_mut();
        let id = table.host_id(host);
        match table.registry.claim(id, required_size) {
            SurfaceClaim::Created { size } => {
                let nodes = match create(document, host, size) {
                    Ok(nodes) => nodes,
                    Err(e) => {
                        table.registry.release(id);
                        return Err(e);
                    }
                };
                log::info!("[surface] created on host {:?} size={}", id, size);
                table.surfaces.insert(id, nodes.clone());
                Ok((id, nodes))
            }
            SurfaceClaim::Reused { size, grew } => {
                let Some(nodes) = table.surfaces.get(&id).cloned() else {
                    table.registry.release(id);
                    anyhow::bail!("surface for host {:?} lost its nodes", id);
                };
                if grew {
                    log::info!("[surface] host {:?} grew to {}", id, size);
                    if let Err(e) = set_size(&nodes.svg, size) {
                        table.registry.release(id);
                        return Err(e);
                    }
                }
                Ok((id, nodes))
            }
        }
    })
}

/// Current side length of the surface on a host.
pub fn size(id: HostId) -> Option<f64> {
    HOSTS.with(|table| table.borrow().registry.get(id).map(|r| r.size))
}

/// Drop one slider from its host; the last one out tears the surface down.
pub fn release(id: HostId) {
    HOSTS.with(|table| {
        let mut table = table.borrow_mut();
        if table.registry.release(id) != SurfaceRelease::Emptied {
            return;
        }
        if let Some(nodes) = table.surfaces.remove(&id) {
            nodes.legend.remove();
            nodes.slider_container.remove();
        }
        if let Some(pos) = table.hosts.iter().position(|(_, h)| *h == id) {
            let (host, _) = table.hosts.swap_remove(pos);
            _ = host.class_list().remove_2(CLASS_HOST, CLASS_INITIALIZED);
        }
        log::info!("[surface] host {:?} released", id);
    });
}

fn create(
    document: &web::Document,
    host: &web::Element,
    size: f64,
) -> anyhow::Result<SurfaceNodes> {
    let svg = dom::create_svg(document, "svg")?;
    set_size(&svg, size)?;
    svg.class_list().add_1(CLASS_SVG).map_err(js_err)?;

    let legend = dom::create_div(document, CLASS_LEGEND_CONTAINER)?;
    let slider_container = dom::create_div(document, CLASS_SLIDER_CONTAINER)?;
    slider_container.append_child(&svg).map_err(js_err)?;

    host.append_child(&legend).map_err(js_err)?;
    host.append_child(&slider_container).map_err(js_err)?;
    host.class_list()
        .add_2(CLASS_HOST, CLASS_INITIALIZED)
        .map_err(js_err)?;

    Ok(SurfaceNodes {
        svg,
        legend,
        slider_container,
    })
}

fn set_size(svg: &web::Element, size: f64) -> anyhow::Result<()> {
    let [x, y, w, h] = view_box(size);
    dom::set_attributes(
        svg,
        &[
            ("viewBox", format!("{} {} {} {}", x, y, w, h)),
            ("width", size.to_string()),
            ("height", size.to_string()),
        ],
    )
}
