use crate::dom::{self, js_err};
use slider_core::{
    handle_radius, Geometry, SliderConfig, ValueChange, ValueScale, BASE_STROKE_COLOR,
    CLASS_LEGEND_ITEM, CLASS_LEGEND_LABEL, CLASS_LEGEND_SWATCH, CLASS_LEGEND_VALUE,
    HANDLE_FILL_COLOR, HANDLE_STROKE_COLOR, HANDLE_STROKE_WIDTH, INDICATOR_OPACITY,
    RING_ROTATION_DEG, STROKE_WIDTH,
};
use web_sys as web;

/// SVG and legend nodes owned by one slider.
pub struct RingNodes {
    pub group: web::Element,
    /// Rotated group holding base and indicator rings; the ring-click target.
    pub rings: web::Element,
    pub indicator: web::Element,
    pub handle: web::Element,
    pub legend_item: web::Element,
    pub legend_value: web::Element,
}

pub fn build(
    document: &web::Document,
    svg: &web::Element,
    legend: &web::Element,
    config: &SliderConfig,
    geometry: &Geometry,
    initial: &ValueChange,
) -> anyhow::Result<RingNodes> {
    let group = dom::create_svg(document, "g")?;
    let rings = dom::create_svg(document, "g")?;
    let base = dom::create_svg(document, "circle")?;
    let indicator = dom::create_svg(document, "circle")?;
    let handle = dom::create_svg(document, "circle")?;

    dom::set_attributes(
        &rings,
        &[("transform", format!("rotate({}, 0, 0)", RING_ROTATION_DEG))],
    )?;
    dom::set_attributes(
        &base,
        &[
            ("cx", "0".to_string()),
            ("cy", "0".to_string()),
            ("r", geometry.radius.to_string()),
            ("stroke", BASE_STROKE_COLOR.to_string()),
            ("fill", "none".to_string()),
            ("stroke-width", STROKE_WIDTH.to_string()),
            ("stroke-dasharray", geometry.tick_dasharray()),
        ],
    )?;
    dom::set_attributes(
        &indicator,
        &[
            ("cx", "0".to_string()),
            ("cy", "0".to_string()),
            ("r", geometry.radius.to_string()),
            ("stroke", config.color.clone()),
            ("opacity", INDICATOR_OPACITY.to_string()),
            ("fill", "none".to_string()),
            ("stroke-width", STROKE_WIDTH.to_string()),
            ("stroke-dasharray", geometry.indicator_dasharray(0.0)),
        ],
    )?;
    // Handle lives outside the rotated group so its position is plain
    // screen-oriented (x right, y down).
    dom::set_attributes(
        &handle,
        &[
            ("r", handle_radius().to_string()),
            ("fill", HANDLE_FILL_COLOR.to_string()),
            ("stroke", HANDLE_STROKE_COLOR.to_string()),
            ("stroke-width", HANDLE_STROKE_WIDTH.to_string()),
        ],
    )?;

    rings.append_child(&base).map_err(js_err)?;
    rings.append_child(&indicator).map_err(js_err)?;
    group.append_child(&rings).map_err(js_err)?;
    group.append_child(&handle).map_err(js_err)?;
    svg.append_child(&group).map_err(js_err)?;

    let (legend_item, legend_value) = build_legend_item(document, legend, config)?;

    let nodes = RingNodes {
        group,
        rings,
        indicator,
        handle,
        legend_item,
        legend_value,
    };
    nodes.apply(geometry, &ValueScale::from_config(config), initial)?;
    Ok(nodes)
}

fn build_legend_item(
    document: &web::Document,
    legend: &web::Element,
    config: &SliderConfig,
) -> anyhow::Result<(web::Element, web::Element)> {
    let item = dom::create_div(document, CLASS_LEGEND_ITEM)?;
    let swatch = dom::create_div(document, CLASS_LEGEND_SWATCH)?;
    dom::set_attributes(&swatch, &[("style", format!("background: {}", config.color))])?;
    item.append_child(&swatch).map_err(js_err)?;

    if let Some(label) = &config.label {
        let caption = dom::create_div(document, CLASS_LEGEND_LABEL)?;
        caption.set_text_content(Some(label));
        item.append_child(&caption).map_err(js_err)?;
    }

    let value = dom::create_div(document, CLASS_LEGEND_VALUE)?;
    item.append_child(&value).map_err(js_err)?;
    legend.append_child(&item).map_err(js_err)?;
    Ok((item, value))
}

impl RingNodes {
    /// Move the handle, sweep the indicator and refresh the legend readout.
    pub fn apply(
        &self,
        geometry: &Geometry,
        scale: &ValueScale,
        change: &ValueChange,
    ) -> anyhow::Result<()> {
        dom::set_attributes(
            &self.handle,
            &[
                ("cx", change.handle.x.to_string()),
                ("cy", change.handle.y.to_string()),
            ],
        )?;
        dom::set_attributes(
            &self.indicator,
            &[("stroke-dasharray", geometry.indicator_dasharray(change.angle))],
        )?;
        self.legend_value
            .set_text_content(Some(&scale.format(change.value)));
        Ok(())
    }

    pub fn remove(&self) {
        self.group.remove();
        self.legend_item.remove();
    }
}
