use crate::dom::js_err;
use slider_core::SliderConfig;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Options object accepted by the `RadialSlider` constructor:
/// `{ container, radius, color, minValue, maxValue, step, initialValue?, label?, draggable? }`
pub struct MountOptions {
    pub container: web::Element,
    pub config: SliderConfig,
}

pub fn parse(options: &JsValue) -> anyhow::Result<MountOptions> {
    if !options.is_object() {
        anyhow::bail!("slider options must be an object");
    }
    let container = field(options, "container")?
        .dyn_into::<web::Element>()
        .map_err(|_| anyhow::anyhow!("`container` must be a DOM element"))?;

    let config = SliderConfig {
        radius: number(options, "radius")?,
        color: string(options, "color")?
            .ok_or_else(|| anyhow::anyhow!("missing `color`"))?,
        min_value: number(options, "minValue")?,
        max_value: number(options, "maxValue")?,
        step: number(options, "step")?,
        initial_value: opt_number(options, "initialValue")?,
        label: string(options, "label")?,
        draggable: opt_bool(options, "draggable")?.unwrap_or(true),
    };
    Ok(MountOptions { container, config })
}

fn field(obj: &JsValue, key: &str) -> anyhow::Result<JsValue> {
    js_sys::Reflect::get(obj, &JsValue::from_str(key)).map_err(js_err)
}

fn is_absent(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn number(obj: &JsValue, key: &str) -> anyhow::Result<f64> {
    opt_number(obj, key)?.ok_or_else(|| anyhow::anyhow!("missing `{}`", key))
}

fn opt_number(obj: &JsValue, key: &str) -> anyhow::Result<Option<f64>> {
    let v = field(obj, key)?;
    if is_absent(&v) {
        return Ok(None);
    }
    v.as_f64()
        .map(Some)
        .ok_or_else(|| anyhow::anyhow!("`{}` must be a number", key))
}

fn string(obj: &JsValue, key: &str) -> anyhow::Result<Option<String>> {
    let v = field(obj, key)?;
    if is_absent(&v) {
        return Ok(None);
    }
    v.as_string()
        .map(Some)
        .ok_or_else(|| anyhow::anyhow!("`{}` must be a string", key))
}

fn opt_bool(obj: &JsValue, key: &str) -> anyhow::Result<Option<bool>> {
    let v = field(obj, key)?;
    if is_absent(&v) {
        return Ok(None);
    }
    v.as_bool()
        .map(Some)
        .ok_or_else(|| anyhow::anyhow!("`{}` must be a boolean", key))
}
