//! web-sys drawing: per-string SVG paths and the spark canvas overlay.

use twangy::{path_data, PluckPoint, Spark};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement, Window};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// One string's persistent path resource.
///
/// Built once during setup; the frame loop only rewrites the `d` attribute.
/// Stroke color and width are sampled from the element's computed style at
/// build time and fixed for the resource's lifetime.
pub struct StringPath {
    path: Element,
    width: f32,
    height: f32,
    color: [u8; 3],
}

impl StringPath {
    /// Replace the element's background with an SVG path stroked in the
    /// same color, sized to the element's current box.
    pub fn build(window: &Window, document: &Document, string: &Element) -> Result<Self, JsValue> {
        let rect = string.get_bounding_client_rect();
        let style = window
            .get_computed_style(string)?
            .ok_or_else(|| JsValue::from_str("string element has no computed style"))?;
        let stroke = style.get_property_value("background-color")?;
        let z_index = style.get_property_value("z-index")?;

        let svg = document.create_element_ns(Some(SVG_NS), "svg")?;
        svg.set_attribute("width", "100%")?;
        svg.set_attribute("height", "100%")?;
        svg.set_attribute(
            "style",
            &format!("position:absolute;left:0;top:0;overflow:visible;z-index:{z_index}"),
        )?;

        let path = document.create_element_ns(Some(SVG_NS), "path")?;
        path.set_attribute("stroke", &stroke)?;
        path.set_attribute("stroke-width", &format!("{}", rect.height()))?;
        path.set_attribute("fill", "none")?;

        if let Some(html) = string.dyn_ref::<HtmlElement>() {
            html.style().set_property("background-color", "transparent")?;
        }
        svg.append_child(&path)?;
        string.append_child(&svg)?;

        Ok(StringPath {
            path,
            width: rect.width() as f32,
            height: rect.height() as f32,
            color: parse_rgb(&stroke).unwrap_or([255, 255, 255]),
        })
    }

    /// Rewrite the path from the chain's current points.
    pub fn update(&self, points: &[PluckPoint<f32>]) -> Result<(), JsValue> {
        self.path
            .set_attribute("d", &path_data(points, self.width, self.height))
    }

    /// Track the element's box after a viewport resize.
    pub fn set_box(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn color(&self) -> [u8; 3] {
        self.color
    }
}

/// Full-viewport raster overlay the sparks are drawn onto.
pub struct SparkCanvas {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl SparkCanvas {
    pub fn build(document: &Document) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_attribute(
            "style",
            "position:fixed;left:0;top:0;pointer-events:none;z-index:1000",
        )?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.append_child(&canvas)?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;

        Ok(SparkCanvas { canvas, ctx })
    }

    /// Reset the raster to the viewport size. Drops drawn content; the next
    /// frame redraws from scratch.
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Clear and redraw every spark as a filled circle, opacity = life.
    pub fn draw(&self, sparks: &[Spark<f32>]) -> Result<(), JsValue> {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        for s in sparks {
            let [r, g, b] = s.color;
            self.ctx.set_global_alpha(s.life.clamp(0.0, 1.0) as f64);
            self.ctx.set_fill_style_str(&format!("rgb({r}, {g}, {b})"));
            self.ctx.begin_path();
            self.ctx.arc(
                s.pos.x as f64,
                s.pos.y as f64,
                s.size as f64,
                0.0,
                std::f64::consts::TAU,
            )?;
            self.ctx.fill();
        }
        self.ctx.set_global_alpha(1.0);
        Ok(())
    }
}

/// Parse a computed `rgb(...)`/`rgba(...)` color into its byte components.
fn parse_rgb(css: &str) -> Option<[u8; 3]> {
    let css = css.trim();
    let inner = css.strip_prefix("rgba").or_else(|| css.strip_prefix("rgb"))?;
    let inner = inner.trim().strip_prefix('(')?.strip_suffix(')')?;
    let mut channels = inner.split(',');
    let mut out = [0u8; 3];
    for slot in &mut out {
        *slot = channels.next()?.trim().parse::<f32>().ok()? as u8;
    }
    Some(out)
}
