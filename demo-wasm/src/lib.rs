//! Browser session for the twangy string toy.
//!
//! JS owns the thin glue (event listeners and `requestAnimationFrame`)
//! and forwards everything here: pointer coordinates, the per-frame tick,
//! and resize notifications. Everything else (simulation, SVG paths, spark
//! canvas, audio) lives on this side of the boundary.

mod audio;
mod render;

use audio::AudioBackend;
use render::{SparkCanvas, StringPath};
use twangy::{PluckObserver, Region, SparkField, StringBoard, ToneSink, Tuning, Vec2};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Element, Window};

const SEGMENTS: usize = 40;

/// Release side-effects: tone cue plus spark burst, fired from the board's
/// observer seam so the pointer state machine stays side-effect-free.
struct SideEffects<'a> {
    audio: &'a mut AudioBackend,
    sparks: &'a mut SparkField<f32>,
    colors: &'a [[u8; 3]],
}

impl PluckObserver<f32> for SideEffects<'_> {
    fn on_pluck(&mut self, string: usize, at: Vec2<f32>) {
        self.audio.emit(string);
        let color = self.colors.get(string).copied().unwrap_or([255, 255, 255]);
        self.sparks.burst(at, color);
    }
}

/// One interactive session: the board, its render resources, the spark
/// overlay, and the audio backend.
#[wasm_bindgen]
pub struct StringToy {
    board: StringBoard<f32>,
    paths: Vec<StringPath>,
    colors: Vec<[u8; 3]>,
    strings: Vec<Element>,
    sparks: SparkField<f32>,
    canvas: SparkCanvas,
    audio: AudioBackend,
}

#[wasm_bindgen]
impl StringToy {
    /// Build a synth-variant toy over the `.string` elements inside the
    /// given container. All render resources are created here, up front;
    /// the frame loop never allocates DOM nodes.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str) -> Result<StringToy, JsValue> {
        Self::build(container_id, None)
    }

    /// Sample-variant toy: one audio asset URL per string, fetched and
    /// decoded after the first user gesture.
    pub fn with_samples(container_id: &str, sample_urls: js_sys::Array) -> Result<StringToy, JsValue> {
        let urls = sample_urls
            .iter()
            .filter_map(|v| v.as_string())
            .collect::<Vec<_>>();
        Self::build(container_id, Some(urls))
    }

    fn build(container_id: &str, sample_urls: Option<Vec<String>>) -> Result<StringToy, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| JsValue::from_str("string container not found"))?;

        let nodes = container.query_selector_all(".string")?;
        let mut strings = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            if let Some(node) = nodes.item(i) {
                strings.push(node.unchecked_into::<Element>());
            }
        }
        if strings.is_empty() {
            return Err(JsValue::from_str("no .string elements in container"));
        }

        let mut paths = Vec::with_capacity(strings.len());
        for string in &strings {
            paths.push(StringPath::build(&window, &document, string)?);
        }
        let colors: Vec<[u8; 3]> = paths.iter().map(|p| p.color()).collect();

        let mut board = StringBoard::new(strings.len(), SEGMENTS, Tuning::new())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        board
            .set_regions(&measure_regions(&strings))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let canvas = SparkCanvas::build(&document)?;
        size_canvas_to_viewport(&window, &canvas)?;

        let toy = StringToy {
            board,
            paths,
            colors,
            strings,
            sparks: SparkField::new(js_sys::Date::now() as u64),
            canvas,
            audio: AudioBackend::new(sample_urls),
        };
        toy.draw_strings();
        Ok(toy)
    }

    /// Pointer pressed. Also the autoplay-policy gate: the audio backend
    /// initializes on the first press and never again.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.audio.ensure_init();
        let mut fx = SideEffects {
            audio: &mut self.audio,
            sparks: &mut self.sparks,
            colors: &self.colors,
        };
        self.board.pointer_down(x, y, &mut fx);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let mut fx = SideEffects {
            audio: &mut self.audio,
            sparks: &mut self.sparks,
            colors: &self.colors,
        };
        self.board.pointer_move(x, y, &mut fx);
    }

    pub fn pointer_up(&mut self) {
        let mut fx = SideEffects {
            audio: &mut self.audio,
            sparks: &mut self.sparks,
            colors: &self.colors,
        };
        self.board.pointer_up(&mut fx);
    }

    /// One display frame: integrate, redraw curves, age and draw sparks.
    ///
    /// Subsystems fail independently; a bad path or canvas call logs a
    /// warning and the loop carries on.
    pub fn frame(&mut self) {
        let mut fx = SideEffects {
            audio: &mut self.audio,
            sparks: &mut self.sparks,
            colors: &self.colors,
        };
        self.board.tick(&mut fx);

        self.draw_strings();

        self.sparks.tick();
        if let Err(e) = self.canvas.draw(self.sparks.sparks()) {
            console::warn_2(&"spark draw failed:".into(), &e);
        }
    }

    /// Viewport changed: re-measure string boxes and reset the raster to
    /// the new viewport size. Runs synchronously; the loop keeps going.
    pub fn resize(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = size_canvas_to_viewport(&window, &self.canvas) {
            console::warn_2(&"canvas resize failed:".into(), &e);
        }

        let regions = measure_regions(&self.strings);
        for (path, region) in self.paths.iter_mut().zip(regions.iter()) {
            path.set_box(region.width, region.height);
        }
        if let Err(e) = self.board.set_regions(&regions) {
            console::warn_1(&JsValue::from_str(&e.to_string()));
        }
    }

    pub fn string_count(&self) -> usize {
        self.board.string_count()
    }

    fn draw_strings(&self) {
        for (index, path) in self.paths.iter().enumerate() {
            if let Err(e) = path.update(self.board.chain(index).points()) {
                console::warn_2(&"string path update failed:".into(), &e);
            }
        }
    }
}

fn measure_regions(strings: &[Element]) -> Vec<Region<f32>> {
    strings
        .iter()
        .map(|s| {
            let rect = s.get_bounding_client_rect();
            Region::new(
                rect.left() as f32,
                rect.top() as f32,
                rect.width() as f32,
                rect.height() as f32,
            )
        })
        .collect()
}

fn size_canvas_to_viewport(window: &Window, canvas: &SparkCanvas) -> Result<(), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0) as u32;
    let height = window.inner_height()?.as_f64().unwrap_or(0.0) as u32;
    canvas.resize(width, height);
    Ok(())
}
