//! Web Audio backends for tone playback.
//!
//! Two interchangeable strategies behind [`ToneSink`]: an oscillator synth
//! and a decoded-sample player. Context creation is deferred to the first
//! user gesture (autoplay policy), and every failure path degrades to a
//! silent no-op so a broken audio stack never touches the frame loop.

use js_sys::ArrayBuffer;
use std::cell::RefCell;
use std::rc::Rc;
use twangy::{ToneCue, ToneSink};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{console, AudioBuffer, AudioContext, OscillatorType, Response};

/// Tone backend state for one session.
pub enum AudioBackend {
    /// No gesture seen yet; `sample_urls` picks the strategy on init.
    Uninitialized { sample_urls: Option<Vec<String>> },
    Synth(SynthSink),
    Samples(SampleSink),
    /// Context creation failed; every emit is a permanent no-op.
    Unavailable,
}

impl AudioBackend {
    pub fn new(sample_urls: Option<Vec<String>>) -> Self {
        AudioBackend::Uninitialized { sample_urls }
    }

    /// Create the audio context on the first user gesture. Runs at most
    /// once per session; later calls fall through.
    pub fn ensure_init(&mut self) {
        if let AudioBackend::Uninitialized { sample_urls } = self {
            *self = match AudioContext::new() {
                Ok(ctx) => match sample_urls.take() {
                    Some(urls) => AudioBackend::Samples(SampleSink::new(ctx, urls)),
                    None => AudioBackend::Synth(SynthSink::new(ctx)),
                },
                Err(e) => {
                    console::warn_2(&"audio unavailable, tones disabled:".into(), &e);
                    AudioBackend::Unavailable
                }
            };
        }
    }
}

impl ToneSink for AudioBackend {
    fn emit(&mut self, index: usize) {
        match self {
            AudioBackend::Synth(sink) => sink.emit(index),
            AudioBackend::Samples(sink) => sink.emit(index),
            AudioBackend::Uninitialized { .. } | AudioBackend::Unavailable => {}
        }
    }
}

/// Sine synth: one oscillator + gain envelope per cue, fire-and-forget.
pub struct SynthSink {
    ctx: AudioContext,
}

impl SynthSink {
    pub fn new(ctx: AudioContext) -> Self {
        SynthSink { ctx }
    }

    fn play(&self, cue: &ToneCue) -> Result<(), JsValue> {
        let osc = self.ctx.create_oscillator()?;
        let gain = self.ctx.create_gain()?;

        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&self.ctx.destination())?;

        osc.set_type(OscillatorType::Sine);
        osc.frequency().set_value(cue.frequency);

        let now = self.ctx.current_time();
        gain.gain().set_value_at_time(0.0, now)?;
        gain.gain()
            .linear_ramp_to_value_at_time(cue.peak, now + cue.attack as f64)?;
        gain.gain()
            .linear_ramp_to_value_at_time(0.0, now + cue.duration as f64)?;

        osc.start_with_when(now)?;
        osc.stop_with_when(now + cue.duration as f64)?;
        Ok(())
    }
}

impl ToneSink for SynthSink {
    fn emit(&mut self, index: usize) {
        let Some(cue) = ToneCue::for_note(index) else {
            return;
        };
        if let Err(e) = self.play(&cue) {
            console::warn_2(&"tone playback failed:".into(), &e);
        }
    }
}

/// Decoded buffer set, `None` until every entry has resolved. Failed
/// entries stay `None` so one bad asset never silences the rest.
type BufferSet = Rc<RefCell<Option<Vec<Option<AudioBuffer>>>>>;

/// Sample player: fetches and decodes a fixed asset list in the background,
/// publishes the whole set at once, and plays decoded buffers by index.
pub struct SampleSink {
    ctx: AudioContext,
    buffers: BufferSet,
}

impl SampleSink {
    pub fn new(ctx: AudioContext, urls: Vec<String>) -> Self {
        let buffers: BufferSet = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&buffers);
        let decode_ctx = ctx.clone();

        spawn_local(async move {
            let mut decoded = Vec::with_capacity(urls.len());
            for url in &urls {
                decoded.push(match fetch_and_decode(&decode_ctx, url).await {
                    Ok(buffer) => Some(buffer),
                    Err(e) => {
                        console::warn_2(&format!("sample {url} failed to load:").into(), &e);
                        None
                    }
                });
            }
            // One atomic publish after the whole batch has resolved;
            // playback before this point is a silent no-op.
            *slot.borrow_mut() = Some(decoded);
        });

        SampleSink { ctx, buffers }
    }

    fn play(&self, buffer: &AudioBuffer) -> Result<(), JsValue> {
        let source = self.ctx.create_buffer_source()?;
        source.set_buffer(Some(buffer));
        source.connect_with_audio_node(&self.ctx.destination())?;
        source.start()?;
        Ok(())
    }
}

impl ToneSink for SampleSink {
    fn emit(&mut self, index: usize) {
        let borrowed = self.buffers.borrow();
        let Some(set) = borrowed.as_ref() else {
            return; // decode batch still in flight
        };
        let Some(Some(buffer)) = set.get(index) else {
            return; // unknown index or failed entry
        };
        if let Err(e) = self.play(buffer) {
            console::warn_2(&"sample playback failed:".into(), &e);
        }
    }
}

async fn fetch_and_decode(ctx: &AudioContext, url: &str) -> Result<AudioBuffer, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_str(url)).await?.dyn_into()?;
    let data: ArrayBuffer = JsFuture::from(response.array_buffer()?).await?.dyn_into()?;
    JsFuture::from(ctx.decode_audio_data(&data)?).await?.dyn_into()
}
