//! Browser console logging
//!
//! Routes `tracing` events to `console.{log,info,warn,error}` behind a
//! styled `[Wingman]` badge. Call [`init`] once; later calls are ignored.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wasm_bindgen::JsValue;
use web_sys::console;

const BADGE: &str = "[Wingman]";

const BADGE_STYLE: &str = "color: white; background-color: rgb(114, 137, 218); \
    padding: 2px 4px; margin-right: 0.5em; border-radius: 6px; \
    font-family: 'Segoe UI', 'Open Sans', monospace, sans-serif; font-size: 14px; font-weight: 400";

const LOG_STYLE: &str = "background-color: rgb(64, 64, 64)";
const INFO_STYLE: &str = "color: rgb(200, 200, 200); background-color: rgb(90, 90, 90); font-style: italic";
const WARN_STYLE: &str = "color: rgb(225, 225, 225); background-color: rgb(200, 100, 0)";
const ERROR_STYLE: &str = "color: rgb(225, 225, 225); background-color: rgb(175, 64, 64)";

/// Install the console subscriber and the panic hook
pub fn init() {
    console_error_panic_hook::set_once();

    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_level(false)
        .with_target(false)
        .with_writer(ConsoleMakeWriter);
    // Fails only if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(LevelFilter::DEBUG)
        .with(layer)
        .try_init();
}

/// Creates one [`ConsoleWriter`] per event
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> ConsoleWriter {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> ConsoleWriter {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and writes it to the console on drop
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buffer);
        let text = text.trim_end();
        if text.is_empty() {
            return;
        }
        let line = JsValue::from_str(&format!("%c{}%c {}", BADGE, text));
        let badge = JsValue::from_str(BADGE_STYLE);
        match self.level {
            Level::ERROR => console::error_3(&line, &badge, &JsValue::from_str(ERROR_STYLE)),
            Level::WARN => console::warn_3(&line, &badge, &JsValue::from_str(WARN_STYLE)),
            Level::INFO => console::info_3(&line, &badge, &JsValue::from_str(INFO_STYLE)),
            _ => console::log_3(&line, &badge, &JsValue::from_str(LOG_STYLE)),
        }
    }
}
