//! Browser binding for the trilemma diagram.
//!
//! Compiled to WebAssembly. The host page creates a [`widget::TrilemmaWidget`],
//! attaches it to a `<canvas>`, forwards pointer events in client coordinates,
//! and registers a callback that receives the three ratios whenever the marker
//! enters a different region. All geometry, classification and drag logic lives
//! in the `trilemma` crate; this crate only paints and translates coordinates.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`surface`] | [`surface::CanvasSurface`], the `RenderSink` over a 2D context |
//! | [`widget`] | The `#[wasm_bindgen]` widget exported to JavaScript |

pub mod surface;
pub mod widget;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;
use wasm_bindgen::prelude::*;

/// Route `tracing` output and panics to the browser console.
///
/// `filter` is an `EnvFilter` directive such as `"trilemma=debug"`; `info`
/// when omitted. Calling this more than once keeps the first subscriber.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(filter: Option<String>) {
    console_error_panic_hook::set_once();

    let filter = EnvFilter::new(filter.as_deref().unwrap_or("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);

    if let Err(e) = tracing_subscriber::registry().with(fmt_layer).try_init() {
        tracing::debug!(error = %e, "logging already initialised");
    }
}
