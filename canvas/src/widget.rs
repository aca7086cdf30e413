//! The JavaScript-facing widget.
//!
//! Usage from the host page:
//!
//! ```js
//! const widget = new TrilemmaWidget({ radius: 220, constraint: "excludeVertices" });
//! widget.setOnRatios((economics, reliability, sustainability) => store.set(...));
//! widget.attach(canvas);
//! canvas.onpointerdown = (e) => widget.pointerDown(e.clientX, e.clientY);
//! ```

use js_sys::Function;
use tracing::{debug, warn};
use trilemma::layout;
use trilemma::{Action, Engine, Point, TrilemmaConfig, TrilemmaError};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::surface::CanvasSurface;

#[wasm_bindgen]
pub struct TrilemmaWidget {
    engine: Engine<CanvasSurface>,
    on_ratios: Option<Function>,
}

#[wasm_bindgen]
impl TrilemmaWidget {
    /// Build a widget from a plain config object. `undefined` or `null` uses defaults.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the object does not deserialize or fails validation.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<TrilemmaWidget, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            TrilemmaConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        let engine = Engine::new(config).map_err(to_js)?;
        Ok(Self { engine, on_ratios: None })
    }

    /// Build a widget from a JSON config string.
    ///
    /// # Errors
    ///
    /// Returns `Err` on malformed JSON or a rejected configuration.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<TrilemmaWidget, JsValue> {
        let config = TrilemmaConfig::from_json(json).map_err(to_js)?;
        let engine = Engine::new(config).map_err(to_js)?;
        Ok(Self { engine, on_ratios: None })
    }

    /// Size `canvas` to the layout and start drawing on it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn attach(&mut self, canvas: HtmlCanvasElement) -> Result<(), JsValue> {
        let surface = CanvasSurface::new(canvas)?;
        let layout = self.engine.core.layout();
        surface.resize(layout.width, layout.height);
        self.engine.attach(surface);
        Ok(())
    }

    /// Stop drawing. Returns `false` if nothing was attached.
    pub fn detach(&mut self) -> bool {
        self.engine.detach().is_some()
    }

    /// Register the callback invoked as `(economics, reliability, sustainability)`
    /// when the marker enters a region with a different target.
    #[wasm_bindgen(js_name = setOnRatios)]
    pub fn set_on_ratios(&mut self, callback: Option<Function>) {
        self.on_ratios = callback;
    }

    /// # Errors
    ///
    /// Propagates an exception thrown by the ratios callback.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, client_x: f64, client_y: f64) -> Result<(), JsValue> {
        let pt = self.to_surface(client_x, client_y);
        let actions = self.engine.on_pointer_down(pt);
        self.dispatch(&actions)
    }

    /// # Errors
    ///
    /// Propagates an exception thrown by the ratios callback.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) -> Result<(), JsValue> {
        let pt = self.to_surface(client_x, client_y);
        let actions = self.engine.on_pointer_move(pt);
        self.dispatch(&actions)
    }

    /// # Errors
    ///
    /// Propagates an exception thrown by the ratios callback.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, client_x: f64, client_y: f64) -> Result<(), JsValue> {
        let pt = self.to_surface(client_x, client_y);
        let actions = self.engine.on_pointer_up(pt);
        self.dispatch(&actions)
    }

    /// Redraw the current state.
    pub fn render(&mut self) {
        self.engine.render();
    }

    /// Current ratios as `{ economics, reliability, sustainability }`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    pub fn ratios(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.engine.core.ratios())?)
    }

    /// Current region id, e.g. `"tip1"` or `"center"`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    pub fn region(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.engine.core.region())?)
    }

    /// Surface size, center and text/arrow anchors.
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    pub fn layout(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(self.engine.core.layout())?)
    }

    /// Rotation in degrees of the arrow the host draws at `layout().arrowAnchors[index]`.
    #[wasm_bindgen(js_name = arrowRotation)]
    #[must_use]
    pub fn arrow_rotation(index: usize) -> f64 {
        layout::arrow_rotation(index)
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.engine.core.layout().width
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.engine.core.layout().height
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.engine.core.drag_state().is_dragging()
    }
}

impl TrilemmaWidget {
    /// Without a surface the coordinates are taken as already surface-relative.
    fn to_surface(&self, client_x: f64, client_y: f64) -> Point {
        match self.engine.surface() {
            Some(surface) => surface.client_to_surface(client_x, client_y),
            None => Point::new(client_x, client_y),
        }
    }

    fn dispatch(&self, actions: &[Action]) -> Result<(), JsValue> {
        for action in actions {
            let Action::RatiosChanged(r) = action else {
                continue;
            };
            let Some(callback) = &self.on_ratios else {
                debug!("ratios changed with no callback registered");
                continue;
            };
            let args = [r.economics, r.reliability, r.sustainability].map(JsValue::from_f64);
            if let Err(e) = callback.call3(&JsValue::NULL, &args[0], &args[1], &args[2]) {
                warn!(error = ?e, "ratios callback threw");
                return Err(e);
            }
        }
        Ok(())
    }
}

fn to_js(e: TrilemmaError) -> JsValue {
    JsValue::from_str(&format!("{}: {e}", e.error_code()))
}
