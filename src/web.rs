use garden_core::{AppConfig, MemoryStore, OrganismCatalog, Session, Sprite};
use garden_data::{EntryKind, FinanceEntry, SaveState};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Browser handle to a garden session. The page owns persistence: it reads
/// `snapshot_json()` after each call and stores it in localStorage.
#[wasm_bindgen]
pub struct GardenSim {
    session: Session<MemoryStore>,
}

#[wasm_bindgen]
impl GardenSim {
    /// Starts from `saved_json` when it parses, otherwise a fresh garden.
    #[wasm_bindgen(constructor)]
    pub fn new(saved_json: Option<String>) -> GardenSim {
        console_error_panic_hook::set_once();

        let config = AppConfig::default();
        let saved = saved_json.and_then(|json| match serde_json::from_str::<SaveState>(&json) {
            Ok(state) => Some(state),
            Err(e) => {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "Ignoring unreadable save: {e}"
                )));
                None
            }
        });
        let store = saved.map(MemoryStore::with_state).unwrap_or_default();
        GardenSim {
            session: Session::open(&config, OrganismCatalog::builtin(), store),
        }
    }

    pub fn coins(&self) -> f64 {
        self.session.coins() as f64
    }

    pub fn purchase(&mut self, organism_id: &str) -> Result<usize, JsValue> {
        self.session.purchase(organism_id).map_err(js_err)
    }

    pub fn water(&mut self, slot: usize) -> Result<bool, JsValue> {
        self.session.water(slot).map_err(js_err)
    }

    pub fn feed(&mut self, slot: usize) -> Result<bool, JsValue> {
        self.session.feed(slot).map_err(js_err)
    }

    /// Coins earned, or 0 for an empty slot.
    pub fn harvest(&mut self, slot: usize) -> Result<f64, JsValue> {
        let outcome = self.session.harvest(slot).map_err(js_err)?;
        Ok(outcome.map_or(0.0, |o| o.coins as f64))
    }

    pub fn remove(&mut self, slot: usize) -> Result<bool, JsValue> {
        Ok(self.session.remove(slot).map_err(js_err)?.is_some())
    }

    /// Coins produced by passive income this tick.
    pub fn tick(&mut self) -> f64 {
        self.session.tick().coins_awarded() as f64
    }

    pub fn add_entry(
        &mut self,
        kind: &str,
        name: &str,
        category: &str,
        amount: f64,
        frequency: &str,
    ) -> usize {
        let entry = FinanceEntry::new(
            EntryKind::parse_lenient(kind),
            name,
            category,
            amount,
            frequency,
        );
        self.session.add_entry(entry)
    }

    pub fn claim_daily(&mut self) -> Result<f64, JsValue> {
        let today = chrono::Utc::now().date_naive();
        Ok(self.session.claim_daily(today).map_err(js_err)? as f64)
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.snapshot()).map_err(js_err)
    }

    /// RGBA8 pixels of the plant in `slot`, or empty when the slot is empty.
    pub fn render_rgba(&self, slot: usize) -> Vec<u8> {
        self.session
            .render(slot)
            .map(|s| s.to_rgba_bytes())
            .unwrap_or_default()
    }

    /// Paints the plant in `slot` as `pixel`-sized squares.
    pub fn draw(&self, ctx: &CanvasRenderingContext2d, slot: usize, pixel: f64) {
        if let Some(canvas) = ctx.canvas() {
            ctx.clear_rect(
                0.0,
                0.0,
                f64::from(canvas.width()),
                f64::from(canvas.height()),
            );
        }
        if let Some(sprite) = self.session.render(slot) {
            draw_sprite(ctx, &sprite, pixel);
        }
    }
}

fn draw_sprite(ctx: &CanvasRenderingContext2d, sprite: &Sprite, pixel: f64) {
    for y in 0..sprite.height() {
        for x in 0..sprite.width() {
            let p = sprite.get(x, y);
            if p.is_transparent() {
                continue;
            }
            ctx.set_fill_style(&JsValue::from_str(&format!(
                "rgba({},{},{},{})",
                p.r,
                p.g,
                p.b,
                f64::from(p.a) / 255.0
            )));
            ctx.fill_rect(x as f64 * pixel, y as f64 * pixel, pixel, pixel);
        }
    }
}
