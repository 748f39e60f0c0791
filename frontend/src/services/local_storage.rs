use anyhow::{anyhow, Context, Result};
use family_roster::RecordSlot;
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Record slot backed by `window.localStorage`
#[derive(Debug, Clone)]
pub struct BrowserSlot {
    key: String,
}

impl BrowserSlot {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage(&self) -> Result<Storage> {
        let window = web_sys::window().context("No window available")?;
        window
            .local_storage()
            .map_err(js_error)?
            .context("localStorage is not available")
    }
}

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

impl RecordSlot for BrowserSlot {
    fn read(&self) -> Result<Option<String>> {
        self.storage()?.get_item(&self.key).map_err(js_error)
    }

    fn write(&self, raw: &str) -> Result<()> {
        self.storage()?.set_item(&self.key, raw).map_err(js_error)
    }

    fn remove(&self) -> Result<()> {
        self.storage()?.remove_item(&self.key).map_err(js_error)
    }
}
