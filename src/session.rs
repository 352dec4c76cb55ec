use crate::core::preloader::SessionFlags;
use web_sys as web;

/// `sessionStorage`, or nothing when the browser refuses access to it.
pub struct BrowserSession(Option<web::Storage>);

impl BrowserSession {
    pub fn open(window: &web::Window) -> Self {
        let storage = window.session_storage().ok().flatten();
        if storage.is_none() {
            log::debug!("sessionStorage unavailable; every load counts as the first");
        }
        Self(storage)
    }
}

impl SessionFlags for BrowserSession {
    fn get(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.0 {
            _ = storage.set_item(key, value);
        }
    }
}
