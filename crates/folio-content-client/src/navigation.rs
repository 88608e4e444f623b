//! Navigation-menu payload fetch.
//!
//! The payload is returned raw; turning it into a tree is the job of
//! [`folio_menu::MenuTreeBuilder`], which accepts every shape this call can
//! return, `null` included.

use serde_json::Value;

use crate::client::ContentClient;

impl ContentClient {
    /// Fetch the raw payload of one navigation menu.
    ///
    /// Calls `GET {menu_root}/{menu_id}`. Any failure yields `Value::Null`.
    pub async fn fetch_menu(&self, menu_id: u64) -> Value {
        let endpoint = format!("GET /menus/{menu_id}");
        let result = match self.menu_url(&menu_id.to_string(), &endpoint) {
            Ok(url) => self.get_json::<Value>(&endpoint, &url, &[]).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(menu_id, status = ?e.status(), error = %e, "menu fetch failed, returning empty menu");
                Value::Null
            }
        }
    }
}
