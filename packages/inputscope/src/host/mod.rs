//! Everything that touches the platform.
//!
//! In the browser this is web-sys. Native builds only exist to run the components under
//! SSR and the hook tests, so there the same names resolve to in-memory or inert stand-ins.

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(not(target_arch = "wasm32"))]
pub use native::*;

use dioxus::document;

const COPY_SCRIPT: &str = r#"
const text = await dioxus.recv();
await navigator.clipboard.writeText(text);
"#;

/// Puts `text` on the clipboard. Failures are logged.
pub fn copy_text(text: String) {
    let eval = document::eval(COPY_SCRIPT);
    if let Err(err) = eval.send(text) {
        tracing::warn!("could not copy to the clipboard: {err}");
    }
}
