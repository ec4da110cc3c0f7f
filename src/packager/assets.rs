//! Static files shipped next to the wasm module
//!
//! Content scripts cannot be ES modules, so the content bootstrap loads the
//! wasm-bindgen glue through a dynamic import of a web-accessible URL.

pub const CONTENT_JS: &str = "content.js";
pub const POPUP_HTML: &str = "popup.html";
pub const POPUP_JS: &str = "popup.js";

const CONTENT_BOOTSTRAP: &str = r#"(async () => {
  const runtime = (globalThis.browser ?? globalThis.chrome).runtime;
  const glue = await import(runtime.getURL("pkg/marble_inspector.js"));
  await glue.default({ module_or_path: runtime.getURL("pkg/marble_inspector_bg.wasm") });
  glue.start_content_script();
})().catch((error) => console.error("Marble inspector failed to start:", error));
"#;

const POPUP_PAGE: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>Marble World Inspector</title>
  </head>
  <body>
    <div id="app"></div>
    <script type="module" src="popup.js"></script>
  </body>
</html>
"#;

const POPUP_BOOTSTRAP: &str = r#"import init, { start_popup } from "./pkg/marble_inspector.js";

await init();
start_popup();
"#;

/// `(relative path, contents)` of every static file.
pub fn static_files() -> [(&'static str, &'static str); 3] {
    [
        (CONTENT_JS, CONTENT_BOOTSTRAP),
        (POPUP_HTML, POPUP_PAGE),
        (POPUP_JS, POPUP_BOOTSTRAP),
    ]
}
