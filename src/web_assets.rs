use rust_embed::RustEmbed;

/// The frontend (`src/ui`) is embedded into the binary.
#[derive(RustEmbed)]
#[folder = "src/ui"]
#[include = "*.html"]
#[include = "*.css"]
#[include = "*.js"]
pub struct UiAssets;

const STYLE_MARKER: &str = "<!-- inline:style.css -->";
const SCRIPT_MARKER: &str = "<!-- inline:app.js -->";

/// Returns the contents of an embedded asset as UTF-8 text.
pub fn load_text(path: &str) -> Option<String> {
    UiAssets::get(path.trim_start_matches('/'))
        .map(|file| String::from_utf8_lossy(&file.data).into_owned())
}

/// Builds a self-contained `index.html` with the stylesheet and script inlined,
/// suitable for `WebViewBuilder::with_html`.
pub fn index_html() -> Option<String> {
    let html = load_text("index.html")?;
    let style = load_text("style.css").unwrap_or_default();
    let script = load_text("app.js").unwrap_or_default();

    Some(
        html.replace(STYLE_MARKER, &format!("<style>\n{style}\n</style>"))
            .replace(SCRIPT_MARKER, &format!("<script>\n{script}\n</script>")),
    )
}
