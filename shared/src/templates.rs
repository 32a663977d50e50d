use askama::Template;
use std::fs;
use std::path::Path;

/// Static chart page for the public site.
///
/// The page fetches the history file next to it and draws it with Chart.js.
#[derive(Template)]
#[template(path = "chart_page.html.jinja", escape = "html")]
pub struct ChartPageTemplate {
    pub item_name: String,
    pub unit: String,
    pub unit_title: String,
    pub item_name_js: String,
    pub unit_js: String,
    pub history_file_js: String,
}

/// Encode `value` as a JavaScript string literal that is safe inside `<script>`
fn js_literal(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace('<', "\\u003c")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl ChartPageTemplate {
    /// `history_file` is the history path relative to the page
    pub fn new(item_name: &str, unit: &str, history_file: &str) -> Self {
        Self {
            item_name: item_name.to_string(),
            unit: unit.to_string(),
            unit_title: capitalize(unit),
            item_name_js: js_literal(item_name),
            unit_js: js_literal(unit),
            history_file_js: js_literal(history_file),
        }
    }

    /// History file location as seen from the page at `index_path`.
    ///
    /// Uses the bare file name when both live in the same directory.
    pub fn relative_history_file(index_path: &Path, history_path: &Path) -> String {
        let same_dir = index_path.parent().unwrap_or(Path::new(""))
            == history_path.parent().unwrap_or(Path::new(""));
        match history_path.file_name() {
            Some(name) if same_dir => name.to_string_lossy().into_owned(),
            _ => history_path.to_string_lossy().replace('\\', "/"),
        }
    }

    /// Render and write the page unless it exists and `force` is off.
    ///
    /// Returns whether the file was written.
    pub fn write_if_needed(&self, index_path: &Path, force: bool) -> Result<bool, anyhow::Error> {
        if index_path.exists() && !force {
            tracing::debug!("Chart page {} already exists", index_path.display());
            return Ok(false);
        }

        let html = self.render()?;
        if let Some(parent) = index_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(index_path, html)?;
        tracing::info!("✅ Chart page written to {}", index_path.display());
        Ok(true)
    }
}
