use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style names used by templates through the `style` filter.
pub mod names {
    pub const TITLE: &str = "title";
    pub const INDEX: &str = "index";
    pub const MUTED: &str = "muted";
    pub const ACCENT: &str = "accent";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
    pub const READING: &str = "reading";
    pub const FINISHED: &str = "finished";
    pub const WANT: &str = "want";
    pub const LEVEL_NONE: &str = "level_none";
    pub const LEVEL_LIGHT: &str = "level_light";
    pub const LEVEL_MEDIUM: &str = "level_medium";
    pub const LEVEL_HEAVY: &str = "level_heavy";
    pub const TODAY: &str = "today";
}

pub static BOOKMARKR_THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    use names::*;
    HashMap::from([
        (TITLE, Style::new().bold()),
        (INDEX, Style::new().yellow()),
        (MUTED, Style::new().color256(246).italic()),
        (ACCENT, Style::new().magenta().bold()),
        (INFO, Style::new().dim()),
        (SUCCESS, Style::new().green()),
        (WARNING, Style::new().yellow()),
        (ERROR, Style::new().red()),
        (READING, Style::new().cyan()),
        (FINISHED, Style::new().green()),
        (WANT, Style::new().blue()),
        (LEVEL_NONE, Style::new().color256(240)),
        (LEVEL_LIGHT, Style::new().color256(151)),
        (LEVEL_MEDIUM, Style::new().color256(77)),
        (LEVEL_HEAVY, Style::new().color256(28).bold()),
        (TODAY, Style::new().reverse()),
    ])
});

/// Applies the named style; unknown names render the text unchanged.
pub fn apply(name: &str, text: &str, use_color: bool) -> String {
    match BOOKMARKR_THEME.get(name) {
        Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
        _ => text.to_string(),
    }
}
