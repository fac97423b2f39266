// DOM-facing constants: markup, styles and the page option hook.

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// Heart graphic
pub const HEART_CLASS: &str = "heart";
pub const HEART_VIEW_BOX: &str = "0 0 512 512";
pub const HEART_PATH: &str = "M462.3 62.6C407.5 15.9 326 24.3 275.7 76.2L256 96.5l-19.7-20.3C186.1 24.3 104.5 15.9 49.7 62.6c-62.8 53.6-66.1 149.8-9.9 207.9l193.5 199.8c12.5 12.9 32.8 12.9 45.3 0l193.5-199.8c56.3-58.1 53-154.3-9.8-207.9z";

// Injected stylesheet rule for every heart
pub const HEART_STYLE: &str =
    ".heart { position: absolute; pointer-events: none; will-change: transform, opacity; }";

// Viewport meta added only when the page has none
pub const VIEWPORT_SELECTOR: &str = r#"meta[name="viewport"]"#;
pub const VIEWPORT_CONTENT: &str =
    "width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no";

// Overlay layer
pub const OVERLAY_Z_INDEX: u32 = 9999;

// `window.heartConfig`
pub const PAGE_CONFIG_KEY: &str = "heartConfig";

pub fn overlay_css() -> String {
    format!(
        "position: fixed; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: {};",
        OVERLAY_Z_INDEX
    )
}
