pub const DEFAULT_SITE_ROOT: &str = "/var/www/frontend_leema";

pub const DEFAULT_VERSION: &str = "20";

pub const INDEX_PAGE: &str = "index.html";

/// Present in every page that already loads the modern stylesheet.
pub const MODERN_STYLE_MARKER: &str = "tailwindcss.com";

/// Canonical pages for the new design; never flagged for migration.
pub const REFERENCE_PAGES: [&str; 3] = [
    "logs/index.html",
    "reports/index.html",
    "reviews/index.html",
];

pub const VERSION_PARAM_PATTERN: &str = r"\?v=\d+";

pub const HTML_EXTENSION: &str = ".html";

/// Directory names never descended into by the version bump walk.
pub const PRUNED_DIRS: [&str; 3] = ["node_modules", ".git", "__pycache__"];

pub const RULE_WIDTH: usize = 60;
