//! Front of House Productions "coming soon" site, rendered by Dioxus desktop.
//!
//! [`SiteApp`] opens the window and hands an [`AppContext`] to the component tree;
//! everything stateful lives in `foh-kernel`.

mod app;
pub mod components;
mod context;
mod styles;
mod theme;

pub use app::App;
pub use context::AppContext;
pub use styles::stylesheet;
pub use theme::{OsPreference, ThemeProvider, ThemeToggle};

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use foh_kernel::seo::Metadata;

#[derive(Debug)]
pub struct SiteApp {
    title: String,
    width: f64,
    height: f64,
    context: AppContext,
}

impl SiteApp {
    /// Window title and size come from the context's config.
    #[must_use]
    pub fn new(context: AppContext) -> Self {
        let title = Metadata::from_site(&context.config.site).default_title;
        let (width, height) = (context.config.window.width, context.config.window.height);
        Self { title, width, height, context }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// `<head>` markup injected into the webview: SEO tags plus the site stylesheet.
    #[must_use]
    pub fn head(&self) -> String {
        let metadata = Metadata::from_site(&self.context.config.site);
        format!("{}<style>{}</style>", metadata.head_html(), stylesheet(&self.context.config.site))
    }

    /// The entry point for launching the app
    pub fn launch(self) {
        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(LogicalSize { width: self.width, height: self.height });

        let cfg = Config::default().with_window(window).with_custom_head(self.head());

        tracing::info!(title = %self.title, "Launching site window");
        LaunchBuilder::desktop().with_cfg(cfg).with_context(self.context).launch(App);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foh_kernel::persistence::MemoryThemeStore;
    use foh_kernel::prelude::AppConfig;
    use std::sync::Arc;

    fn app() -> SiteApp {
        SiteApp::new(AppContext::new(AppConfig::default(), Arc::new(MemoryThemeStore::new())))
    }

    #[test]
    fn defaults_come_from_config() {
        let app = app();
        assert_eq!(app.title(), "Front of House Productions - Coming Soon");
        assert_eq!(app.size(), (1200.0, 800.0));
    }

    #[test]
    fn builder_overrides() {
        let app = app().with_title("Preview").with_size(640.0, 480.0);
        assert_eq!(app.title(), "Preview");
        assert_eq!(app.size(), (640.0, 480.0));
    }

    #[test]
    fn head_carries_metadata_and_styles() {
        let head = app().head();
        assert!(head.contains(r#"<meta property="og:site_name" content="Front of House Productions">"#));
        assert!(head.contains("<style>"));
        assert!(head.contains("@keyframes pop-in"));
        assert!(head.contains("--color-primary"));
    }
}
