//! Shared page shell configuration.
//!
//! Every full page renders inside `templates/base.html`; the [`Shell`]
//! struct is the knobs that template recognizes. The shell holds no business
//! state of its own - the cart badge is read once per render from the store.

use crate::compose;
use crate::state::AppState;

/// Content-region sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Default,
    FullWidth,
    Centered,
}

impl Layout {
    /// CSS class applied to the content region.
    #[must_use]
    pub const fn content_class(&self) -> &'static str {
        match self {
            Self::Default => "content content-default",
            Self::FullWidth => "content content-full-width",
            Self::Centered => "content content-centered",
        }
    }
}

/// Configuration for the shared header/footer shell.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Optional heading injected below the header bar.
    pub page_title: Option<String>,
    /// Whether the cart trigger and badge are shown. Defaults to true.
    pub show_cart: bool,
    pub layout: Layout,
    /// Badge text, already capped and zero-suppressed.
    pub cart_badge: Option<String>,
    /// Absolute canonical URL for the page being rendered.
    pub canonical_url: String,
}

impl Shell {
    /// Build the shell for a request, reading the current cart total.
    /// `path` is the page's canonical path (query-free).
    #[must_use]
    pub fn new(state: &AppState, path: &str) -> Self {
        Self {
            page_title: None,
            show_cart: true,
            layout: Layout::default(),
            cart_badge: compose::cart_badge(state.cart().total_items()),
            canonical_url: state.config().canonical_url(path),
        }
    }

    /// Set the page title.
    #[must_use]
    pub fn page_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = Some(title.into());
        self
    }

    /// Toggle the cart trigger.
    #[must_use]
    pub const fn show_cart(mut self, show: bool) -> Self {
        self.show_cart = show;
        self
    }

    /// Set the content-region layout.
    #[must_use]
    pub const fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }
}
