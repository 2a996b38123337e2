// crates/ayayron-types/src/components.rs
// Render functions for the navigation shell: RootShell, AppNavBar, Router, Homepage

use crate::config::{NavBarConfig, ShellConfig};
use crate::routes::{Location, RouteTable, View};
use crate::view::{Element, ViewNode};

// Component boundary names, shared with the Leptos host
pub const ROOT_SHELL: &str = "App";
pub const NAVBAR: &str = "AppNavBar";
pub const ROUTER: &str = "Routes";
pub const HOMEPAGE: &str = "Homepage";

/// Class lists used by both the rendered model and the Leptos components
pub mod classes {
    pub const SHELL: &str = "App container";
    pub const NAVBAR: &str = "AppNavBar";
    pub const NAV: &str = "navbar navbar-default";
    pub const NAV_CONTAINER: &str = "container-fluid";
    pub const NAV_HEADER: &str = "navbar-header";
    pub const BRAND: &str = "navbar-brand";
    pub const SR_ONLY: &str = "sr-only";
    pub const ICON_BAR: &str = "icon-bar";
    pub const HOMEPAGE: &str = "Homepage";
    pub const LANDER: &str = "lander";
}

/// Explicit render inputs. The router reads the location from here instead of
/// from ambient browser state.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub location: Location,
}

impl RenderContext {
    pub fn at(path: &str) -> Self {
        Self {
            location: Location::parse(path),
        }
    }
}

/// A renderable unit: produces a view description for the given context.
pub trait Render {
    fn render(&self, ctx: &RenderContext) -> ViewNode;
}

// ============================================================================
// Navigation Bar
// ============================================================================

/// Collapse state owned by the navbar alone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavBarState {
    pub expanded: bool,
}

impl NavBarState {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Called when a navbar entry is selected
    pub fn select(&mut self, collapse_on_select: bool) {
        if collapse_on_select {
            self.expanded = false;
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }

    /// Bootstrap class list for the collapse toggle button
    pub fn toggle_class(&self) -> &'static str {
        if self.expanded {
            "navbar-toggle"
        } else {
            "navbar-toggle collapsed"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    config: NavBarConfig,
    state: NavBarState,
}

impl NavBar {
    /// Target of the brand link
    pub const BRAND_HREF: &'static str = "/";
    pub const TOGGLE_LABEL: &'static str = "Toggle navigation";
    pub const ICON_BARS: usize = 3;

    pub fn new(config: NavBarConfig) -> Self {
        Self {
            config,
            state: NavBarState::default(),
        }
    }

    pub fn brand(&self) -> &str {
        &self.config.brand
    }

    pub fn collapse_on_select(&self) -> bool {
        self.config.collapse_on_select
    }

    pub fn state(&self) -> NavBarState {
        self.state
    }

    pub fn toggle(&mut self) {
        self.state.toggle();
    }

    pub fn select_brand(&mut self) {
        self.state.select(self.config.collapse_on_select);
    }
}

impl Render for NavBar {
    fn render(&self, _ctx: &RenderContext) -> ViewNode {
        let mut toggle = Element::new("button")
            .attr("type", "button")
            .class(self.state.toggle_class())
            .attr("aria-expanded", self.state.aria_expanded())
            .child(Element::new("span").class(classes::SR_ONLY).text(Self::TOGGLE_LABEL));
        for _ in 0..Self::ICON_BARS {
            toggle = toggle.child(Element::new("span").class(classes::ICON_BAR));
        }

        let brand = Element::new("span").class(classes::BRAND).child(
            Element::new("a")
                .attr("href", Self::BRAND_HREF)
                .text(self.brand()),
        );

        let navbar = Element::new("div").class(classes::NAVBAR).child(
            Element::new("nav").class(classes::NAV).child(
                Element::new("div").class(classes::NAV_CONTAINER).child(
                    Element::new("div")
                        .class(classes::NAV_HEADER)
                        .child(brand)
                        .child(toggle),
                ),
            ),
        );

        ViewNode::component(NAVBAR, navbar)
    }
}

// ============================================================================
// Router
// ============================================================================

#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    homepage: Homepage,
}

impl Router {
    pub fn new(table: RouteTable, homepage: Homepage) -> Self {
        Self { table, homepage }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn homepage(&self) -> &Homepage {
        &self.homepage
    }

    /// View of the first route matching `location`, if any
    pub fn select(&self, location: &Location) -> Option<View> {
        self.table.match_location(location).map(|route| route.view)
    }

    fn render_view(&self, view: View, ctx: &RenderContext) -> ViewNode {
        match view {
            View::Homepage => self.homepage.render(ctx),
        }
    }
}

impl Render for Router {
    /// First matching route wins; no match renders an empty region.
    fn render(&self, ctx: &RenderContext) -> ViewNode {
        let output = match self.select(&ctx.location) {
            Some(view) => self.render_view(view, ctx),
            None => ViewNode::Empty,
        };
        ViewNode::component(ROUTER, output)
    }
}

// ============================================================================
// Homepage
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homepage {
    heading: String,
}

impl Homepage {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
        }
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }
}

impl Render for Homepage {
    fn render(&self, _ctx: &RenderContext) -> ViewNode {
        ViewNode::component(
            HOMEPAGE,
            Element::new("div").class(classes::HOMEPAGE).child(
                Element::new("div")
                    .class(classes::LANDER)
                    .child(Element::new("h1").text(self.heading())),
            ),
        )
    }
}

// ============================================================================
// Root Shell
// ============================================================================

/// Fixed layout: navbar above the router output
#[derive(Debug, Clone)]
pub struct RootShell {
    pub navbar: NavBar,
    pub router: Router,
}

impl RootShell {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            navbar: NavBar::new(config.navbar.clone()),
            router: Router::new(
                RouteTable::default_table(),
                Homepage::new(config.navbar.brand.clone()),
            ),
        }
    }
}

impl Default for RootShell {
    fn default() -> Self {
        Self::new(&ShellConfig::default())
    }
}

impl Render for RootShell {
    fn render(&self, ctx: &RenderContext) -> ViewNode {
        ViewNode::component(
            ROOT_SHELL,
            Element::new("div")
                .class(classes::SHELL)
                .child(self.navbar.render(ctx))
                .child(self.router.render(ctx)),
        )
    }
}
