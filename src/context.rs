//! Application Context
//!
//! Shared UI state provided via Leptos Context API.

use leptos::prelude::*;

/// Pages reachable from the nav bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Menu,
    MenuAdd,
    Orders,
    Upload,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently displayed page - read
    pub page: ReadSignal<Page>,
    /// Currently displayed page - write
    set_page: WriteSignal<Page>,
    /// Whether the cart sidebar is slid open - read
    pub cart_open: ReadSignal<bool>,
    /// Whether the cart sidebar is slid open - write
    set_cart_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        page: (ReadSignal<Page>, WriteSignal<Page>),
        cart_open: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            cart_open: cart_open.0,
            set_cart_open: cart_open.1,
        }
    }

    /// Switch to a page
    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }

    /// Slide the cart sidebar open
    pub fn open_cart(&self) {
        self.set_cart_open.set(true);
    }

    /// Slide the cart sidebar closed
    pub fn close_cart(&self) {
        self.set_cart_open.set(false);
    }
}
