//! OrderUp Frontend App
//!
//! Root component: owns the cart store and sync queue, hydrates the cart
//! from the server, and re-syncs it on every change once hydrated.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    CartSidebar, HomePage, MenuAddPage, MenuPage, Nav, OrdersPage, UploadPage,
};
use crate::context::{AppContext, Page};
use crate::store::{CartState, CartStateStoreFields};
use crate::sync::{sync_payload, SyncQueue};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(CartState::new());
    let sync_queue = SyncQueue::new();

    let (page, set_page) = signal(Page::Home);
    let (cart_open, set_cart_open) = signal(false);

    // Provide context to all children
    provide_context(AppContext::new((page, set_page), (cart_open, set_cart_open)));
    provide_context(store);

    // Hydrate the cart from the server once on mount
    Effect::new(move |_| {
        let cart_id = store.cart_id().get_untracked();
        spawn_local(async move {
            log::info!("Attempting to fetch cart {}", cart_id);
            match api::load_cart(&cart_id).await {
                Ok(loaded) => {
                    store.cart_id().set(loaded.cart_id);
                    store.items().set(loaded.items);
                    store.loaded().set(true);
                }
                Err(err) => {
                    // Cart stays unloaded, which also keeps the sync
                    // effect below from ever firing
                    log::warn!("Failed to load the cart: {}", err);
                }
            }
        });
    });

    // Sync the cart with the server whenever it changes. Reads all three
    // fields so the effect re-runs on any of them, including the flip of
    // `loaded` right after hydration (that first redundant write is fine).
    Effect::new(move |_| {
        let Some(snapshot) = sync_payload(
            store.loaded().get(),
            store.cart_id().get(),
            store.items().get(),
        ) else {
            return;
        };

        sync_queue.enqueue(move || async move {
            match api::sync_cart(&snapshot).await {
                Ok(ack) => log::info!("{}", ack),
                Err(err) => log::warn!("Unable to sync cart with server: {}", err),
            }
        });
    });

    view! {
        <Nav/>

        <div class="page-content">
            {move || match page.get() {
                Page::Home => view! { <HomePage/> }.into_any(),
                Page::Menu => view! { <MenuPage/> }.into_any(),
                Page::MenuAdd => view! { <MenuAddPage/> }.into_any(),
                Page::Orders => view! { <OrdersPage/> }.into_any(),
                Page::Upload => view! { <UploadPage/> }.into_any(),
            }}
        </div>

        <CartSidebar/>
    }
}
