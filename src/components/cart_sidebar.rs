//! Cart Sidebar Component
//!
//! Floating cart button with a live item count and a slide-in sidebar
//! listing the cart's contents.

use leptos::prelude::*;

use crate::components::{CartRow, PlaceOrderButton};
use crate::context::AppContext;
use crate::store::{total_count, use_cart_store, CartStateStoreFields};

/// Cart overlay: toggle button, backdrop, and the sidebar itself
#[component]
pub fn CartSidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_cart_store();

    let num_items = move || total_count(&store.items().get());

    view! {
        <div class="cart-overlay">
            <Show when=move || !ctx.cart_open.get()>
                <button class="cart-toggle-btn" title="Your Cart" on:click=move |_| ctx.open_cart()>
                    "Cart"
                    <span class="cart-count-badge">{num_items}</span>
                </button>
            </Show>

            <Show when=move || ctx.cart_open.get()>
                <div class="cart-backdrop" on:click=move |_| ctx.close_cart()/>
            </Show>

            <section class=move || {
                if ctx.cart_open.get() { "cart-sidebar open" } else { "cart-sidebar" }
            }>
                <header class="cart-sidebar-header">
                    <button class="cart-close-btn" on:click=move |_| ctx.close_cart()>
                        ">"
                    </button>
                    <h2>"Your Cart"</h2>
                </header>

                <div class="cart-item-list">
                    <For
                        each=move || store.items().get()
                        key=|entry| entry.item.item_id.clone()
                        children=move |entry| view! {
                            <CartRow item=entry.item count=entry.count/>
                        }
                    />
                </div>

                <PlaceOrderButton/>
            </section>
        </div>
    }
}
