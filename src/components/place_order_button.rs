//! Place Order Button Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::store::{total_count, use_cart_store, CartStateStoreFields};

/// Finalizes the cart as an order
#[component]
pub fn PlaceOrderButton() -> impl IntoView {
    let store = use_cart_store();
    let (placing, set_placing) = signal(false);

    let num_items = move || total_count(&store.items().get());

    let place_order = move |_| {
        if placing.get() || num_items() == 0 {
            return;
        }
        set_placing.set(true);
        let cart_id = store.cart_id().get_untracked();

        spawn_local(async move {
            match api::place_cart(&cart_id).await {
                Ok(ack) => {
                    log::info!("{}", ack);
                    // The backend moved the cart's items into the order;
                    // clear the local copy to match
                    store.items().set(Vec::new());
                }
                Err(err) => log::warn!("Unable to place order: {}", err),
            }
            set_placing.set(false);
        });
    };

    view! {
        <button class="place-order-btn" on:click=place_order>
            "Place Order"
            {move || if placing.get() {
                view! { <span class="place-order-spinner">"..."</span> }.into_any()
            } else {
                view! { <span class="place-order-count">{num_items()}</span> }.into_any()
            }}
        </button>
    }
}
