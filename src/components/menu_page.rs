//! Menu Page Component
//!
//! Lists every menu item with an "Add to Cart" action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::MenuItem;
use crate::store::{store_add_item, use_cart_store};

/// Menu browsing page
#[component]
pub fn MenuPage() -> impl IntoView {
    let (menu_items, set_menu_items) = signal(Vec::<MenuItem>::new());
    let (loading, set_loading) = signal(true);

    // Load menu items on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_menu().await {
                Ok(items) => set_menu_items.set(items),
                Err(err) => log::warn!("Failed to load menu items: {}", err),
            }
            set_loading.set(false);
        });
    });

    view! {
        <main class="menu-page">
            <h1>"Order From Our Extensive Menu"</h1>
            <h2 class="subtitle">"A large variety of options for you to choose from"</h2>
            <hr/>

            <Show when=move || loading.get()>
                <p class="menu-loading">"Loading..."</p>
            </Show>

            <For
                each=move || menu_items.get()
                key=|item| item.item_id.clone()
                children=move |item| view! { <MenuItemCard item=item/> }
            />
        </main>
    }
}

/// One menu item with name, description, and an add-to-cart button
#[component]
fn MenuItemCard(item: MenuItem) -> impl IntoView {
    let store = use_cart_store();
    let add_item = {
        let item = item.clone();
        move |_| store_add_item(&store, &item)
    };

    view! {
        <div class="menu-card">
            <h3>{item.name.clone()}</h3>
            <hr/>
            <p>{item.description.clone()}</p>
            <button class="add-to-cart-btn" on:click=add_item>
                "Add to Cart"
            </button>
        </div>
    }
}
