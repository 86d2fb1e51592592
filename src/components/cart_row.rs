//! Cart Row Component
//!
//! A single entry in the cart sidebar: quantity stepper, editable count,
//! and an inline remove confirmation.

use leptos::prelude::*;

use crate::models::MenuItem;
use crate::store::{store_remove_item, store_set_count, use_cart_store, CartStateStoreFields};

/// One line item in the cart sidebar
#[component]
pub fn CartRow(item: MenuItem, count: u32) -> impl IntoView {
    let store = use_cart_store();
    let item_id = item.item_id.clone();

    // Count read back from the store so stepper clicks and menu-page adds
    // both reflect here without re-creating the row
    let count = {
        let item_id = item_id.clone();
        Memo::new(move |_| {
            store
                .items()
                .get()
                .iter()
                .find(|e| e.item.item_id == item_id)
                .map(|e| e.count)
                .unwrap_or(count)
        })
    };

    let (count_input, set_count_input) = signal(count.get_untracked());
    let (show_remove, set_show_remove) = signal(false);

    // Resynchronize the input when the count changes elsewhere
    Effect::new(move |_| {
        set_count_input.set(count.get());
    });

    let update_count = {
        let item_id = item_id.clone();
        move |new_count: u32| {
            if new_count == 0 {
                // Deleting needs a confirmation first
                set_show_remove.set(true);
                return;
            }
            store_set_count(&store, &item_id, new_count);
        }
    };

    let decrement = {
        let update_count = update_count.clone();
        move |_| update_count(count.get().saturating_sub(1))
    };
    let increment = {
        let update_count = update_count.clone();
        move |_| update_count(count.get() + 1)
    };
    let commit_input = {
        let update_count = update_count.clone();
        move |_| update_count(count_input.get())
    };

    let remove = {
        let item_id = item_id.clone();
        move |_| {
            set_show_remove.set(false);
            store_remove_item(&store, &item_id);
        }
    };

    let item_name = item.name.clone();

    view! {
        <div class="cart-row">
            <Show when=move || show_remove.get()>
                <div class="cart-row-remove-confirm">
                    <h3>"Remove " {item_name.clone()} " From Cart?"</h3>
                    <button on:click=move |_| set_show_remove.set(false)>"Cancel"</button>
                    <button class="confirm-btn" on:click=remove.clone()>"Remove"</button>
                </div>
            </Show>

            <button class="cart-row-remove-btn" on:click=move |_| set_show_remove.set(true)>
                "×"
            </button>

            <h3 class="cart-row-name" title=item.name.clone()>{item.name.clone()}</h3>

            <div class="cart-row-stepper">
                <button on:click=decrement>"−"</button>
                <input
                    type="text"
                    inputmode="numeric"
                    prop:value=move || count_input.get().to_string()
                    on:input=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                            set_count_input.set(value);
                        }
                    }
                    on:blur=commit_input
                />
                <button on:click=increment>"+"</button>
            </div>
        </div>
    }
}
