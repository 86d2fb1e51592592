//! Orders Page Component
//!
//! Lists placed orders with per-order edit and delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::{CartEntry, Order};

/// Order management page
#[component]
pub fn OrdersPage() -> impl IntoView {
    let (orders, set_orders) = signal(Vec::<Order>::new());

    // Load orders on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_orders().await {
                Ok(loaded) => set_orders.set(loaded),
                Err(err) => log::warn!("Failed to fetch order list: {}", err),
            }
        });
    });

    let on_synced = Callback::new(move |updated: Order| {
        set_orders.update(|list| {
            if let Some(order) = list
                .iter_mut()
                .find(|o| o.order_number == updated.order_number)
            {
                *order = updated;
            }
        });
    });

    let on_deleted = Callback::new(move |order_number: u32| {
        set_orders.update(|list| list.retain(|o| o.order_number != order_number));
    });

    view! {
        <main class="orders-page">
            <h1>"Current Orders"</h1>
            <h2 class="subtitle">"A list of all currently placed orders"</h2>
            <hr/>

            <For
                each=move || orders.get()
                key=|order| order.order_number
                children=move |order| view! {
                    <OrderEntry order=order on_synced=on_synced on_deleted=on_deleted/>
                }
            />
        </main>
    }
}

/// One order, collapsible into an inline count editor
#[component]
fn OrderEntry(
    order: Order,
    on_synced: Callback<Order>,
    on_deleted: Callback<u32>,
) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let order_number = order.order_number;
    let status = if order.fulfilled { "Fulfilled" } else { "Ongoing" };

    let delete = move |_| {
        spawn_local(async move {
            match api::delete_order(order_number).await {
                Ok(()) => on_deleted.run(order_number),
                Err(err) => log::warn!("Unable to delete order #{}: {}", order_number, err),
            }
        });
    };

    let order_for_edit = order.clone();

    view! {
        <div class="order-entry">
            <div class="order-entry-header">
                <h3>"Order #" {order_number} " (" {status} ")"</h3>
                <span class="order-entry-actions">
                    <button on:click=move |_| set_editing.set(true)>"Edit"</button>
                    <button class="delete-btn" on:click=delete>"Delete"</button>
                </span>
            </div>

            {move || if editing.get() {
                let order = order_for_edit.clone();
                view! {
                    <OrderEditList
                        order=order
                        on_synced=on_synced
                        set_editing=set_editing
                    />
                }.into_any()
            } else {
                let items = order.items.clone();
                view! {
                    <ul class="order-items">
                        <Show when={
                            let empty = items.is_empty();
                            move || empty
                        }>
                            <p>"No Items"</p>
                        </Show>
                        {items.iter().map(|entry| view! {
                            <li>
                                <span class="order-item-count">{entry.count}</span>
                                <span class="order-item-name">{entry.item.name.clone()}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_any()
            }}
        </div>
    }
}

/// Inline editor over a copy of the order's items; nothing touches the
/// listed order until a save round-trips through the server.
#[component]
fn OrderEditList(
    order: Order,
    on_synced: Callback<Order>,
    set_editing: WriteSignal<bool>,
) -> impl IntoView {
    let (edit_items, set_edit_items) = signal(order.items.clone());
    let (saving, set_saving) = signal(false);
    let order_number = order.order_number;
    let fulfilled = order.fulfilled;

    let save = move |_| {
        if saving.get() {
            return;
        }
        set_saving.set(true);
        let edited = Order {
            order_number,
            fulfilled,
            items: edit_items.get(),
        };

        spawn_local(async move {
            match api::sync_order(&edited).await {
                Ok(ack) => {
                    log::info!("{}", ack);
                    on_synced.run(edited);
                    set_editing.set(false);
                }
                Err(err) => log::warn!("Unable to sync order with server: {}", err),
            }
            set_saving.set(false);
        });
    };

    let discard = move |_| {
        log::warn!("Discarding edits for order #{}", order_number);
        set_editing.set(false);
    };

    view! {
        <ul class="order-items editing">
            <For
                each=move || edit_items.get()
                key=|entry| entry.item.item_id.clone()
                children=move |entry: CartEntry| {
                    let item_id = entry.item.item_id.clone();
                    view! {
                        <li>
                            <input
                                type="number"
                                min="1"
                                prop:value=entry.count.to_string()
                                prop:readOnly=move || saving.get()
                                on:input=move |ev| {
                                    let Some(count) = edited_count(&event_target_value(&ev))
                                    else {
                                        return;
                                    };
                                    let item_id = item_id.clone();
                                    set_edit_items.update(move |items| {
                                        if let Some(e) = items
                                            .iter_mut()
                                            .find(|e| e.item.item_id == item_id)
                                        {
                                            e.count = count;
                                        }
                                    });
                                }
                            />
                            <span class="order-item-name">{entry.item.name.clone()}</span>
                        </li>
                    }
                }
            />
        </ul>
        <div class="order-edit-actions">
            <button on:click=save prop:disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Save" }}
            </button>
            <button on:click=discard>"Discard"</button>
        </div>
    }
}

/// Parse a count edit. Partial input (cleared field, stray characters) is
/// ignored so the prior count stands; a typed zero clamps to 1 since the
/// editor has no remove action.
fn edited_count(input: &str) -> Option<u32> {
    input.parse::<u32>().ok().map(|count| count.max(1))
}

#[cfg(test)]
mod tests {
    use super::edited_count;

    #[test]
    fn edited_count_parses_plain_numbers() {
        assert_eq!(edited_count("4"), Some(4));
        assert_eq!(edited_count("12"), Some(12));
    }

    #[test]
    fn edited_count_clamps_zero_to_one() {
        assert_eq!(edited_count("0"), Some(1));
    }

    #[test]
    fn edited_count_ignores_cleared_or_garbage_input() {
        // Clearing the field mid-edit must not overwrite the prior count
        assert_eq!(edited_count(""), None);
        assert_eq!(edited_count("-2"), None);
        assert_eq!(edited_count("abc"), None);
    }
}
