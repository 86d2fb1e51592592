//! Menu Add Page Component
//!
//! Form for adding new items to the menu.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;

/// Page with the new-menu-item form
#[component]
pub fn MenuAddPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let item_name = name.get();
        if item_name.is_empty() {
            return;
        }
        let item_desc = description.get();

        spawn_local(async move {
            match api::add_menu_item(&item_name, &item_desc).await {
                Ok(ack) => log::info!("{}", ack),
                Err(err) => log::warn!("Unable to add new menu item: {}", err),
            }
        });

        set_name.set(String::new());
        set_description.set(String::new());
    };

    view! {
        <main class="menu-add-page">
            <h1>"Add An Item To The Menu"</h1>
            <h2 class="subtitle">"Add new items for our patrons to enjoy"</h2>
            <hr/>

            <form class="menu-item-form" on:submit=submit>
                <h3>"Add An Item"</h3>
                <label>
                    <span>"Item Name"</span>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    <span>"Item Description"</span>
                    <input
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit">"Add Item"</button>
            </form>
        </main>
    }
}
