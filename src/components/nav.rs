//! Navigation Bar Component

use leptos::prelude::*;

use crate::context::{AppContext, Page};

const NAV_LINKS: &[(Page, &str)] = &[
    (Page::Menu, "Menu"),
    (Page::MenuAdd, "Add to Menu"),
    (Page::Orders, "Manage Orders"),
    (Page::Upload, "Upload Images"),
];

/// Top navigation bar with one link per page
#[component]
pub fn Nav() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="nav-bar">
            <button class="nav-logo" on:click=move |_| ctx.navigate(Page::Home)>
                "OrderUp"
            </button>

            {NAV_LINKS.iter().map(|(page, label)| {
                let page = *page;
                let link_class = move || {
                    if ctx.page.get() == page { "nav-link active" } else { "nav-link" }
                };
                view! {
                    <button class=link_class on:click=move |_| ctx.navigate(page)>
                        {*label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
