//! Home Page Component

use leptos::prelude::*;

use crate::context::{AppContext, Page};

/// Landing page hero
#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <main class="home-page">
            <section class="home-hero">
                <h1>"OrderUp"</h1>
                <h2>"On The Go, At Your Own Pace"</h2>
                <p>
                    "View the menu on your phone and place your order whenever you are ready! "
                    "Your order will be sent directly to the back where it will be prepared "
                    "and brought right out to you shortly!"
                </p>
                <button class="hero-cta" on:click=move |_| ctx.navigate(Page::Menu)>
                    "Browse the Menu"
                </button>
            </section>
        </main>
    }
}
