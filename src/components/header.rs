//! Top bar: sidebar toggle, brand, search and theme toggle.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::search::SearchBox;
use crate::config::APP_NAME;
use crate::models::Theme;

stylance::import_crate_style!(css, "src/components/header.module.css");

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_brand = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ctx.show_overview();
    };

    view! {
        <header class=css::header>
            <button
                class=css::iconButton
                on:click=move |_| ctx.toggle_sidebar()
                title="Toggle sidebar"
            >
                <Icon icon=ic::SIDEBAR />
            </button>

            <a class=css::brand href="#" on:click=on_brand>
                {APP_NAME}
            </a>

            <SearchBox />

            <ThemeToggle />
        </header>
    }
}

/// Dark/light switch; shows the icon of the theme it switches to.
#[component]
fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = Memo::new(move |_| match ctx.theme.get() {
        Theme::Dark => ic::SUN,
        Theme::Light => ic::MOON,
    });
    let title = move || format!("Switch to {} theme", ctx.theme.get().toggled());

    view! {
        <button class=css::iconButton on:click=move |_| ctx.toggle_theme() title=title>
            {move || view! { <Icon icon=icon.get() /> }}
        </button>
    }
}
