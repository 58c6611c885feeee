//! Class search box with a keyboard-navigable result list.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::SEARCH_INPUT_ID;
use crate::core::search::SearchKey;

stylance::import_crate_style!(css, "src/components/search.module.css");

#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let query = Signal::derive(move || ctx.search.with(|s| s.query.clone()));

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        ctx.run_search(&input.value());
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        let Some(action) = SearchKey::from_key(&ev.key()) else {
            return;
        };
        match action {
            SearchKey::Next => {
                ev.prevent_default();
                ctx.move_selection(1);
            }
            SearchKey::Previous => {
                ev.prevent_default();
                ctx.move_selection(-1);
            }
            SearchKey::Commit => {
                ev.prevent_default();
                ctx.commit_search();
            }
            SearchKey::Dismiss => ctx.clear_search(),
        }
    };

    let results_view = move || {
        let session = ctx.search.get();
        if !session.has_results() {
            return None;
        }
        let selected = session.selected;

        Some(view! {
            <ul class=css::results role="listbox">
                {session.results.into_iter().enumerate().map(|(i, entry)| {
                    let class_name = if i == selected {
                        format!("{} {}", css::result, css::resultActive)
                    } else {
                        css::result.to_string()
                    };
                    view! {
                        <li
                            class=class_name
                            on:mouseenter=move |_| ctx.select_result(i)
                            // mousedown fires before the input loses focus
                            on:mousedown=move |ev: ev::MouseEvent| {
                                ev.prevent_default();
                                ctx.select_result(i);
                                ctx.commit_search();
                            }
                        >
                            <span class=css::resultName>{entry.name}</span>
                            <span class=css::resultPackage>{entry.package}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        })
    };

    view! {
        <div class=css::search>
            <span class=css::searchIcon>
                <Icon icon=ic::SEARCH />
            </span>
            <input
                id=SEARCH_INPUT_ID
                type="search"
                class=css::input
                placeholder="Search classes (/)"
                autocomplete="off"
                spellcheck="false"
                prop:value=query
                on:input=handle_input
                on:keydown=handle_keydown
            />
            {results_view}
        </div>
    }
}
