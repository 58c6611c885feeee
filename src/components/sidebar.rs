//! Package tree with a free-text package filter.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{ClassEntry, MemberKind, PackageEntry, Route};

stylance::import_crate_style!(css, "src/components/sidebar.module.css");

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let filter = Signal::derive(move || ctx.view.with(|v| v.package_filter.clone()));

    // Re-derived only when the catalog or the filter text changes
    let packages = Memo::new(move |_| {
        let filter = filter.get();
        ctx.catalog.with(|catalog| {
            catalog
                .filtered_packages(&filter)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        ctx.set_package_filter(&input.value());
    };

    view! {
        <nav class=css::sidebar>
            <input
                type="text"
                class=css::filter
                placeholder="Filter packages"
                autocomplete="off"
                spellcheck="false"
                prop:value=filter
                on:input=handle_input
            />
            <ul class=css::tree>
                {move || {
                    packages
                        .get()
                        .into_iter()
                        .map(|package| view! { <PackageNode package=package /> })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}

/// One expandable package with its classes and interfaces.
#[component]
fn PackageNode(package: PackageEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let name = package.name.clone();
    let members: Vec<(MemberKind, ClassEntry)> = package
        .members()
        .map(|(kind, entry)| (kind, entry.clone()))
        .collect();

    let expanded = {
        let name = name.clone();
        Signal::derive(move || ctx.view.with(|v| v.is_expanded(&name)))
    };
    let focused = {
        let name = name.clone();
        Signal::derive(move || ctx.view.with(|v| v.current_package.as_deref() == Some(name.as_str())))
    };
    let on_toggle = {
        let name = name.clone();
        move |_: ev::MouseEvent| ctx.toggle_package(&name)
    };

    view! {
        <li class=css::package>
            <button
                class=move || {
                    if focused.get() {
                        format!("{} {}", css::packageToggle, css::packageFocused)
                    } else {
                        css::packageToggle.to_string()
                    }
                }
                on:click=on_toggle
            >
                {move || {
                    let icon = if expanded.get() { ic::CHEVRON_DOWN } else { ic::CHEVRON_RIGHT };
                    view! { <Icon icon=icon /> }
                }}
                <span class=css::packageName>{name}</span>
            </button>
            <Show when=move || expanded.get()>
                <ul class=css::members>
                    {members
                        .clone()
                        .into_iter()
                        .map(|(kind, entry)| view! { <MemberLink kind=kind entry=entry /> })
                        .collect_view()}
                </ul>
            </Show>
        </li>
    }
}

/// Link to a class or interface; highlighted while it is on display.
#[component]
pub fn MemberLink(
    kind: MemberKind,
    entry: ClassEntry,
    /// Render the entry's hint next to the link
    #[prop(optional)]
    show_hint: bool,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let href = format!(
        "#{}",
        Route::Class {
            fullname: entry.fullname.clone(),
        }
        .to_hash()
    );
    let label = entry.name.clone();
    let hint = entry.hint.clone().filter(|_| show_hint);
    let icon = match kind {
        MemberKind::Class => ic::CLASS,
        MemberKind::Interface => ic::INTERFACE,
    };

    let active = {
        let fullname = entry.fullname.clone();
        Signal::derive(move || ctx.view.with(|v| v.is_showing_class(&fullname)))
    };

    let on_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        ctx.navigate_to_class(&entry);
    };

    view! {
        <li>
            <a
                href=href
                class=move || {
                    if active.get() {
                        format!("{} {}", css::member, css::memberActive)
                    } else {
                        css::member.to_string()
                    }
                }
                on:click=on_click
            >
                <Icon icon=icon />
                <span>{label}</span>
            </a>
            {hint.map(|hint| view! { <span class=css::hint>{hint}</span> })}
        </li>
    }
}
