//! Main content area.
//!
//! The class region (`#class-content`) is always mounted and only hidden
//! outside class view, so a fragment response always has somewhere to land.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::sidebar::MemberLink;
use crate::config::CONTENT_REGION_ID;
use crate::models::{MemberKind, PackageEntry, Route, ViewMode};

stylance::import_crate_style!(css, "src/components/content.module.css");

#[component]
pub fn MainContent() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let mode = Memo::new(move |_| ctx.view.with(|v| v.current_view));

    view! {
        <main class=css::main>
            <Show when=move || mode.get() == ViewMode::Overview>
                <Overview />
            </Show>
            <Show when=move || mode.get() == ViewMode::Package>
                <PackageSummary />
            </Show>
            <div
                id=CONTENT_REGION_ID
                class=css::classContent
                hidden=move || mode.get() != ViewMode::Class
            />
        </main>
    }
}

/// Package cards for the whole catalog.
#[component]
fn Overview() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let counts = Memo::new(move |_| {
        ctx.catalog
            .with(|c| (c.packages.len(), c.all_classes.len()))
    });

    view! {
        <section class=css::overview>
            <h1>"API Documentation"</h1>
            <Show
                when=move || ctx.catalog.with(|c| !c.is_empty())
                fallback=|| view! {
                    <p class=css::empty>"No documentation is available."</p>
                }
            >
                <p class=css::summary>
                    {move || {
                        let (packages, classes) = counts.get();
                        format!("{} packages, {} classes and interfaces", packages, classes)
                    }}
                </p>
                <div class=css::cards>
                    {move || {
                        ctx.catalog
                            .get()
                            .packages
                            .into_iter()
                            .map(|package| view! { <PackageCard package=package /> })
                            .collect_view()
                    }}
                </div>
            </Show>
        </section>
    }
}

#[component]
fn PackageCard(package: PackageEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let stats = format!(
        "{} classes, {} interfaces",
        package.classes.len(),
        package.interfaces.len()
    );
    let href = format!(
        "#{}",
        Route::Package {
            name: package.name.clone(),
        }
        .to_hash()
    );
    let name = package.name.clone();

    let on_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        ctx.show_package(&package.name);
    };

    view! {
        <a class=css::card href=href on:click=on_click>
            <span class=css::cardIcon>
                <Icon icon=ic::PACKAGE />
            </span>
            <span class=css::cardName>{name}</span>
            <span class=css::cardStats>{stats}</span>
        </a>
    }
}

/// Classes and interfaces of the focused package.
#[component]
fn PackageSummary() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let package = Memo::new(move |_| {
        let name = ctx.view.with(|v| v.current_package.clone())?;
        ctx.catalog.with(|c| c.package(&name).cloned())
    });

    move || match package.get() {
        Some(package) => {
            let classes = member_section("Classes", MemberKind::Class, &package);
            let interfaces = member_section("Interfaces", MemberKind::Interface, &package);
            view! {
                <section class=css::packageSummary>
                    <h1>{package.name.clone()}</h1>
                    {classes}
                    {interfaces}
                </section>
            }
            .into_any()
        }
        None => view! { <p class=css::empty>"Package not found."</p> }.into_any(),
    }
}

/// A titled member list, or nothing when the package has no such members.
fn member_section(title: &'static str, kind: MemberKind, package: &PackageEntry) -> Option<impl IntoView> {
    let members: Vec<_> = package
        .members()
        .filter(|(k, _)| *k == kind)
        .map(|(_, entry)| entry.clone())
        .collect();
    if members.is_empty() {
        return None;
    }

    Some(view! {
        <h2>{title}</h2>
        <ul class=css::memberList>
            {members
                .into_iter()
                .map(|entry| view! { <MemberLink kind=kind entry=entry show_hint=true /> })
                .collect_view()}
        </ul>
    })
}

#[cfg(test)]
mod tests {
    use super::css;

    #[test]
    fn test_section_classes_are_scoped() {
        let sections = [css::main, css::overview, css::packageSummary, css::classContent];
        for (i, class) in sections.iter().enumerate() {
            assert!(!class.is_empty());
            assert!(sections[i + 1..].iter().all(|other| other != class));
        }
        assert!(css::overview.contains("overview"));
    }
}
