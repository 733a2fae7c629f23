//! Fixed page header with navigation and the mobile menu.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

use crate::app::SiteContext;
use crate::components::icons as ic;
use crate::config::{MOBILE_BREAKPOINT_QUERY, SITE_NAME};
use crate::core::menu::{MenuClick, MobileMenu};

/// Locate a click relative to the toggle button and the navigation.
fn locate_click(target: &Element, toggle: Option<&Node>, nav: Option<&Node>) -> MenuClick {
    let node: &Node = target;
    if toggle.is_some_and(|t| t.contains(Some(node))) {
        return MenuClick::Toggle;
    }
    match nav {
        Some(nav) if nav.contains(Some(node)) => {
            let on_link = target
                .closest("a")
                .ok()
                .flatten()
                .is_some_and(|link| nav.contains(Some(&*link)));
            if on_link {
                MenuClick::NavLink
            } else {
                MenuClick::Nav
            }
        }
        _ => MenuClick::Outside,
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<SiteContext>();
    let menu = ctx.menu;
    let appearance = ctx.header;
    let links = ctx.config.nav_links();

    let toggle_ref = NodeRef::<html::Button>::new();
    let nav_ref = NodeRef::<html::Nav>::new();
    let is_open = Memo::new(move |_| menu.with(MobileMenu::is_open));

    // One page-level listener handles the toggle, link clicks and outside
    // clicks, so the toggle button itself has no handler.
    let click = window_event_listener(ev::click, move |ev| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let toggle = toggle_ref.get_untracked();
        let nav = nav_ref.get_untracked();
        let located = locate_click(
            &target,
            toggle.as_ref().map(|t| t.unchecked_ref::<Node>()),
            nav.as_ref().map(|n| n.unchecked_ref::<Node>()),
        );

        let mut next = menu.get_untracked();
        next.on_click(located);
        if next != menu.get_untracked() {
            menu.set(next);
        }
    });
    on_cleanup(move || click.remove());

    // Widening past the breakpoint closes the menu
    let is_mobile = use_media_query(MOBILE_BREAKPOINT_QUERY);
    Effect::new(move || {
        if !is_mobile.get() && menu.with_untracked(MobileMenu::is_open) {
            menu.update(MobileMenu::close);
        }
    });

    view! {
        <header
            class="header"
            class:scrolled=move || appearance.get().solid
            style:transform=move || {
                if appearance.get().hidden { "translateY(-100%)" } else { "translateY(0)" }
            }
        >
            <div class="container header-inner">
                <a href="#home" class="logo">{SITE_NAME}</a>
                <nav class="nav-menu" class:active=move || is_open.get() node_ref=nav_ref>
                    <ul>
                        {links
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <a href=link.href class="nav-link">{link.label}</a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
                <button
                    class="mobile-menu-toggle"
                    class:active=move || is_open.get()
                    aria-label="Toggle navigation"
                    aria-expanded=move || is_open.get().to_string()
                    node_ref=toggle_ref
                >
                    <Icon icon=ic::MENU />
                </button>
            </div>
        </header>
    }
}
