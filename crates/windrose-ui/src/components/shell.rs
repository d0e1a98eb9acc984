use crate::app::Route;
use crate::breakpoints::Breakpoint;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub(crate) children: Children,
    pub(crate) active: Route,
    pub(crate) breakpoint: Breakpoint,
}

#[function_component(AdminShell)]
pub(crate) fn admin_shell(props: &ShellProps) -> Html {
    let nav_open = use_state(|| false);
    let toggle_nav = {
        let nav_open = nav_open.clone();
        Callback::from(move |_| nav_open.set(!*nav_open))
    };
    let pinned = props.breakpoint.pins_sidebar();
    let title = match props.active {
        Route::Settings => "Settings",
        _ => "Tours",
    };

    html! {
        <div class="admin-shell">
            <aside class={classes!("sidebar", if pinned || *nav_open { "open" } else { "closed" })}>
                <div class="brand">
                    <button class="ghost mobile-only" onclick={toggle_nav.clone()} aria-label="Close navigation">{"✕"}</button>
                    <strong>{"Windrose"}</strong>
                    <span class="muted">{"Operator console"}</span>
                </div>
                <nav>
                    {nav_item(Route::Admin, "Tours", props.active)}
                    {nav_item(Route::Settings, "Settings", props.active)}
                </nav>
                <div class="sidebar-footer">
                    <Link<Route> to={Route::Home} classes={classes!("nav-item")}>{"View site"}</Link<Route>>
                </div>
            </aside>
            <div class="main">
                <header class="topbar">
                    <button class="ghost mobile-only" aria-label="Open navigation" onclick={toggle_nav}>{"☰"}</button>
                    <h1>{title}</h1>
                </header>
                <main>
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}

fn nav_item(route: Route, label: &str, active: Route) -> Html {
    let classes = classes!(
        "nav-item",
        if active == route {
            Some("active")
        } else {
            None
        }
    );
    html! {
        <Link<Route> to={route} classes={classes}>{label}</Link<Route>>
    }
}
