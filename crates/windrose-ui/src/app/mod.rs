use crate::breakpoints::{self, Breakpoint};
use crate::components::dialog::ConfirmDialog;
use crate::components::home::HomePage;
use crate::components::listing::TourListing;
use crate::components::settings::SettingsPage;
use crate::components::shell::AdminShell;
use crate::models::{demo_tours, mark_unpublished};
use gloo::events::EventListener;
use gloo::utils::window;
pub(crate) use routes::Route;
use uuid::Uuid;
use windrose_prefs::{BrowserStorage, LayoutMode, PrefSession};
use yew::prelude::*;
use yew_router::prelude::*;

mod routes;

#[function_component(WindroseApp)]
pub(crate) fn windrose_app() -> Html {
    // Stored layout is read exactly once here; afterwards the session's
    // in-memory copy is authoritative for this tab.
    let prefs = use_memo(|_| PrefSession::layout(BrowserStorage::new()), ());
    let layout = use_state(|| prefs.current());
    let tours = use_state(demo_tours);
    let breakpoint = use_state(current_breakpoint);
    let pending_unpublish = use_state(|| None as Option<Uuid>);

    {
        let breakpoint = breakpoint.clone();
        use_effect(move || {
            apply_breakpoint(*breakpoint);
            let handler = EventListener::new(&window(), "resize", {
                let breakpoint = breakpoint.clone();
                move |_event| {
                    let bp = current_breakpoint();
                    if bp != *breakpoint {
                        breakpoint.set(bp);
                    }
                }
            });
            move || drop(handler)
        });
    }

    let set_layout = {
        let prefs = prefs.clone();
        let layout = layout.clone();
        Callback::from(move |next: LayoutMode| {
            prefs.set(next);
            layout.set(next);
        })
    };

    let request_unpublish = {
        let pending_unpublish = pending_unpublish.clone();
        Callback::from(move |id: Uuid| pending_unpublish.set(Some(id)))
    };
    let cancel_unpublish = {
        let pending_unpublish = pending_unpublish.clone();
        Callback::from(move |()| pending_unpublish.set(None))
    };
    let confirm_unpublish = {
        let pending_unpublish = pending_unpublish.clone();
        let tours = tours.clone();
        Callback::from(move |()| {
            if let Some(id) = *pending_unpublish {
                tours.set(mark_unpublished(&tours, id));
            }
            pending_unpublish.set(None);
        })
    };

    let pending_title = (*pending_unpublish)
        .and_then(|id| tours.iter().find(|tour| tour.id == id))
        .map(|tour| tour.title.clone());

    let render_route = {
        let tours = tours.clone();
        let layout = layout.clone();
        let breakpoint = breakpoint.clone();
        let set_layout = set_layout.clone();
        let request_unpublish = request_unpublish.clone();
        move |route: Route| match route {
            Route::Home => html! { <HomePage tours={(*tours).clone()} /> },
            Route::Admin => html! {
                <AdminShell active={Route::Admin} breakpoint={*breakpoint}>
                    <TourListing
                        tours={(*tours).clone()}
                        layout={*layout}
                        on_layout_change={set_layout.clone()}
                        on_unpublish={request_unpublish.clone()}
                    />
                </AdminShell>
            },
            Route::Settings => html! {
                <AdminShell active={Route::Settings} breakpoint={*breakpoint}>
                    <SettingsPage layout={*layout} on_layout_change={set_layout.clone()} />
                </AdminShell>
            },
            Route::NotFound => html! { <NotFound /> },
        }
    };

    html! {
        <BrowserRouter>
            <Switch<Route> render={render_route} />
            <ConfirmDialog
                pending={pending_title}
                on_close={cancel_unpublish}
                on_confirm={confirm_unpublish}
            />
        </BrowserRouter>
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="placeholder">
            <h2>{"Page not found"}</h2>
            <p class="muted">{"The page you are looking for has sailed."}</p>
            <Link<Route> to={Route::Home} classes={classes!("solid")}>{"Back to the homepage"}</Link<Route>>
        </div>
    }
}

fn apply_breakpoint(bp: Breakpoint) {
    if let Some(document) = window().document() {
        if let Some(body) = document.body() {
            let _ = body.set_attribute("data-bp", bp.name);
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn current_breakpoint() -> Breakpoint {
    let width = window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(1280.0) as u16;
    breakpoints::for_width(width)
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<WindroseApp>::with_root(root).render();
    } else {
        yew::Renderer::<WindroseApp>::new().render();
    }
}
