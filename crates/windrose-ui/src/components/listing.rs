use crate::components::toggle::LayoutToggle;
use crate::models::{TourRow, TourStatus};
use uuid::Uuid;
use windrose_prefs::LayoutMode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ListingProps {
    pub(crate) tours: Vec<TourRow>,
    pub(crate) layout: LayoutMode,
    pub(crate) on_layout_change: Callback<LayoutMode>,
    pub(crate) on_unpublish: Callback<Uuid>,
}

#[function_component(TourListing)]
pub(crate) fn tour_listing(props: &ListingProps) -> Html {
    let body = if props.tours.is_empty() {
        html! {
            <div class="empty-state">
                <h3>{"No tours yet"}</h3>
                <p class="muted">{"Create a tour to see it listed here."}</p>
            </div>
        }
    } else {
        match props.layout {
            LayoutMode::Table => render_table(&props.tours, &props.on_unpublish),
            LayoutMode::Grid => render_grid(&props.tours, &props.on_unpublish),
        }
    };

    html! {
        <section class="tour-listing" data-layout={props.layout.as_str()}>
            <header class="listing-toolbar">
                <h2>{format!("{} tours", props.tours.len())}</h2>
                <LayoutToggle layout={props.layout} on_change={props.on_layout_change.clone()} />
            </header>
            {body}
        </section>
    }
}

fn render_table(tours: &[TourRow], on_unpublish: &Callback<Uuid>) -> Html {
    html! {
        <table class="tour-table">
            <thead>
                <tr>
                    <th>{"Tour"}</th>
                    <th>{"Destination"}</th>
                    <th>{"Departs"}</th>
                    <th>{"Seats"}</th>
                    <th>{"Price"}</th>
                    <th>{"Status"}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {for tours.iter().map(|tour| html! {
                    <tr key={tour.id.to_string()} class={classes!(if tour.is_full() { Some("full") } else { None })}>
                        <td><strong>{tour.title.clone()}</strong></td>
                        <td>{tour.destination.clone()}</td>
                        <td>{tour.departure_label()}</td>
                        <td>{tour.seats_label()}</td>
                        <td>{tour.price_label()}</td>
                        <td><span class={classes!("pill", tour.status.as_str())}>{tour.status.label()}</span></td>
                        <td class="row-actions">{unpublish_button(tour, on_unpublish)}</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}

fn render_grid(tours: &[TourRow], on_unpublish: &Callback<Uuid>) -> Html {
    html! {
        <div class="tour-grid">
            {for tours.iter().map(|tour| html! {
                <article key={tour.id.to_string()} class="tour-card">
                    <header>
                        <h3>{tour.title.clone()}</h3>
                        <span class={classes!("pill", tour.status.as_str())}>{tour.status.label()}</span>
                    </header>
                    <p class="muted">{format!("{} · departs {}", tour.destination, tour.departure_label())}</p>
                    <div class="card-meta">
                        <span>{tour.seats_label()}</span>
                        <strong>{tour.price_label()}</strong>
                    </div>
                    <footer>{unpublish_button(tour, on_unpublish)}</footer>
                </article>
            })}
        </div>
    }
}

fn unpublish_button(tour: &TourRow, on_unpublish: &Callback<Uuid>) -> Html {
    if tour.status != TourStatus::Published {
        return html! {};
    }
    let onclick = {
        let cb = on_unpublish.clone();
        let id = tour.id;
        Callback::from(move |_| cb.emit(id))
    };
    html! {
        <button class="ghost danger" onclick={onclick}>{"Unpublish"}</button>
    }
}
