use crate::app::Route;
use crate::models::{TourRow, featured};
use crate::theme::hero_gradient;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub(crate) struct HomeProps {
    pub(crate) tours: Vec<TourRow>,
}

#[function_component(HomePage)]
pub(crate) fn home_page(props: &HomeProps) -> Html {
    html! {
        <div class="home">
            <nav class="topnav">
                <strong class="brand">{"Windrose"}</strong>
                <Link<Route> to={Route::Admin} classes={classes!("ghost")}>{"Operator console"}</Link<Route>>
            </nav>
            <HeroBanner>
                <Link<Route> to={Route::Admin} classes={classes!("solid")}>{"Plan the season"}</Link<Route>>
            </HeroBanner>
            <FeaturedTours tours={props.tours.clone()} />
            <footer class="site-footer">
                <span class="muted">{"Windrose Travel, small-group journeys since 2009"}</span>
            </footer>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct HeroProps {
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(HeroBanner)]
pub(crate) fn hero_banner(props: &HeroProps) -> Html {
    html! {
        <header class="hero" style={hero_gradient()}>
            <h1>{"Journeys worth the detour"}</h1>
            <p>{"Small-group tours led by local guides, from fjord to desert."}</p>
            <div class="hero-actions">
                {for props.children.iter()}
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct FeaturedProps {
    tours: Vec<TourRow>,
}

#[function_component(FeaturedTours)]
fn featured_tours(props: &FeaturedProps) -> Html {
    let picks = featured(&props.tours);
    if picks.is_empty() {
        return html! {};
    }
    html! {
        <section class="featured">
            <h2>{"Departing soon"}</h2>
            <div class="tour-grid">
                {for picks.iter().map(|tour| html! {
                    <article key={tour.id.to_string()} class="tour-card">
                        <h3>{tour.title.clone()}</h3>
                        <p class="muted">{tour.destination.clone()}</p>
                        <div class="card-meta">
                            <span>{tour.departure_label()}</span>
                            <strong>{tour.price_label()}</strong>
                        </div>
                        {if tour.is_full() {
                            html! { <span class="pill sold-out">{"Sold out"}</span> }
                        } else {
                            html! { <span class="pill subtle">{tour.seats_label()}</span> }
                        }}
                    </article>
                })}
            </div>
        </section>
    }
}
