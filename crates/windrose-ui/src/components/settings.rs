use crate::components::toggle::LayoutToggle;
use windrose_prefs::{LAYOUT_KEY, LayoutMode};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    pub(crate) layout: LayoutMode,
    pub(crate) on_layout_change: Callback<LayoutMode>,
}

#[function_component(SettingsPage)]
pub(crate) fn settings_page(props: &SettingsProps) -> Html {
    html! {
        <div class="settings">
            <section class="card">
                <h3>{"Tour listing"}</h3>
                <p class="muted">{"Choose how the tours view is laid out. The choice is saved in this browser and restored next time you open the console."}</p>
                <LayoutToggle layout={props.layout} on_change={props.on_layout_change.clone()} />
            </section>
            <section class="card">
                <h3>{"About"}</h3>
                <dl class="about">
                    <dt>{"Version"}</dt>
                    <dd>{env!("CARGO_PKG_VERSION")}</dd>
                    <dt>{"Preference key"}</dt>
                    <dd><code>{LAYOUT_KEY}</code></dd>
                </dl>
            </section>
        </div>
    }
}
