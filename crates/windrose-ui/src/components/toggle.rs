use windrose_prefs::LayoutMode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToggleProps {
    pub(crate) layout: LayoutMode,
    pub(crate) on_change: Callback<LayoutMode>,
}

/// Segmented table/grid switch shared by the listing toolbar and settings.
#[function_component(LayoutToggle)]
pub(crate) fn layout_toggle(props: &ToggleProps) -> Html {
    html! {
        <div class="segmented" role="group" aria-label="Listing layout">
            {for LayoutMode::all().iter().map(|mode| {
                let mode = *mode;
                let active = mode == props.layout;
                let onclick = {
                    let cb = props.on_change.clone();
                    Callback::from(move |_| cb.emit(mode))
                };
                html! {
                    <button
                        class={classes!(if active { Some("active") } else { None })}
                        aria-pressed={active.to_string()}
                        onclick={onclick}
                    >
                        {mode_label(mode)}
                    </button>
                }
            })}
        </div>
    }
}

const fn mode_label(mode: LayoutMode) -> &'static str {
    match mode {
        LayoutMode::Table => "Table",
        LayoutMode::Grid => "Grid",
    }
}
