use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ConfirmProps {
    /// Title of the tour awaiting confirmation; `None` hides the dialog.
    pub(crate) pending: Option<String>,
    pub(crate) on_close: Callback<()>,
    pub(crate) on_confirm: Callback<()>,
}

#[function_component(ConfirmDialog)]
pub(crate) fn confirm_dialog(props: &ConfirmProps) -> Html {
    let Some(title) = &props.pending else {
        return html! {};
    };

    html! {
        <div class="confirm-overlay" role="dialog" aria-modal="true">
            <div class="card">
                <header>
                    <h4>{"Unpublish tour?"}</h4>
                </header>
                <p class="muted">{format!("\"{title}\" will be hidden from the public site until you publish it again.")}</p>
                <div class="actions">
                    <button class="ghost" onclick={{
                        let cb = props.on_close.clone();
                        Callback::from(move |_| cb.emit(()))
                    }}>{"Keep published"}</button>
                    <button class="solid danger" onclick={{
                        let cb = props.on_confirm.clone();
                        Callback::from(move |_| cb.emit(()))
                    }}>{"Unpublish"}</button>
                </div>
            </div>
        </div>
    }
}
