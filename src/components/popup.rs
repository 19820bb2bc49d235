use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PopupProps {
    /// `None` hides the popup.
    pub message: Option<String>,
    pub on_dismiss: Callback<()>,
}

#[function_component(Popup)]
pub fn popup(props: &PopupProps) -> Html {
    let Some(message) = props.message.clone() else {
        return html! {};
    };
    // Clicking the backdrop dismisses; clicks inside the dialog stop before reaching it.
    let backdrop_cb = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let close_cb = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(());
        })
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div id="popup" onclick={backdrop_cb} style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
            <div onclick={swallow} style="background:rgba(0,0,0,0.87); border:2px solid #30363d; padding:24px 32px; border-radius:12px; min-width:280px; max-width:420px; text-align:center; box-shadow:0 6px 18px rgba(0,0,0,0.6);">
                <div id="popupContent" style="white-space:pre-line; font-size:18px; line-height:1.5; margin-bottom:16px;">{ message }</div>
                <button id="popupClose" onclick={close_cb}>{"Close"}</button>
            </div>
        </div>
    }
}
