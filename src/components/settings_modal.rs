use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::settings::Settings;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub settings: Settings,
    pub on_save: Callback<Settings>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    let draft = use_state(|| props.settings.clone());
    // Start from the saved values every time the modal opens.
    {
        let draft = draft.clone();
        let settings = props.settings.clone();
        use_effect_with(props.show, move |_| {
            draft.set(settings);
            || ()
        });
    }
    if !props.show {
        return html! {};
    }

    let name_input = |apply: fn(&mut Settings, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
        })
    };
    let on_one = name_input(|s, v| s.player_one = v);
    let on_two = name_input(|s, v| s.player_two = v);
    let toggle_line_cb = {
        let draft = draft.clone();
        Callback::from(move |_| {
            let mut next = (*draft).clone();
            next.show_win_line = !next.show_win_line;
            draft.set(next);
        })
    };
    let save_cb = {
        let cb = props.on_save.clone();
        let draft = draft.clone();
        Callback::from(move |_| cb.emit((*draft).clone()))
    };
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let label_style = "display:flex; flex-direction:column; gap:4px; font-size:13px;";
    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:40;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:320px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <label style={label_style}>
                <span>{"Player one (✕)"}</span>
                <input type="text" value={draft.player_one.clone()} oninput={on_one} />
            </label>
            <label style={label_style}>
                <span>{"Player two (◯)"}</span>
                <input type="text" value={draft.player_two.clone()} oninput={on_two} />
            </label>
            <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                <input type="checkbox" checked={draft.show_win_line} onclick={toggle_line_cb} />
                <span>{"Show winning line"}</span>
            </label>
            <div style="display:flex; gap:8px;">
                <button onclick={save_cb} style="flex:1;">{"Save"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Cancel"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Names are kept in this browser. Scores reset when the page reloads."}</div>
        </div>
    </div>}
}
