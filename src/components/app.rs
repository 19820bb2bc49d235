use super::{
    board::BoardView, popup::Popup, scoreboard::Scoreboard, settings_modal::SettingsModal,
};
use crate::model::{GameAction, GameState, Phase};
use crate::settings::Settings;
use crate::state::PopupState;
use crate::util::cwarn;
use yew::prelude::*;

pub const WELCOME_MESSAGE: &str = "Heads up!\nThis is a cat-and-beetle game.\nThe Cat-Beetle presents";

fn initial_settings() -> Settings {
    match Settings::load() {
        Ok(Some(s)) => s,
        Ok(None) => Settings::default(),
        Err(e) => {
            cwarn(&format!("using default settings: {e}"));
            Settings::default()
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_state(initial_settings);
    let game = {
        let s = (*settings).clone();
        use_reducer(move || GameState::new(s.player_one, s.player_two))
    };
    let show_settings = use_state(|| false);

    // Closing any popup starts a fresh game.
    let start_game = {
        let game = game.clone();
        use_callback((), move |_: (), _| game.dispatch(GameAction::Reset))
    };

    // Popup wiring is built once here; `dismiss` hands out each close callback a single time.
    let popup = {
        let start_game = start_game.clone();
        use_mut_ref(move || PopupState::showing(WELCOME_MESSAGE, start_game))
    };
    let redraw = use_force_update();
    let dismiss_popup = {
        let popup = popup.clone();
        let redraw = redraw.clone();
        use_callback((), move |_: (), _| {
            let armed = popup.borrow_mut().dismiss();
            redraw.force_update();
            if let Some(on_close) = armed {
                on_close.emit(());
            }
        })
    };

    // Effects run after the DOM commit, so the new mark is on screen before the turn is evaluated.
    {
        let game_handle = game.clone();
        let popup = popup.clone();
        let redraw = redraw.clone();
        let start_game = start_game.clone();
        use_effect_with(game.phase, move |phase| {
            match phase {
                Phase::Evaluating { .. } => game_handle.dispatch(GameAction::Evaluate),
                Phase::GameOver(_) => {
                    if let Some(msg) = game_handle.outcome_message() {
                        popup.borrow_mut().show(msg, start_game);
                        redraw.force_update();
                    }
                }
                Phase::Welcome | Phase::AwaitingMove => {}
            }
            || ()
        });
    }

    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(true))
    };
    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(false))
    };
    let save_settings = {
        let settings = settings.clone();
        let game = game.clone();
        let show_settings = show_settings.clone();
        Callback::from(move |next: Settings| {
            let next = next.sanitized();
            if let Err(e) = next.save() {
                cwarn(&format!("settings not saved: {e}"));
            }
            game.dispatch(GameAction::RenamePlayers {
                one: next.player_one.clone(),
                two: next.player_two.clone(),
            });
            settings.set(next);
            show_settings.set(false);
        })
    };

    let current = match game.phase {
        Phase::AwaitingMove | Phase::Evaluating { .. } => Some(game.current),
        _ => None,
    };
    let popup_message = popup.borrow().message().map(str::to_string);

    html! {
        <div style="min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:16px;">
            <h1 style="margin:0; font-size:28px; color:#58a6ff;">{"Kit-Tac-Toe"}</h1>
            <Scoreboard players={game.players.clone()} current={current} turn={game.turn} />
            <BoardView game={game.clone()} show_win_line={settings.show_win_line} />
            <button onclick={open_settings} style="padding:4px 12px;">{"Settings"}</button>
            <SettingsModal
                show={*show_settings}
                settings={(*settings).clone()}
                on_save={save_settings}
                on_close={close_settings}
            />
            <Popup message={popup_message} on_dismiss={dismiss_popup} />
        </div>
    }
}
