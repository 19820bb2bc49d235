use yew::prelude::*;

use crate::model::{MAX_TURNS, Player, PlayerSlot};

#[derive(Properties, PartialEq, Clone)]
pub struct ScoreboardProps {
    pub players: [Player; 2],
    /// Player on move; `None` while the board is locked between games.
    pub current: Option<PlayerSlot>,
    pub turn: u8,
}

#[function_component]
pub fn Scoreboard(props: &ScoreboardProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px; padding:4px 8px; border-radius:6px;";
    let value_style = "min-width:90px; text-align:right; font-variant-numeric:tabular-nums;";
    let rows: Vec<Html> = [PlayerSlot::One, PlayerSlot::Two]
        .into_iter()
        .zip(props.players.iter())
        .map(|(slot, p)| {
            let highlight = if props.current == Some(slot) {
                "background:#1c2128; border:1px solid #58a6ff;"
            } else {
                "border:1px solid transparent;"
            };
            html! {
                <div style={format!("{} {}", row_style, highlight)}>
                    <span style="width:20px; text-align:center;">{ p.mark.symbol() }</span>
                    <span style="flex:1; font-weight:600;">{ p.name.clone() }</span>
                    <span style={value_style} title="wins / losses / draws">
                        { format!("{} / {} / {}", p.tally.wins, p.tally.losses, p.tally.draws) }
                    </span>
                </div>
            }
        })
        .collect();
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:300px; display:flex; flex-direction:column; gap:6px; font-size:14px;">
            { for rows }
            <div style="font-size:11px; opacity:0.7; text-align:center;">{ format!("Turn {}/{}", props.turn, MAX_TURNS) }</div>
        </div>
    }
}
