use yew::prelude::*;

use super::win_line::WinLineOverlay;
use crate::model::{BOARD_SIZE, Cell, CellVisual, GameAction, GameState, Outcome};

pub const BOARD_ID: &str = "gameContainer";

/// DOM id of a cell: row digit followed by column digit.
pub fn cell_id(row: usize, col: usize) -> String {
    format!("{row}{col}")
}

#[derive(Properties, PartialEq, Clone)]
pub struct BoardViewProps {
    pub game: UseReducerHandle<GameState>,
    pub show_win_line: bool,
}

#[function_component(BoardView)]
pub fn board_view(props: &BoardViewProps) -> Html {
    let game = &props.game;
    let cell_style = "width:96px; height:96px; display:flex; align-items:center; justify-content:center; font-size:56px; background:#161b22; border:1px solid #30363d; border-radius:8px; user-select:none;";

    let cells: Vec<Html> = (0..BOARD_SIZE)
        .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
        .map(|(row, col)| {
            let visual = game.cell_visual(row, col);
            // Only open cells get a handler; marked and locked cells cannot be selected.
            let onclick = (visual == CellVisual::Open).then(|| {
                let game = game.clone();
                Callback::from(move |_: MouseEvent| game.dispatch(GameAction::Select { row, col }))
            });
            let symbol = match game.board.get(row, col) {
                Some(Cell::Marked(mark)) => mark.symbol(),
                _ => "",
            };
            let cursor = if visual == CellVisual::Open { "cursor:pointer;" } else { "cursor:default;" };
            html! {
                <div
                    id={cell_id(row, col)}
                    class={classes!("cell", visual.class())}
                    style={format!("{} {}", cell_style, cursor)}
                    onclick={onclick}
                >
                    { symbol }
                </div>
            }
        })
        .collect();

    let win_line = match game.outcome() {
        Some(Outcome::Win { line, .. }) if props.show_win_line => html! { <WinLineOverlay line={line} /> },
        _ => html! {},
    };

    html! {
        <div
            id={BOARD_ID}
            class={classes!(game.is_board_locked().then_some("disabled"))}
            style="position:relative; display:grid; grid-template-columns:repeat(3, 96px); gap:6px; padding:6px; background:#0d1117; border:1px solid #30363d; border-radius:12px;"
        >
            { for cells }
            { win_line }
        </div>
    }
}
