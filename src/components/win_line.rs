use yew::prelude::*;

use super::board::{BOARD_ID, cell_id};
use crate::error::AppError;
use crate::model::WinLine;
use crate::state::{Connector, Rect, connector_between};
use crate::util::cwarn;

/// Measures the first and last cell of `line` relative to the board container.
fn measure(line: WinLine) -> Result<Connector, AppError> {
    let document = web_sys::window()
        .ok_or(AppError::NoWindow)?
        .document()
        .ok_or(AppError::NoDocument)?;
    let find = |id: &str| {
        document
            .get_element_by_id(id)
            .ok_or_else(|| AppError::missing(id))
    };
    let container = find(BOARD_ID)?.get_bounding_client_rect();
    let rect_of = |(row, col): (usize, usize)| -> Result<Rect, AppError> {
        let r = find(&cell_id(row, col))?.get_bounding_client_rect();
        Ok(Rect {
            x: r.left() - container.left(),
            y: r.top() - container.top(),
            width: r.width(),
            height: r.height(),
        })
    };
    let (start, end) = line.ends();
    Ok(connector_between(rect_of(start)?, rect_of(end)?, container.height()))
}

#[derive(Properties, PartialEq, Clone)]
pub struct WinLineOverlayProps {
    pub line: WinLine,
}

#[function_component(WinLineOverlay)]
pub fn win_line_overlay(props: &WinLineOverlayProps) -> Html {
    let connector = use_state(|| None::<Connector>);
    {
        let connector = connector.clone();
        use_effect_with(props.line, move |line| {
            match measure(*line) {
                Ok(c) => connector.set(Some(c)),
                Err(e) => cwarn(&format!("win line not drawn: {e}")),
            }
            || ()
        });
    }
    match *connector {
        Some(c) => html! {
            <div
                id="arrow"
                style={format!("{} background:#f85149; border-radius:3px; opacity:0.85; pointer-events:none;", c.style(6.0))}
            ></div>
        },
        None => html! {},
    }
}
