mod components;
mod error;
mod model;
mod settings;
mod state;
mod util;

use components::App;
use error::AppError;

const MOUNT_ID: &str = "app";

fn mount_point() -> Result<web_sys::Element, AppError> {
    let window = web_sys::window().ok_or(AppError::NoWindow)?;
    let document = window.document().ok_or(AppError::NoDocument)?;
    document
        .get_element_by_id(MOUNT_ID)
        .ok_or_else(|| AppError::missing(MOUNT_ID))
}

fn main() {
    match mount_point() {
        Ok(root) => {
            yew::Renderer::<App>::with_root(root).render();
        }
        Err(e) => util::cwarn(&format!("kit-tac-toe cannot start: {e}")),
    }
}
