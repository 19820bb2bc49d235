pub mod connector;
pub mod popup;

pub use connector::{Connector, Rect, connector_between};
pub use popup::PopupState;
