use yew::Callback;

/// Message and one-shot close callback for the modal popup.
#[derive(Clone, Default)]
pub struct PopupState {
    message: Option<String>,
    on_close: Option<Callback<()>>,
}

impl PopupState {
    pub fn showing(message: impl Into<String>, on_close: Callback<()>) -> Self {
        let mut popup = Self::default();
        popup.show(message, on_close);
        popup
    }

    /// Replaces any current message and arms `on_close` for the next dismissal.
    pub fn show(&mut self, message: impl Into<String>, on_close: Callback<()>) {
        self.message = Some(message.into());
        self.on_close = Some(on_close);
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Hides the popup and hands back the armed callback. Only the first dismissal after a `show` gets it.
    pub fn dismiss(&mut self) -> Option<Callback<()>> {
        self.message = None;
        self.on_close.take()
    }
}
