use super::state::UiMessage;

/// Rendering sink for the controller. A browser binding maps these onto the
/// document; tests and the terminal client record or print them.
pub trait ChatView {
    fn append_message(&mut self, message: &UiMessage);

    fn show_typing(&mut self);

    fn hide_typing(&mut self);

    fn set_input(&mut self, _text: &str) {}

    fn set_placeholder(&mut self, _text: &str) {}

    fn set_popup_visible(&mut self, _visible: bool) {}

    fn set_mic_visible(&mut self, _visible: bool) {}

    /// Marks `language` as the only active language control.
    fn set_active_language(&mut self, _language: &str) {}
}
