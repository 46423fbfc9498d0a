//! Shared trait for the view models behind each screen.

use crate::app::Message;

/// A view model owns the model state a screen renders and turns screen
/// messages into model changes.
pub trait ViewModel {
    /// Handles a message, optionally asking the app to route another one.
    fn update(&mut self, message: Message) -> Option<Message>;
}
