//! Routes window events to the game controller and folds the resulting effects into the view.

use guess_core::{GameController, SecretSource};

use crate::controller::events::UiEvent;
use crate::controller::reducer::ViewState;

pub fn dispatch_ui_event<S: SecretSource>(
    game: &mut GameController<S>,
    view: &mut ViewState,
    event: UiEvent,
) {
    tracing::debug!(event = event.name(), "dispatching ui event");

    let effects = match event {
        UiEvent::StartPressed => game.start_round(&view.limit_input),
        UiEvent::GuessSubmitted => game.submit_guess(&view.guess_input),
        UiEvent::DialogDismissed => {
            view.dismiss_dialog();
            return;
        }
    };
    view.apply_all(effects);
}
