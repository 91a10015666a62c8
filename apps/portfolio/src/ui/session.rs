use std::time::Duration;

use tokio::sync::mpsc;

use crate::errors::AppError;
use crate::ui::debounce::Debouncer;
use crate::ui::dispatch::{Dispatcher, Effect, UiEvent};

/// Scroll handling settles for this long before the active nav link updates.
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(100);

/// Replays a batch of page events in order and collects the resulting effects.
///
/// Scroll events go through the debouncer, so a burst of scrolls yields a
/// single `SetActiveNav` for the last position. Its effect is emitted once the
/// burst settles and may follow effects of events sent after it.
pub async fn run_session(
    dispatcher: &Dispatcher,
    events: Vec<UiEvent>,
) -> Result<Vec<Effect>, AppError> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut scroll_debouncer = Debouncer::new(SCROLL_DEBOUNCE);

    for event in events {
        let is_scroll = matches!(event, UiEvent::Scroll { .. });
        let effects = dispatcher.dispatch(event).await?;
        if is_scroll {
            let tx = tx.clone();
            scroll_debouncer.call(async move {
                for effect in effects {
                    // Receiver outlives every pending call.
                    let _ = tx.send(effect);
                }
            });
        } else {
            for effect in effects {
                let _ = tx.send(effect);
            }
        }
    }

    scroll_debouncer.flush().await;

    let mut collected = Vec::new();
    while let Ok(effect) = rx.try_recv() {
        collected.push(effect);
    }
    Ok(collected)
}
