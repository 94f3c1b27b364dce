//! Event handling for bookdex's TUI.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::connectivity::ConnectivityProbe;
use crate::logic::{
    decrease_max_results, increase_max_results, move_sel, reset_results, submit_search,
};
use crate::state::{AppState, QueryInput};

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    probe: &dyn ConnectivityProbe,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    if let CEvent::Key(ke) = ev {
        if ke.kind != KeyEventKind::Press {
            return false;
        }
        match (ke.code, ke.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => return true,
            (KeyCode::Char('a'), KeyModifiers::CONTROL) => increase_max_results(app),
            (KeyCode::Char('x'), KeyModifiers::CONTROL) => decrease_max_results(app),
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => reset_results(app),
            (KeyCode::Enter, _) => submit_search(app, probe, query_tx),
            (KeyCode::Backspace, _) => {
                app.input.pop();
            }
            (KeyCode::Up, _) => move_sel(app, -1),
            (KeyCode::Down, _) => move_sel(app, 1),
            (KeyCode::PageUp, _) => move_sel(app, -10),
            (KeyCode::PageDown, _) => move_sel(app, 10),
            (KeyCode::Char(ch), m) if !m.contains(KeyModifiers::CONTROL) => {
                app.input.push(ch);
            }
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::handle_event;
    use crate::connectivity::StaticProbe;
    use crate::state::{AppState, QueryInput};
    use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc;

    fn key(code: KeyCode, mods: KeyModifiers) -> CEvent {
        CEvent::Key(KeyEvent::new(code, mods))
    }

    #[test]
    fn typing_edits_input_and_ctrl_chords_do_not() {
        let mut app = AppState::default();
        let (tx, _rx) = mpsc::unbounded_channel::<QueryInput>();
        let probe = StaticProbe(true);
        for ch in "dune".chars() {
            handle_event(key(KeyCode::Char(ch), KeyModifiers::NONE), &mut app, &probe, &tx);
        }
        assert_eq!(app.input, "dune");
        handle_event(key(KeyCode::Char('a'), KeyModifiers::CONTROL), &mut app, &probe, &tx);
        assert_eq!(app.input, "dune");
        assert_eq!(app.max_results, 15);
        handle_event(key(KeyCode::Backspace, KeyModifiers::NONE), &mut app, &probe, &tx);
        assert_eq!(app.input, "dun");
    }

    #[test]
    fn quit_chords_signal_exit() {
        let mut app = AppState::default();
        let (tx, _rx) = mpsc::unbounded_channel::<QueryInput>();
        let probe = StaticProbe(true);
        assert!(handle_event(
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app,
            &probe,
            &tx
        ));
        assert!(handle_event(key(KeyCode::Esc, KeyModifiers::NONE), &mut app, &probe, &tx));
        assert!(!handle_event(key(KeyCode::Up, KeyModifiers::NONE), &mut app, &probe, &tx));
    }
}
