//! Property-based tests for the session controller.
//!
//! Random event sequences are fed to a session; after every step the
//! selection must point into the current filtered view and be on screen.

use proptest::prelude::*;
use pucy::model::InputEvent;
use pucy::state::{Outcome, Session, Transition};

#[derive(Debug, Clone)]
enum Step {
    Event(InputEvent),
    Resize(usize),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => Just(Step::Event(InputEvent::Down)),
        2 => Just(Step::Event(InputEvent::Up)),
        2 => prop::sample::select(vec!['a', 'b', 'x', ' ']).prop_map(|c| Step::Event(InputEvent::Char(c))),
        2 => Just(Step::Event(InputEvent::Backspace)),
        1 => Just(Step::Event(InputEvent::Other)),
        1 => (1usize..6).prop_map(Step::Resize),
    ]
}

fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[abAB]{0,6}", 0..30)
}

fn assert_invariants(session: &Session) -> Result<(), TestCaseError> {
    let len = session.view().len();
    let sel = session.selection();
    let rows = session.visible_rows().max(1);

    if len == 0 {
        prop_assert_eq!(sel.selected(), 0);
        prop_assert_eq!(sel.scroll_offset(), 0);
        prop_assert_eq!(session.selected_line(), None);
    } else {
        prop_assert!(sel.selected() < len, "selected {} out of {}", sel.selected(), len);
        prop_assert!(sel.scroll_offset() <= sel.selected());
        prop_assert!(sel.selected() < sel.scroll_offset() + rows);
        prop_assert!(session.selected_line().is_some());
    }

    let visible = session.visible_entries().count();
    prop_assert!(visible <= rows);
    Ok(())
}

proptest! {
    #[test]
    fn selection_stays_in_view(
        lines in lines_strategy(),
        rows in 1usize..6,
        steps in prop::collection::vec(step_strategy(), 0..60),
    ) {
        let mut session = Session::new(lines, rows);
        assert_invariants(&session)?;

        for step in steps {
            match step {
                Step::Event(event) => {
                    let transition = session.handle_event(event);
                    prop_assert!(!matches!(transition, Transition::Finished(_)));
                }
                Step::Resize(rows) => session.resize(rows),
            }
            assert_invariants(&session)?;
        }
    }

    #[test]
    fn query_edit_resets_selection(
        lines in lines_strategy(),
        downs in 0usize..10,
        ch in prop::sample::select(vec!['a', 'b']),
    ) {
        let mut session = Session::new(lines, 3);
        for _ in 0..downs {
            session.handle_event(InputEvent::Down);
        }

        session.handle_event(InputEvent::Char(ch));
        prop_assert_eq!(session.selection().selected(), 0);
        prop_assert_eq!(session.selection().scroll_offset(), 0);
    }

    #[test]
    fn confirm_returns_the_selected_line(
        lines in prop::collection::vec("[abAB]{1,6}", 1..30),
        downs in 0usize..40,
    ) {
        let mut session = Session::new(lines.clone(), 4);
        for _ in 0..downs {
            session.handle_event(InputEvent::Down);
        }

        let expected = lines[session.selection().selected()].clone();
        prop_assert_eq!(
            session.handle_event(InputEvent::Enter),
            Transition::Finished(Outcome::Confirmed(expected))
        );
    }

    #[test]
    fn typing_then_deleting_restores_the_query(
        lines in lines_strategy(),
        typed in "[abx ]{0,8}",
    ) {
        let mut session = Session::new(lines, 3);
        for ch in typed.chars() {
            session.handle_event(InputEvent::Char(ch));
        }
        prop_assert_eq!(session.query(), typed.as_str());

        for _ in 0..typed.chars().count() {
            prop_assert_eq!(session.handle_event(InputEvent::Backspace), Transition::Redraw);
        }
        prop_assert_eq!(session.query(), "");
        prop_assert_eq!(session.handle_event(InputEvent::Backspace), Transition::Ignored);
    }
}
