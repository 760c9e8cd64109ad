//! Behavioral contract tests for the virtual terminal
//!
//! These exercise the externally-visible terminal semantics end to end
//! over the headless device: clamping on explicit moves, wrapping on
//! implicit advances, prospective attributes, clear/resize interactions
//! and delegation to the backend.

use proptest::prelude::*;

use weft::input::KeyStroke;
use weft::terminal::{
    AnsiColor, DeviceEmulator, HeadlessDevice, Sgr, TerminalCharacter, TerminalPosition,
    TerminalSize, TextColor, VirtualTerminal,
};

fn terminal(columns: usize, rows: usize) -> VirtualTerminal<HeadlessDevice> {
    let size = TerminalSize::new(columns, rows);
    VirtualTerminal::new(HeadlessDevice::new(size), size)
}

#[test]
fn wrap_and_clamp_scenario() {
    // Terminal (5, 2): write A..F, then an out-of-range move, then shrink,
    // then one more character. Every boundary rule shows up once.
    let mut term = terminal(5, 2);
    for glyph in ['A', 'B', 'C', 'D', 'E', 'F'] {
        term.put_character(glyph);
    }

    let buffer = term.device().buffer();
    for (column, glyph) in ['A', 'B', 'C', 'D', 'E'].into_iter().enumerate() {
        assert_eq!(
            buffer
                .character_at(TerminalPosition::new(column as i32, 0))
                .unwrap()
                .glyph,
            glyph
        );
    }
    // F wrapped to the second row
    assert_eq!(
        buffer.character_at(TerminalPosition::new(0, 1)).unwrap().glyph,
        'F'
    );
    assert_eq!(term.cursor_position(), TerminalPosition::new(1, 1));

    // Explicit move clamps, never wraps
    term.move_cursor(10, 10);
    assert_eq!(term.cursor_position(), TerminalPosition::new(4, 1));

    // Shrinking leaves the raw cursor out of bounds
    term.set_terminal_size(TerminalSize::new(3, 3));
    term.device_mut().resize_buffer(TerminalSize::new(3, 3));
    assert_eq!(term.cursor_position(), TerminalPosition::new(4, 1));

    // The next put re-applies the wrap rules before writing
    term.put_character('Z');
    assert_eq!(
        term.device()
            .buffer()
            .character_at(TerminalPosition::new(0, 2))
            .unwrap()
            .glyph,
        'Z'
    );
    assert_eq!(term.cursor_position(), TerminalPosition::new(1, 2));
}

#[test]
fn no_scroll_at_bottom_right_corner() {
    let mut term = terminal(4, 3);
    term.move_cursor(100, 100);
    assert_eq!(term.cursor_position(), TerminalPosition::new(3, 2));

    // Writing in the corner wraps the column but the row stays clamped
    term.put_character('!');
    assert_eq!(term.cursor_position(), TerminalPosition::new(0, 2));
    term.put_character('?');
    assert_eq!(term.cursor_position(), TerminalPosition::new(1, 2));

    // Top rows were never touched by any scroll
    let buffer = term.device().buffer();
    assert_eq!(
        buffer.character_at(TerminalPosition::new(3, 2)).unwrap().glyph,
        '!'
    );
    assert_eq!(
        buffer.character_at(TerminalPosition::new(0, 2)).unwrap().glyph,
        '?'
    );
    assert_eq!(
        buffer.character_at(TerminalPosition::new(0, 0)).unwrap(),
        TerminalCharacter::DEFAULT
    );
}

#[test]
fn attributes_and_colors_are_prospective_only() {
    let mut term = terminal(10, 2);
    term.put_character('p');

    term.enable_sgr(Sgr::Bold);
    term.set_foreground_color(AnsiColor::Cyan);
    term.put_character('q');

    let buffer = term.device().buffer();
    let plain = buffer.character_at(TerminalPosition::new(0, 0)).unwrap();
    let styled = buffer.character_at(TerminalPosition::new(1, 0)).unwrap();

    assert!(!plain.attributes.contains(Sgr::Bold));
    assert_eq!(plain.foreground, TextColor::Default);
    assert!(styled.attributes.contains(Sgr::Bold));
    assert_eq!(styled.foreground, TextColor::Ansi(AnsiColor::Cyan));
}

#[test]
fn clear_screen_resets_cells_but_not_state() {
    let mut term = terminal(6, 3);
    term.set_background_color(TextColor::indexed(53));
    term.enable_sgr(Sgr::Reverse);
    for glyph in "hello!".chars() {
        term.put_character(glyph);
    }
    let cursor_before = term.cursor_position();

    term.clear_screen();

    let buffer = term.device().buffer();
    for row in 0..3 {
        for column in 0..6 {
            assert_eq!(
                buffer
                    .character_at(TerminalPosition::new(column, row))
                    .unwrap(),
                TerminalCharacter::DEFAULT
            );
        }
    }
    assert_eq!(term.cursor_position(), cursor_before);
    assert_eq!(term.background_color(), TextColor::Indexed(53));
    assert!(term.active_sgr().contains(Sgr::Reverse));
}

#[test]
fn backend_sees_exactly_one_call_per_delegated_operation() {
    let mut term = terminal(8, 4);

    term.enter_private_mode();
    assert_eq!(term.device().mode_switches(), 1);
    assert!(term.device().is_private_mode());

    term.exit_private_mode();
    assert_eq!(term.device().mode_switches(), 2);
    assert!(!term.device().is_private_mode());

    term.set_cursor_visible(false);
    assert!(!term.device().is_cursor_visible());

    term.flush();
    assert_eq!(term.device().flush_count(), 1);

    // None of the delegations touched terminal-local state
    assert_eq!(term.cursor_position(), TerminalPosition::TOP_LEFT);
    assert_eq!(term.foreground_color(), TextColor::Default);
    assert!(term.active_sgr().is_empty());
}

#[test]
fn input_flows_back_from_the_device() {
    let mut term = terminal(8, 4);
    term.device_mut().queue_input(KeyStroke::from_char('y'));

    assert_eq!(term.poll_input().unwrap(), Some(KeyStroke::from_char('y')));
    assert_eq!(term.poll_input().unwrap(), None);
    assert!(term.read_input().is_err());
}

proptest! {
    #[test]
    fn move_cursor_always_lands_in_bounds(
        x in -100i32..200,
        y in -100i32..200,
        cols in 1usize..120,
        rows in 1usize..50,
    ) {
        let mut term = terminal(cols, rows);
        term.move_cursor(x, y);
        let cursor = term.cursor_position();
        prop_assert_eq!(cursor.column, x.clamp(0, cols as i32 - 1));
        prop_assert_eq!(cursor.row, y.clamp(0, rows as i32 - 1));
    }

    #[test]
    fn put_character_never_escapes_the_grid(
        glyphs in proptest::collection::vec(proptest::char::range('a', 'z'), 1..200),
        cols in 1usize..40,
        rows in 1usize..10,
    ) {
        let mut term = terminal(cols, rows);
        for glyph in glyphs {
            term.put_character(glyph);
            let cursor = term.cursor_position();
            prop_assert!(cursor.column >= 0 && (cursor.column as usize) < cols);
            prop_assert!(cursor.row >= 0 && (cursor.row as usize) < rows);
        }
    }

    #[test]
    fn consecutive_puts_wrap_at_the_right_edge(
        cols in 2usize..40,
        rows in 2usize..10,
    ) {
        let mut term = terminal(cols, rows);
        term.move_cursor(cols as i32 - 1, 0);
        term.put_character('x');
        let cursor = term.cursor_position();
        prop_assert_eq!(cursor, TerminalPosition::new(0, 1));
    }
}
