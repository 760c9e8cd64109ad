//! Window abstractions
//!
//! A [`Window`] is a collection of components grouped together, usually
//! drawn with a border and a title. Windows carry hints telling the
//! surrounding system how they would like to be treated; a [`WindowStack`]
//! is a minimal z-ordered manager that places windows (cascading, or
//! centered when hinted), routes input to the top window and prunes closed
//! ones. Focus traversal and layout management live outside this crate.

use tracing::debug;

use crate::input::{KeyStroke, KeyType};
use crate::terminal::{TerminalPosition, TerminalSize};

/// Meta-data stored along with a window that gives the surrounding system
/// ideas about how the window wants to be treated. Hints may be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowHint {
    /// Draw no decorations; decorated size equals the window size
    NoDecorations,
    /// Skip post-rendering effects such as a drop shadow
    NoPostRendering,
    /// Place the window at the center of the terminal instead of cascading
    Centered,
    /// Never let the window grow past the terminal size
    FitTerminalWindow,
}

/// The base unit of the windowing system
pub trait Window {
    /// Title of the window
    fn title(&self) -> &str;

    /// Whether the window wants to be visible; managers may ignore this
    fn is_visible(&self) -> bool;

    /// Whether the window needs re-drawing
    fn is_invalid(&self) -> bool;

    /// The size this window would like to be
    fn preferred_size(&self) -> TerminalSize;

    /// Close the window, removing it from the GUI on the next prune
    fn close(&mut self);

    /// Whether `close` has been called
    fn is_closed(&self) -> bool;

    /// Hints for the window manager
    fn hints(&self) -> &[WindowHint];

    /// Top-left position of the window's usable space, as last placed
    fn position(&self) -> TerminalPosition;

    /// Called by the manager to record where the window was placed
    fn set_position(&mut self, position: TerminalPosition);

    /// Last known size, excluding decorations
    fn size(&self) -> TerminalSize;

    /// Called by the manager to record the allotted drawing area
    fn set_size(&mut self, size: TerminalSize);

    /// Last known size including decorations put on by the manager
    fn decorated_size(&self) -> TerminalSize;

    /// Called by the manager to record the decorated size
    fn set_decorated_size(&mut self, size: TerminalSize);

    /// Offer a key stroke to the window; `true` if it was consumed
    fn handle_input(&mut self, stroke: &KeyStroke) -> bool;

    /// Where the terminal cursor should sit for this window, in local
    /// coordinates, or `None` to keep it hidden
    fn cursor_position(&self) -> Option<TerminalPosition> {
        None
    }

    /// Translate a position in the window's local coordinate space to
    /// global coordinates
    fn to_global(&self, local: TerminalPosition) -> TerminalPosition {
        let origin = self.position();
        TerminalPosition::new(origin.column + local.column, origin.row + local.row)
    }
}

/// A plain window holding the state the [`Window`] trait exposes.
/// Escape closes it; other input is left for the surrounding system.
pub struct BasicWindow {
    title: String,
    visible: bool,
    invalid: bool,
    closed: bool,
    hints: Vec<WindowHint>,
    preferred_size: TerminalSize,
    position: TerminalPosition,
    size: TerminalSize,
    decorated_size: TerminalSize,
}

impl BasicWindow {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            visible: true,
            invalid: false,
            closed: false,
            hints: Vec::new(),
            preferred_size: TerminalSize::new(0, 0),
            position: TerminalPosition::TOP_LEFT,
            size: TerminalSize::new(0, 0),
            decorated_size: TerminalSize::new(0, 0),
        }
    }

    /// Builder-style hint attachment
    pub fn with_hint(mut self, hint: WindowHint) -> Self {
        self.hints.push(hint);
        self
    }

    pub fn set_preferred_size(&mut self, size: TerminalSize) {
        self.preferred_size = size;
        self.invalid = true;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Mark the window as needing a re-draw
    pub fn invalidate(&mut self) {
        self.invalid = true;
    }

    /// Called by a renderer once the window has been drawn
    pub fn validate(&mut self) {
        self.invalid = false;
    }

    pub fn has_hint(&self, hint: WindowHint) -> bool {
        self.hints.contains(&hint)
    }
}

impl Window for BasicWindow {
    fn title(&self) -> &str {
        &self.title
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn is_invalid(&self) -> bool {
        self.invalid
    }

    fn preferred_size(&self) -> TerminalSize {
        self.preferred_size
    }

    fn close(&mut self) {
        self.closed = true;
        self.visible = false;
    }

    fn is_closed(&self) -> bool {
        self.closed
    }

    fn hints(&self) -> &[WindowHint] {
        &self.hints
    }

    fn position(&self) -> TerminalPosition {
        self.position
    }

    fn set_position(&mut self, position: TerminalPosition) {
        self.position = position;
    }

    fn size(&self) -> TerminalSize {
        self.size
    }

    fn set_size(&mut self, size: TerminalSize) {
        self.size = size;
    }

    fn decorated_size(&self) -> TerminalSize {
        self.decorated_size
    }

    fn set_decorated_size(&mut self, size: TerminalSize) {
        self.decorated_size = size;
    }

    fn handle_input(&mut self, stroke: &KeyStroke) -> bool {
        if stroke.key_type == KeyType::Escape {
            self.close();
            return true;
        }
        false
    }
}

/// Horizontal/vertical cells a decoration border adds on each side
const DECORATION_CELLS: usize = 2;

/// Offset between successively cascaded windows
const CASCADE_STEP: i32 = 2;

/// A minimal stacked window manager
#[derive(Default)]
pub struct WindowStack {
    windows: Vec<Box<dyn Window>>,
    next_cascade: i32,
}

impl WindowStack {
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            next_cascade: 0,
        }
    }

    /// Add a window on top of the stack, placing and sizing it against the
    /// given terminal size
    pub fn add_window(&mut self, mut window: Box<dyn Window>, terminal_size: TerminalSize) {
        let mut size = window.preferred_size();
        if window.hints().contains(&WindowHint::FitTerminalWindow) {
            size = TerminalSize::new(
                size.columns.min(terminal_size.columns),
                size.rows.min(terminal_size.rows),
            );
        }
        let decorated = if window.hints().contains(&WindowHint::NoDecorations) {
            size
        } else {
            TerminalSize::new(size.columns + DECORATION_CELLS, size.rows + DECORATION_CELLS)
        };

        let position = if window.hints().contains(&WindowHint::Centered) {
            TerminalPosition::new(
                center_axis(terminal_size.columns, decorated.columns),
                center_axis(terminal_size.rows, decorated.rows),
            )
        } else {
            let offset = self.next_cascade;
            self.next_cascade += CASCADE_STEP;
            // The cascade moves diagonally, so restart it before it walks
            // off the shorter of the two terminal edges
            let shorter_edge = terminal_size.rows.min(terminal_size.columns) as i32;
            if self.next_cascade >= shorter_edge {
                self.next_cascade = 0;
            }
            TerminalPosition::new(offset, offset)
        };

        debug!(title = window.title(), ?position, "window placed");
        window.set_size(size);
        window.set_decorated_size(decorated);
        window.set_position(position);
        self.windows.push(window);
    }

    /// Number of windows in the stack
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// The window currently on top
    pub fn top_window(&self) -> Option<&dyn Window> {
        self.windows.last().map(|boxed| boxed.as_ref())
    }

    pub fn top_window_mut(&mut self) -> Option<&mut (dyn Window + 'static)> {
        self.windows.last_mut().map(|boxed| boxed.as_mut())
    }

    /// All windows, bottom to top
    pub fn windows(&self) -> impl Iterator<Item = &dyn Window> {
        self.windows.iter().map(|boxed| boxed.as_ref())
    }

    /// Route a key stroke to the top window; `true` if it was consumed.
    /// Closed windows are pruned afterwards.
    pub fn handle_input(&mut self, stroke: &KeyStroke) -> bool {
        let handled = match self.windows.last_mut() {
            Some(window) => window.handle_input(stroke),
            None => false,
        };
        self.prune_closed();
        handled
    }

    /// Remove windows whose `close` has been called
    pub fn prune_closed(&mut self) {
        self.windows.retain(|window| !window.is_closed());
    }
}

/// Top-left coordinate that centers `extent` inside `available`
fn center_axis(available: usize, extent: usize) -> i32 {
    (available.saturating_sub(extent) / 2) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized_window(title: &str, columns: usize, rows: usize) -> BasicWindow {
        let mut window = BasicWindow::new(title);
        window.set_preferred_size(TerminalSize::new(columns, rows));
        window
    }

    #[test]
    fn test_basic_window_state() {
        let mut window = sized_window("test", 10, 5);
        assert_eq!(window.title(), "test");
        assert!(window.is_visible());
        assert!(window.is_invalid());
        window.validate();
        assert!(!window.is_invalid());

        window.close();
        assert!(window.is_closed());
        assert!(!window.is_visible());
    }

    #[test]
    fn test_escape_closes() {
        let mut window = sized_window("test", 10, 5);
        assert!(!window.handle_input(&KeyStroke::from_char('a')));
        assert!(window.handle_input(&KeyStroke::of(KeyType::Escape)));
        assert!(window.is_closed());
    }

    #[test]
    fn test_to_global() {
        let mut window = sized_window("test", 10, 5);
        window.set_position(TerminalPosition::new(4, 2));
        assert_eq!(
            window.to_global(TerminalPosition::new(1, 1)),
            TerminalPosition::new(5, 3)
        );
    }

    #[test]
    fn test_cascading_placement() {
        let terminal = TerminalSize::new(80, 24);
        let mut stack = WindowStack::new();
        stack.add_window(Box::new(sized_window("first", 20, 6)), terminal);
        stack.add_window(Box::new(sized_window("second", 20, 6)), terminal);

        let positions: Vec<TerminalPosition> =
            stack.windows().map(|window| window.position()).collect();
        assert_eq!(positions[0], TerminalPosition::new(0, 0));
        assert_eq!(positions[1], TerminalPosition::new(2, 2));
        assert_eq!(stack.top_window().unwrap().title(), "second");
    }

    #[test]
    fn test_cascade_restarts_on_narrow_terminal() {
        // Tall but narrow: the cascade has to restart before walking off
        // the right edge, not only the bottom one
        let terminal = TerminalSize::new(6, 30);
        let mut stack = WindowStack::new();
        for i in 0..4 {
            stack.add_window(Box::new(sized_window(&format!("w{}", i), 4, 3)), terminal);
        }

        for window in stack.windows() {
            assert!(window.position().column < terminal.columns as i32);
        }
        assert_eq!(
            stack.top_window().unwrap().position(),
            TerminalPosition::TOP_LEFT
        );
    }

    #[test]
    fn test_centered_hint() {
        let terminal = TerminalSize::new(80, 24);
        let mut stack = WindowStack::new();
        let window = sized_window("centered", 20, 10).with_hint(WindowHint::Centered);
        stack.add_window(Box::new(window), terminal);

        let placed = stack.top_window().unwrap();
        // Decorated size is 22x12; centered within 80x24
        assert_eq!(placed.decorated_size(), TerminalSize::new(22, 12));
        assert_eq!(placed.position(), TerminalPosition::new(29, 6));
    }

    #[test]
    fn test_undecorated_window_size() {
        let terminal = TerminalSize::new(80, 24);
        let mut stack = WindowStack::new();
        let window = sized_window("plain", 20, 10).with_hint(WindowHint::NoDecorations);
        stack.add_window(Box::new(window), terminal);

        let placed = stack.top_window().unwrap();
        assert_eq!(placed.decorated_size(), placed.size());
    }

    #[test]
    fn test_fit_terminal_hint_clamps_size() {
        let terminal = TerminalSize::new(30, 10);
        let mut stack = WindowStack::new();
        let window = sized_window("big", 100, 50).with_hint(WindowHint::FitTerminalWindow);
        stack.add_window(Box::new(window), terminal);

        assert_eq!(stack.top_window().unwrap().size(), TerminalSize::new(30, 10));
    }

    #[test]
    fn test_input_routed_to_top_and_pruned() {
        let terminal = TerminalSize::new(80, 24);
        let mut stack = WindowStack::new();
        stack.add_window(Box::new(sized_window("bottom", 10, 5)), terminal);
        stack.add_window(Box::new(sized_window("top", 10, 5)), terminal);
        assert_eq!(stack.len(), 2);

        // Escape closes the top window only
        assert!(stack.handle_input(&KeyStroke::of(KeyType::Escape)));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.top_window().unwrap().title(), "bottom");

        // Unhandled input leaves the stack alone
        assert!(!stack.handle_input(&KeyStroke::from_char('z')));
        assert_eq!(stack.len(), 1);
    }
}
