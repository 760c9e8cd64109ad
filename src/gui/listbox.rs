//! List-box widgets and their observable data models
//!
//! A list box binds to a [`ListBoxModel`]. Models announce mutations by
//! bumping a monotonic version counter; widgets compare the counter on
//! access and resync derived state (checked flags, selection) lazily.
//! Two widgets can bind the same model by sharing it through
//! `Rc<RefCell<_>>`, for which a blanket model impl is provided.

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::input::{KeyStroke, KeyType};

/// Outcome of offering a key stroke to a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListBoxResult {
    Handled,
    Unhandled,
}

/// An observable, index-addressable collection of items
pub trait ListBoxModel<T: Clone> {
    /// Number of items in the model
    fn len(&self) -> usize;

    /// The item at an index, if in range
    fn item_at(&self, index: usize) -> Option<T>;

    /// Monotonic counter, bumped on every mutation. Widgets use it to
    /// detect changes without holding callbacks into the model.
    fn version(&self) -> u64;

    /// Smallest length the model has had at any point after `version`.
    /// Lazy observers use this to drop per-index state whose backing item
    /// was removed, even when the model has since grown back to its old
    /// length. Models that keep no history may return `len()`.
    fn min_len_since(&self, version: u64) -> usize {
        let _ = version;
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the first item equal to `item`
    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        (0..self.len()).find(|&i| self.item_at(i).as_ref() == Some(item))
    }
}

/// Vec-backed model
#[derive(Debug, Clone, Default)]
pub struct BasicListBoxModel<T> {
    items: Vec<T>,
    version: u64,
    // Compressed shrink history: (version after the removal, length after
    // the removal), sorted ascending on both. Answers `min_len_since` for
    // observers that were behind when the removal happened.
    shrinks: Vec<(u64, usize)>,
}

impl<T: Clone> BasicListBoxModel<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            version: 0,
            shrinks: Vec::new(),
        }
    }

    /// Append an item
    pub fn add_item(&mut self, item: T) {
        self.items.push(item);
        self.version += 1;
    }

    /// Insert an item, clamping the index to the end
    pub fn insert_item(&mut self, index: usize, item: T) {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
        self.version += 1;
    }

    /// Remove and return the item at an index
    pub fn remove_item(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        self.version += 1;
        let item = self.items.remove(index);
        self.record_shrink();
        Some(item)
    }

    /// Remove all items
    pub fn clear(&mut self) {
        self.items.clear();
        self.version += 1;
        self.record_shrink();
    }

    // Dominated entries (anything at least as long as the new low) are
    // dropped so the history stays small and sorted.
    fn record_shrink(&mut self) {
        let len = self.items.len();
        while self.shrinks.last().is_some_and(|&(_, low)| low >= len) {
            self.shrinks.pop();
        }
        self.shrinks.push((self.version, len));
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Clone> ListBoxModel<T> for BasicListBoxModel<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn item_at(&self, index: usize) -> Option<T> {
        self.items.get(index).cloned()
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn min_len_since(&self, version: u64) -> usize {
        self.shrinks
            .iter()
            .find(|&&(v, _)| v > version)
            .map_or(self.items.len(), |&(_, low)| low)
    }
}

/// Shared-model binding: several widgets can hold clones of the same
/// `Rc<RefCell<model>>`
impl<T: Clone, M: ListBoxModel<T>> ListBoxModel<T> for Rc<RefCell<M>> {
    fn len(&self) -> usize {
        self.borrow().len()
    }

    fn item_at(&self, index: usize) -> Option<T> {
        self.borrow().item_at(index)
    }

    fn version(&self) -> u64 {
        self.borrow().version()
    }

    fn min_len_since(&self, version: u64) -> usize {
        self.borrow().min_len_since(version)
    }
}

/// Selection movement shared by all list boxes
fn move_selection(selected: &mut usize, len: usize, stroke: &KeyStroke) -> ListBoxResult {
    if len == 0 {
        return ListBoxResult::Unhandled;
    }
    match stroke.key_type {
        KeyType::ArrowUp => {
            *selected = selected.saturating_sub(1);
            ListBoxResult::Handled
        }
        KeyType::ArrowDown => {
            *selected = (*selected + 1).min(len - 1);
            ListBoxResult::Handled
        }
        KeyType::Home => {
            *selected = 0;
            ListBoxResult::Handled
        }
        KeyType::End => {
            *selected = len - 1;
            ListBoxResult::Handled
        }
        _ => ListBoxResult::Unhandled,
    }
}

/// Whether a stroke activates the selected entry (Enter or Space)
fn is_activation(stroke: &KeyStroke) -> bool {
    stroke.key_type == KeyType::Enter || stroke.is_character(' ')
}

/// Clamp a selection index after the model changed size
fn clamp_selection(selected: &mut usize, len: usize) {
    if len == 0 {
        *selected = 0;
    } else if *selected >= len {
        *selected = len - 1;
    }
}

/// A list box where each entry carries an independent checked flag
pub struct CheckBoxList<T: Clone, M: ListBoxModel<T>> {
    model: M,
    checked: Vec<bool>,
    seen_version: u64,
    selected: usize,
    _item: PhantomData<fn() -> T>,
}

impl<T: Clone, M: ListBoxModel<T>> CheckBoxList<T, M> {
    /// Bind a check-box list to a model
    pub fn new(model: M) -> Self {
        let seen_version = model.version();
        Self {
            model,
            checked: Vec::new(),
            seen_version,
            selected: 0,
            _item: PhantomData,
        }
    }

    /// Drop checked flags whose backing item was removed since the last
    /// access (even if the model has since grown back) and pull the
    /// selection back into range. Runs lazily whenever the model's version
    /// moved since the last access.
    fn sync(&mut self) {
        let version = self.model.version();
        if version == self.seen_version {
            return;
        }
        let low = self.model.min_len_since(self.seen_version);
        self.seen_version = version;
        if self.checked.len() > low {
            self.checked.truncate(low);
        }
        clamp_selection(&mut self.selected, self.model.len());
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn len(&self) -> usize {
        self.model.len()
    }

    pub fn is_empty(&self) -> bool {
        self.model.is_empty()
    }

    /// Whether the entry at an index is checked; unknown indices are
    /// unchecked rather than an error
    pub fn is_checked(&mut self, index: usize) -> bool {
        self.sync();
        self.checked.get(index).copied().unwrap_or(false)
    }

    /// Check or uncheck the entry at an index; out-of-range indices are
    /// ignored
    pub fn set_checked(&mut self, index: usize, checked: bool) {
        self.sync();
        if index >= self.model.len() {
            return;
        }
        if self.checked.len() <= index {
            self.checked.resize(index + 1, false);
        }
        self.checked[index] = checked;
    }

    /// Check or uncheck the first entry equal to `item`
    pub fn set_item_checked(&mut self, item: &T, checked: bool)
    where
        T: PartialEq,
    {
        if let Some(index) = self.model.index_of(item) {
            self.set_checked(index, checked);
        }
    }

    /// All currently checked items
    pub fn checked_items(&mut self) -> Vec<T> {
        self.sync();
        (0..self.model.len())
            .filter(|&i| self.checked.get(i).copied().unwrap_or(false))
            .filter_map(|i| self.model.item_at(i))
            .collect()
    }

    pub fn selected_index(&mut self) -> usize {
        self.sync();
        self.selected
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.sync();
        self.selected = index;
        clamp_selection(&mut self.selected, self.model.len());
    }

    pub fn selected_item(&mut self) -> Option<T> {
        self.sync();
        self.model.item_at(self.selected)
    }

    /// Display label for an entry: `[x] item` or `[ ] item`
    pub fn entry_label(&mut self, index: usize) -> Option<String>
    where
        T: fmt::Display,
    {
        self.sync();
        let item = self.model.item_at(index)?;
        let mark = if self.checked.get(index).copied().unwrap_or(false) {
            'x'
        } else {
            ' '
        };
        Some(format!("[{}] {}", mark, item))
    }

    /// Enter/Space toggles the selected entry; arrows move the selection
    pub fn handle_key_stroke(&mut self, stroke: &KeyStroke) -> ListBoxResult {
        self.sync();
        if is_activation(stroke) && !self.model.is_empty() {
            let selected = self.selected;
            let checked = self.checked.get(selected).copied().unwrap_or(false);
            self.set_checked(selected, !checked);
            return ListBoxResult::Handled;
        }
        move_selection(&mut self.selected, self.model.len(), stroke)
    }
}

/// A list box where at most one entry is checked at a time
pub struct RadioBoxList<T: Clone, M: ListBoxModel<T>> {
    model: M,
    checked_index: Option<usize>,
    seen_version: u64,
    selected: usize,
    _item: PhantomData<fn() -> T>,
}

impl<T: Clone, M: ListBoxModel<T>> RadioBoxList<T, M> {
    /// Bind a radio-box list to a model
    pub fn new(model: M) -> Self {
        let seen_version = model.version();
        Self {
            model,
            checked_index: None,
            seen_version,
            selected: 0,
            _item: PhantomData,
        }
    }

    fn sync(&mut self) {
        let version = self.model.version();
        if version == self.seen_version {
            return;
        }
        let low = self.model.min_len_since(self.seen_version);
        self.seen_version = version;
        if let Some(checked) = self.checked_index {
            if checked >= low {
                self.checked_index = None;
            }
        }
        clamp_selection(&mut self.selected, self.model.len());
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn len(&self) -> usize {
        self.model.len()
    }

    pub fn is_empty(&self) -> bool {
        self.model.is_empty()
    }

    pub fn checked_index(&mut self) -> Option<usize> {
        self.sync();
        self.checked_index
    }

    pub fn checked_item(&mut self) -> Option<T> {
        self.sync();
        self.checked_index.and_then(|i| self.model.item_at(i))
    }

    /// Check the entry at an index, unchecking any previous one
    pub fn set_checked(&mut self, index: usize) {
        self.sync();
        if index < self.model.len() {
            self.checked_index = Some(index);
        }
    }

    /// Clear the checked entry
    pub fn clear_checked(&mut self) {
        self.checked_index = None;
    }

    pub fn selected_index(&mut self) -> usize {
        self.sync();
        self.selected
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.sync();
        self.selected = index;
        clamp_selection(&mut self.selected, self.model.len());
    }

    /// Display label for an entry: `<o> item` or `< > item`
    pub fn entry_label(&mut self, index: usize) -> Option<String>
    where
        T: fmt::Display,
    {
        self.sync();
        let item = self.model.item_at(index)?;
        let mark = if self.checked_index == Some(index) {
            'o'
        } else {
            ' '
        };
        Some(format!("<{}> {}", mark, item))
    }

    /// Enter/Space checks the selected entry; arrows move the selection
    pub fn handle_key_stroke(&mut self, stroke: &KeyStroke) -> ListBoxResult {
        self.sync();
        if is_activation(stroke) && !self.model.is_empty() {
            self.checked_index = Some(self.selected);
            return ListBoxResult::Handled;
        }
        move_selection(&mut self.selected, self.model.len(), stroke)
    }
}

/// A labeled action bound to a list entry
struct ActionItem {
    label: String,
    action: Box<dyn FnMut()>,
}

/// A list box whose entries run an action when activated
#[derive(Default)]
pub struct ActionListBox {
    items: Vec<ActionItem>,
    selected: usize,
}

impl ActionListBox {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
        }
    }

    /// Append a labeled action
    pub fn add_item(&mut self, label: impl Into<String>, action: impl FnMut() + 'static) {
        self.items.push(ActionItem {
            label: label.into(),
            action: Box::new(action),
        });
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.items.clear();
        self.selected = 0;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(|item| item.label.as_str())
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.selected = index;
        clamp_selection(&mut self.selected, self.items.len());
    }

    /// Run the selected action
    pub fn run_selected(&mut self) {
        if let Some(item) = self.items.get_mut(self.selected) {
            (item.action)();
        }
    }

    /// Enter/Space runs the selected action; arrows move the selection
    pub fn handle_key_stroke(&mut self, stroke: &KeyStroke) -> ListBoxResult {
        if is_activation(stroke) && !self.items.is_empty() {
            self.run_selected();
            return ListBoxResult::Handled;
        }
        move_selection(&mut self.selected, self.items.len(), stroke)
    }
}
