use std::fmt;

/// Change notification emitted to registered listeners whenever the
/// underlying sequence is mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// Contents replaced wholesale. Fired on every replacement, including
    /// one whose new contents equal the old; consumers stay consistent by
    /// reacting to the notification, not by diffing.
    Replaced { len: usize },
    Inserted { index: usize },
    Removed { index: usize },
    Cleared,
}

type Listener = Box<dyn Fn(&ListEvent) + Send + Sync>;

/// A sequence container that notifies registered listeners on mutation.
/// All mutation goes through methods that emit a [`ListEvent`]; read access
/// is plain slice access.
pub struct ObservableList<T> {
    items: Vec<T>,
    listeners: Vec<Listener>,
}

impl<T> ObservableList<T> {
    pub fn new(items: Vec<T>) -> Self {
        ObservableList {
            items,
            listeners: Vec::new(),
        }
    }

    /// Register a listener invoked synchronously on every mutation.
    pub fn subscribe<F>(&mut self, f: F)
    where
        F: Fn(&ListEvent) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(f));
    }

    fn emit(&self, ev: ListEvent) {
        for l in &self.listeners {
            l(&ev);
        }
    }

    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        self.emit(ListEvent::Replaced {
            len: self.items.len(),
        });
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.emit(ListEvent::Inserted {
            index: self.items.len() - 1,
        });
    }

    /// Remove the element at `index`. Out-of-range indices are ignored and
    /// emit nothing.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.emit(ListEvent::Removed { index });
        Some(item)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.emit(ListEvent::Cleared);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for ObservableList<T> {
    fn default() -> Self {
        ObservableList::new(Vec::new())
    }
}

impl<T: fmt::Debug> fmt::Debug for ObservableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableList")
            .field("items", &self.items)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
