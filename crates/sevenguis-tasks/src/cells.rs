//! Cells task
//!
//! The spreadsheet store behind the cells grid: raw text in, computed
//! values out. Listeners register for change notification and deregister
//! by dropping the returned guard, so observation is tied to the scope
//! that owns it.

use log::debug;
use sevenguis_core::{CellAddr, ComputedSheet, GridSpec, RawSheet};
use sevenguis_formula::recompute;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Listener = Box<dyn FnMut(&ComputedSheet)>;

struct Slot {
    alive: Rc<Cell<bool>>,
    listener: Listener,
}

/// Keeps its listener registered for as long as it lives.
///
/// Dropping the guard deregisters the listener; it is removed from the
/// store's table on the next notification.
#[derive(Debug)]
pub struct WatchGuard {
    alive: Rc<Cell<bool>>,
}

impl Drop for WatchGuard {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

/// State for the cells grid.
///
/// The grid geometry is supplied at construction and only used to
/// enumerate addresses; the sheet itself is driven purely by what was
/// typed into it.
pub struct CellsStore {
    grid: GridSpec,
    raw: RawSheet,
    computed: ComputedSheet,
    slots: Rc<RefCell<Vec<Slot>>>,
}

impl CellsStore {
    pub fn new(grid: GridSpec) -> Self {
        Self {
            grid,
            raw: RawSheet::new(),
            computed: ComputedSheet::new(),
            slots: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    pub fn raw(&self) -> &RawSheet {
        &self.raw
    }

    pub fn computed(&self) -> &ComputedSheet {
        &self.computed
    }

    /// Record what was typed into a cell.
    pub fn edit(&mut self, addr: CellAddr, text: impl Into<String>) {
        self.raw.set(addr, text);
    }

    /// Display text for one cell, as the grid shows it.
    pub fn display(&self, addr: &CellAddr) -> String {
        self.computed.display(addr)
    }

    /// Recompute the sheet. Listeners are notified only when something
    /// actually changed; returns whether it did.
    pub fn refresh(&mut self) -> bool {
        let pass = recompute(&self.raw, &self.computed);
        if pass.changed {
            self.computed = pass.computed;
            self.notify();
        }
        pass.changed
    }

    /// Observe computed-sheet changes until the returned guard is dropped.
    ///
    /// Listeners may drop guards (their own included) from inside the
    /// callback; registering a new listener from there is not supported.
    pub fn watch(&self, listener: impl FnMut(&ComputedSheet) + 'static) -> WatchGuard {
        let alive = Rc::new(Cell::new(true));
        self.slots.borrow_mut().push(Slot {
            alive: alive.clone(),
            listener: Box::new(listener),
        });
        WatchGuard { alive }
    }

    fn notify(&self) {
        let mut slots = self.slots.borrow_mut();
        slots.retain(|slot| slot.alive.get());
        debug!("sheet changed, notifying {} listeners", slots.len());
        for slot in slots.iter_mut() {
            // A callback may have dropped a later guard mid-pass
            if slot.alive.get() {
                (slot.listener)(&self.computed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sevenguis_core::CellOutcome;

    fn addr(s: &str) -> CellAddr {
        CellAddr::parse(s).unwrap()
    }

    fn store() -> CellsStore {
        CellsStore::new(GridSpec::default())
    }

    #[test]
    fn test_edit_and_refresh() {
        let mut store = store();
        store.edit(addr("A1"), "2");
        store.edit(addr("B1"), "=A1*3");

        assert!(store.refresh());
        assert_eq!(store.display(&addr("B1")), "6");
        assert_eq!(
            store.computed().get(&addr("B1")),
            Some(&CellOutcome::Number(6.0))
        );

        // Nothing changed, nothing to report
        assert!(!store.refresh());
    }

    #[test]
    fn test_errors_render_as_markers() {
        let mut store = store();
        store.edit(addr("A1"), "=A1+1");
        store.edit(addr("B1"), "words");
        store.refresh();

        assert_eq!(store.display(&addr("A1")), "!CYCLIC");
        assert_eq!(store.display(&addr("B1")), "!NaN");
        assert_eq!(store.display(&addr("C1")), "");
    }

    #[test]
    fn test_watch_fires_on_change_only() {
        let mut store = store();
        let seen = Rc::new(Cell::new(0u32));

        let seen_by_listener = seen.clone();
        let _guard = store.watch(move |_| {
            seen_by_listener.set(seen_by_listener.get() + 1);
        });

        store.edit(addr("A1"), "1");
        store.refresh();
        assert_eq!(seen.get(), 1);

        // No edit: no change, no notification
        store.refresh();
        assert_eq!(seen.get(), 1);

        store.edit(addr("A1"), "2");
        store.refresh();
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn test_dropped_guard_stops_notifications() {
        let mut store = store();
        let seen = Rc::new(Cell::new(0u32));

        let seen_by_listener = seen.clone();
        let guard = store.watch(move |_| {
            seen_by_listener.set(seen_by_listener.get() + 1);
        });

        store.edit(addr("A1"), "1");
        store.refresh();
        assert_eq!(seen.get(), 1);

        drop(guard);
        store.edit(addr("A1"), "2");
        store.refresh();
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn test_listener_sees_fresh_sheet() {
        let mut store = store();
        let observed = Rc::new(RefCell::new(String::new()));

        let observed_by_listener = observed.clone();
        let _guard = store.watch(move |computed| {
            *observed_by_listener.borrow_mut() = computed.display(&addr("B1"));
        });

        store.edit(addr("A1"), "4");
        store.edit(addr("B1"), "=A1/2");
        store.refresh();

        assert_eq!(*observed.borrow(), "2");
    }
}
