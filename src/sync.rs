//! Cart Synchronization Queue
//!
//! Serialized, coalescing task queue that keeps the server-side cart in step
//! with rapid local edits. At most one write is ever in flight; queued writes
//! that were superseded before starting are dropped, since every sync carries
//! a full cart snapshot and only the newest one matters.
//!
//! The cooperative single-threaded event model makes `Rc<RefCell<..>>` safe
//! here: every borrow is released before the drain loop awaits.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

use crate::models::{CartEntry, CartSnapshot};

/// Decide whether a cart change warrants a write, and with what payload.
/// Before hydration completes there is never a payload: writing the empty
/// local cart would clobber whatever the server already holds.
pub fn sync_payload(loaded: bool, cart_id: String, items: Vec<CartEntry>) -> Option<CartSnapshot> {
    if !loaded {
        return None;
    }
    Some(CartSnapshot { cart_id, items })
}

/// A deferred sync action: called once, resolves when the write settles.
/// Failures are handled (logged) inside the task body, never surfaced here.
type SyncTask = Box<dyn FnOnce() -> Pin<Box<dyn Future<Output = ()>>>>;

/// Backlog plus drain-ownership flag. Generic over the task type so the
/// state machine is testable without a browser event loop.
pub struct Backlog<T> {
    tasks: VecDeque<T>,
    draining: bool,
}

impl<T> Backlog<T> {
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
            draining: false,
        }
    }

    /// Append a task. Returns true if the caller now owns the drain loop
    /// (the queue was idle); false means an active drain will pick it up.
    pub fn push(&mut self, task: T) -> bool {
        self.tasks.push_back(task);
        if self.draining {
            false
        } else {
            self.draining = true;
            true
        }
    }

    /// Coalesce the backlog down to its newest task and pop it. Returns
    /// `None` once the backlog is empty, clearing the drain flag in the
    /// same step so no enqueue can slip between the check and the clear.
    pub fn take_next(&mut self) -> Option<T> {
        // Syncs always overwrite, so only the last queued task matters
        while self.tasks.len() > 1 {
            self.tasks.pop_front();
        }
        match self.tasks.pop_front() {
            Some(task) => Some(task),
            None => {
                self.draining = false;
                None
            }
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.draining && self.tasks.is_empty()
    }
}

impl<T> Default for Backlog<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to the cart's sync queue. Cheap to clone; all clones share the
/// same backlog.
#[derive(Clone)]
pub struct SyncQueue {
    backlog: Rc<RefCell<Backlog<SyncTask>>>,
}

impl SyncQueue {
    pub fn new() -> Self {
        Self {
            backlog: Rc::new(RefCell::new(Backlog::new())),
        }
    }

    /// Queue a sync task. Starts a drain loop if none is running; otherwise
    /// the running loop will reach it (or coalesce it away).
    pub fn enqueue<F, Fut>(&self, task: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let task: SyncTask =
            Box::new(move || Box::pin(task()) as Pin<Box<dyn Future<Output = ()>>>);
        let start_drain = self.backlog.borrow_mut().push(task);
        if start_drain {
            let queue = self.clone();
            spawn_local(async move {
                queue.drain().await;
            });
        }
    }

    /// Execute backlog tasks one at a time until empty. A failed task has
    /// already swallowed its error; the loop always advances.
    async fn drain(self) {
        loop {
            let next = self.backlog.borrow_mut().take_next();
            match next {
                Some(task) => task().await,
                None => break,
            }
        }
    }
}

impl Default for SyncQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuItem;

    #[test]
    fn no_payload_until_cart_loaded() {
        let entry = CartEntry {
            item: MenuItem {
                item_id: "a1".to_string(),
                name: "Cake".to_string(),
                description: String::new(),
            },
            count: 3,
        };

        // However many edits pile up before hydration, none may be written
        assert!(sync_payload(false, "DEMO".to_string(), Vec::new()).is_none());
        assert!(sync_payload(false, "DEMO".to_string(), vec![entry.clone()]).is_none());

        let snapshot = sync_payload(true, "DEMO".to_string(), vec![entry.clone()])
            .expect("loaded cart should produce a payload");
        assert_eq!(snapshot.cart_id, "DEMO");
        assert_eq!(snapshot.items, vec![entry]);
    }

    #[test]
    fn push_grants_drain_ownership_once() {
        let mut backlog: Backlog<u32> = Backlog::new();
        assert!(backlog.push(1), "first push should start a drain");
        assert!(!backlog.push(2), "drain already active");
        assert!(!backlog.push(3), "drain already active");
    }

    #[test]
    fn take_next_coalesces_to_newest() {
        let mut backlog: Backlog<u32> = Backlog::new();
        backlog.push(1);
        backlog.push(2);
        backlog.push(3);

        // 1 and 2 were superseded before executing; only 3 runs
        assert_eq!(backlog.take_next(), Some(3));
        assert_eq!(backlog.take_next(), None);
    }

    #[test]
    fn empty_take_next_returns_queue_to_idle() {
        let mut backlog: Backlog<u32> = Backlog::new();
        assert!(backlog.is_idle());

        backlog.push(1);
        assert!(!backlog.is_idle());

        assert_eq!(backlog.take_next(), Some(1));
        assert_eq!(backlog.take_next(), None);
        assert!(backlog.is_idle());

        // A fresh push after draining starts a new loop
        assert!(backlog.push(2));
    }

    #[test]
    fn tasks_arriving_mid_drain_are_picked_up() {
        let mut backlog: Backlog<u32> = Backlog::new();
        backlog.push(1);
        assert_eq!(backlog.take_next(), Some(1));

        // New task lands while task 1 is "in flight"; same drain owns it
        assert!(!backlog.push(2));
        assert_eq!(backlog.take_next(), Some(2));
        assert_eq!(backlog.take_next(), None);
    }

    /// Drives a `Backlog` the way the drain loop does, recording which
    /// payloads actually execute.
    fn drain_recording(backlog: &mut Backlog<u32>) -> Vec<u32> {
        let mut executed = Vec::new();
        while let Some(task) = backlog.take_next() {
            executed.push(task);
        }
        executed
    }

    #[test]
    fn burst_settles_to_single_final_write() {
        let mut backlog: Backlog<u32> = Backlog::new();
        // Rapid stepper clicks before any write completes
        backlog.push(1);
        backlog.push(2);
        backlog.push(3);

        assert_eq!(drain_recording(&mut backlog), vec![3]);
        assert!(backlog.is_idle());
    }

    #[test]
    fn failed_task_does_not_block_successor() {
        let mut backlog: Backlog<u32> = Backlog::new();
        backlog.push(10);

        // Task 10 executes and fails; failure is swallowed in the task
        // body, so the loop just moves on to whatever arrives next.
        assert_eq!(backlog.take_next(), Some(10));
        backlog.push(11);
        assert_eq!(backlog.take_next(), Some(11));
        assert_eq!(backlog.take_next(), None);
        assert!(backlog.is_idle());
    }
}
