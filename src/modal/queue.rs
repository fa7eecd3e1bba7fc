// SPDX-License-Identifier: MPL-2.0
//! Serialized presentation of modal requests.
//!
//! At most one modal is on screen. Further requests wait in FIFO order and
//! the head of the queue is always the one displayed.

use std::collections::VecDeque;
use std::fmt;

use super::request::{ModalDefaults, ModalId, ModalRequest, ModalSpec, ModalUpdate};
use crate::diagnostics::{DiagnosticsHandle, StateChange};

/// Messages for modal queue changes.
pub enum Message<C> {
    /// Queue a new request.
    Enqueue(ModalSpec<C>),
    /// Dismiss a request by id, or the current one when `None`.
    Dismiss(Option<ModalId>),
    /// Drop every request without running close callbacks.
    DismissAll,
    /// Merge fields into a queued request.
    Update(ModalId, ModalUpdate<C>),
}

/// FIFO of modal requests; the front is the current one.
///
/// Only the queue is stored, so "current is absent exactly when the queue is
/// empty, otherwise it is the head" holds by construction.
pub struct ModalQueue<C> {
    queue: VecDeque<ModalRequest<C>>,
    defaults: ModalDefaults,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<C> Default for ModalQueue<C> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
            defaults: ModalDefaults::default(),
            diagnostics: None,
        }
    }
}

impl<C> ModalQueue<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a queue resolving unset presentation fields from `defaults`.
    #[must_use]
    pub fn with_defaults(defaults: ModalDefaults) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    /// Sets the diagnostics handle used to record state changes.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    fn log(&self, change: StateChange) {
        if let Some(handle) = &self.diagnostics {
            handle.log_state(change);
        }
    }

    /// Appends a request and returns its id.
    ///
    /// If nothing was on screen the request becomes current immediately.
    pub fn enqueue(&mut self, spec: ModalSpec<C>) -> ModalId {
        let request = spec.into_request(self.defaults);
        let id = request.id();
        self.queue.push_back(request);

        self.log(StateChange::ModalEnqueued {
            id: id.value(),
            position: self.queue.len() - 1,
        });
        id
    }

    /// Dismisses the request with `id`, or the current one when `id` is
    /// `None`.
    ///
    /// The dismissed request's close callback runs exactly once, before this
    /// call returns and the next request is presented. Unknown ids are
    /// ignored. Returns whether a request was removed.
    pub fn dismiss(&mut self, id: Option<ModalId>) -> bool {
        let position = match id {
            Some(id) => self.position(id),
            None if self.queue.is_empty() => None,
            None => Some(0),
        };

        let Some(position) = position else {
            return false;
        };
        let Some(request) = self.queue.remove(position) else {
            return false;
        };

        self.log(StateChange::ModalDismissed {
            id: request.id().value(),
            was_current: position == 0,
        });
        request.close();
        true
    }

    /// Dismisses whatever is on screen.
    pub fn dismiss_current(&mut self) -> bool {
        self.dismiss(None)
    }

    /// Clears the queue. Close callbacks are not run; callers needing cleanup
    /// must dismiss requests one by one.
    pub fn dismiss_all(&mut self) {
        let discarded = self.queue.len();
        self.queue.clear();
        self.log(StateChange::ModalQueueCleared { discarded });
    }

    /// Merges `update` into the request with `id` without moving it.
    ///
    /// Returns `false` for unknown ids.
    pub fn update(&mut self, id: ModalId, update: ModalUpdate<C>) -> bool {
        match self.queue.iter_mut().find(|request| request.id() == id) {
            Some(request) => {
                request.apply(update);
                self.log(StateChange::ModalUpdated { id: id.value() });
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.queue.is_empty()
    }

    /// The request on screen.
    #[must_use]
    pub fn current(&self) -> Option<&ModalRequest<C>> {
        self.queue.front()
    }

    /// All requests in display order, current first.
    pub fn queue(&self) -> impl ExactSizeIterator<Item = &ModalRequest<C>> {
        self.queue.iter()
    }

    #[must_use]
    pub fn get(&self, id: ModalId) -> Option<&ModalRequest<C>> {
        self.queue.iter().find(|request| request.id() == id)
    }

    /// Number of requests including the current one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Applies a message. Returns the id of a newly queued request.
    pub fn handle_message(&mut self, message: Message<C>) -> Option<ModalId> {
        match message {
            Message::Enqueue(spec) => return Some(self.enqueue(spec)),
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::DismissAll => self.dismiss_all(),
            Message::Update(id, update) => {
                self.update(id, update);
            }
        }
        None
    }

    fn position(&self, id: ModalId) -> Option<usize> {
        self.queue.iter().position(|request| request.id() == id)
    }
}

impl<C: fmt::Debug> fmt::Debug for ModalQueue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalQueue")
            .field("queue", &self.queue)
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl<C: fmt::Debug> fmt::Debug for Message<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Enqueue(spec) => f.debug_tuple("Enqueue").field(spec).finish(),
            Message::Dismiss(id) => f.debug_tuple("Dismiss").field(id).finish(),
            Message::DismissAll => f.write_str("DismissAll"),
            Message::Update(id, update) => {
                f.debug_tuple("Update").field(id).field(update).finish()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use crate::modal::{PresentationKind, TransitionKind};
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;
    use std::rc::Rc;

    fn queue_contents(queue: &ModalQueue<&'static str>) -> Vec<&'static str> {
        queue.queue().map(|request| *request.content()).collect()
    }

    fn counting_spec(content: &'static str, counter: &Rc<Cell<u32>>) -> ModalSpec<&'static str> {
        let counter = Rc::clone(counter);
        ModalSpec::new(content).on_close(move || counter.set(counter.get() + 1))
    }

    #[test]
    fn new_queue_is_not_visible() {
        let queue: ModalQueue<()> = ModalQueue::new();
        assert!(!queue.is_visible());
        assert!(queue.current().is_none());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn first_enqueue_becomes_current() {
        let mut queue = ModalQueue::new();
        let id = queue.enqueue(ModalSpec::new("a"));

        assert!(queue.is_visible());
        assert_eq!(queue.current().map(ModalRequest::id), Some(id));
    }

    #[test]
    fn enqueued_ids_are_distinct() {
        let mut queue = ModalQueue::new();
        let ids: HashSet<ModalId> = (0..50).map(|_| queue.enqueue(ModalSpec::new(()))).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn dismiss_follows_fifo_order() {
        let mut queue = ModalQueue::new();
        queue.enqueue(ModalSpec::new("a"));
        queue.enqueue(ModalSpec::new("b"));
        queue.enqueue(ModalSpec::new("c"));

        assert_eq!(queue.current().map(|r| *r.content()), Some("a"));
        assert!(queue.dismiss(None));
        assert_eq!(queue.current().map(|r| *r.content()), Some("b"));
        assert!(queue.dismiss(None));
        assert_eq!(queue.current().map(|r| *r.content()), Some("c"));
        assert!(queue.dismiss(None));
        assert!(queue.current().is_none());
        assert!(!queue.is_visible());
    }

    #[test]
    fn dismiss_mid_queue_keeps_current() {
        let mut queue = ModalQueue::new();
        let a = queue.enqueue(ModalSpec::new("a"));
        let b = queue.enqueue(ModalSpec::new("b"));
        queue.enqueue(ModalSpec::new("c"));

        assert!(queue.dismiss(Some(b)));
        assert_eq!(queue_contents(&queue), vec!["a", "c"]);
        assert_eq!(queue.current().map(ModalRequest::id), Some(a));
    }

    #[test]
    fn dismiss_current_by_id_promotes_next() {
        let mut queue = ModalQueue::new();
        let a = queue.enqueue(ModalSpec::new("a"));
        queue.enqueue(ModalSpec::new("b"));

        assert!(queue.dismiss(Some(a)));
        assert_eq!(queue.current().map(|r| *r.content()), Some("b"));
    }

    #[test]
    fn dismiss_unknown_or_empty_is_no_op() {
        let mut empty: ModalQueue<&str> = ModalQueue::new();
        assert!(!empty.dismiss(None));

        let mut queue = ModalQueue::new();
        let a = queue.enqueue(ModalSpec::new("a"));
        queue.enqueue(ModalSpec::new("b"));
        queue.dismiss(Some(a));

        assert!(!queue.dismiss(Some(a)));
        assert_eq!(queue_contents(&queue), vec!["b"]);
    }

    #[test]
    fn on_close_runs_once_on_individual_dismiss() {
        let closed = Rc::new(Cell::new(0));
        let mut queue = ModalQueue::new();
        let id = queue.enqueue(counting_spec("a", &closed));

        queue.dismiss(Some(id));
        queue.dismiss(Some(id));
        queue.dismiss(None);

        assert_eq!(closed.get(), 1);
    }

    #[test]
    fn on_close_runs_for_queued_request_dismissed_early() {
        let closed = Rc::new(Cell::new(0));
        let mut queue = ModalQueue::new();
        queue.enqueue(ModalSpec::new("a"));
        let b = queue.enqueue(counting_spec("b", &closed));

        queue.dismiss(Some(b));
        assert_eq!(closed.get(), 1);
        assert_eq!(queue_contents(&queue), vec!["a"]);
    }

    #[test]
    fn dismiss_all_skips_on_close() {
        let closed = Rc::new(Cell::new(0));
        let mut queue = ModalQueue::new();
        queue.enqueue(counting_spec("a", &closed));
        queue.enqueue(counting_spec("b", &closed));

        queue.dismiss_all();

        assert_eq!(closed.get(), 0);
        assert!(!queue.is_visible());
        assert!(queue.is_empty());
    }

    #[test]
    fn callbacks_fire_in_dismissal_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut queue = ModalQueue::new();
        for name in ["a", "b", "c"] {
            let order = Rc::clone(&order);
            queue.enqueue(ModalSpec::new(name).on_close(move || order.borrow_mut().push(name)));
        }

        while queue.dismiss_current() {}

        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn update_merges_in_place() {
        let mut queue = ModalQueue::new();
        queue.enqueue(ModalSpec::new("a"));
        let b = queue.enqueue(ModalSpec::new("b").title("Pick a slot"));
        queue.enqueue(ModalSpec::new("c"));

        assert!(queue.update(
            b,
            ModalUpdate::new()
                .content("b2")
                .presentation(PresentationKind::Sheet)
                .background_color("#101010"),
        ));

        assert_eq!(queue_contents(&queue), vec!["a", "b2", "c"]);
        let updated = queue.get(b).unwrap();
        assert_eq!(updated.title(), Some("Pick a slot"));
        assert_eq!(updated.presentation(), PresentationKind::Sheet);
        assert_eq!(updated.background_color(), Some("#101010"));
    }

    #[test]
    fn update_current_keeps_it_current() {
        let mut queue = ModalQueue::new();
        let a = queue.enqueue(ModalSpec::new("a"));
        queue.enqueue(ModalSpec::new("b"));

        queue.update(a, ModalUpdate::new().title("Confirm booking"));
        assert_eq!(queue.current().and_then(ModalRequest::title), Some("Confirm booking"));
        assert_eq!(queue.current().map(ModalRequest::id), Some(a));
    }

    #[test]
    fn update_unknown_id_is_no_op() {
        let mut queue = ModalQueue::new();
        let a = queue.enqueue(ModalSpec::new("a"));
        queue.dismiss(Some(a));

        assert!(!queue.update(a, ModalUpdate::new().content("x")));
        assert!(queue.is_empty());
    }

    #[test]
    fn update_can_replace_on_close() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut queue = ModalQueue::new();
        let id = queue.enqueue(counting_spec("a", &first));

        let counter = Rc::clone(&second);
        queue.update(
            id,
            ModalUpdate::new().on_close(move || counter.set(counter.get() + 1)),
        );
        queue.dismiss(Some(id));

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn defaults_apply_to_unset_fields() {
        let mut queue = ModalQueue::with_defaults(ModalDefaults {
            presentation: PresentationKind::Fullscreen,
            transition: TransitionKind::Slide,
        });
        queue.enqueue(ModalSpec::new(()));

        let current = queue.current().unwrap();
        assert_eq!(current.presentation(), PresentationKind::Fullscreen);
        assert_eq!(current.transition(), TransitionKind::Slide);
    }

    #[test]
    fn handle_message_routes_operations() {
        let mut queue = ModalQueue::new();
        let a = queue
            .handle_message(Message::Enqueue(ModalSpec::new("a")))
            .expect("enqueue returns an id");
        queue.handle_message(Message::Enqueue(ModalSpec::new("b")));

        queue.handle_message(Message::Update(a, ModalUpdate::new().content("a2")));
        assert_eq!(queue_contents(&queue), vec!["a2", "b"]);

        queue.handle_message(Message::Dismiss(None));
        assert_eq!(queue_contents(&queue), vec!["b"]);

        queue.handle_message(Message::DismissAll);
        assert!(queue.is_empty());
    }

    #[test]
    fn state_changes_are_logged() {
        let mut collector = DiagnosticsCollector::default();
        let mut queue = ModalQueue::new();
        queue.set_diagnostics(collector.handle());

        let a = queue.enqueue(ModalSpec::new("a"));
        let b = queue.enqueue(ModalSpec::new("b"));
        queue.dismiss(Some(b));
        queue.dismiss_all();
        collector.process_pending();

        let changes: Vec<StateChange> = collector
            .iter()
            .filter_map(|event| match &event.kind {
                DiagnosticEventKind::StateChange { change } => Some(change.clone()),
                _ => None,
            })
            .collect();

        assert_eq!(
            changes,
            vec![
                StateChange::ModalEnqueued {
                    id: a.value(),
                    position: 0
                },
                StateChange::ModalEnqueued {
                    id: b.value(),
                    position: 1
                },
                StateChange::ModalDismissed {
                    id: b.value(),
                    was_current: false
                },
                StateChange::ModalQueueCleared { discarded: 1 },
            ]
        );
    }
}
