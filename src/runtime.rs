//! Command runtime
//!
//! Owns the model, the highlight store and the query cache. Every message
//! goes through `update`; the resulting commands are executed here and
//! their results are fed back as messages until nothing is left to do.
//! Store calls run one after another on the calling thread.

use std::sync::mpsc::{self, Receiver, Sender};

use tracing::{debug, trace, warn};

use crate::commands::Cmd;
use crate::messages::{DocumentMsg, Msg, ReaderMsg, StoreMsg};
use crate::model::{DocumentId, Highlight, InteractionMode, ReaderModel, UserId};
use crate::reconcile::HighlightPlan;
use crate::store::{HighlightStore, QueryCache, StoreError};
use crate::update::update;

pub struct Runtime<S: HighlightStore> {
    model: ReaderModel,
    store: S,
    cache: QueryCache,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    redraws: u64,
    native_selection_clears: u64,
}

impl<S: HighlightStore> Runtime<S> {
    pub fn new(model: ReaderModel, store: S) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            store,
            cache: QueryCache::new(),
            msg_tx,
            msg_rx,
            redraws: 0,
            native_selection_clears: 0,
        }
    }

    /// Load highlights for the current document
    pub fn start(&mut self) {
        self.dispatch(DocumentMsg::Refresh);
    }

    /// Feed one message through `update` and run everything it causes
    pub fn dispatch(&mut self, msg: impl Into<Msg>) {
        // The receiver lives in self, so the send cannot fail
        let _ = self.msg_tx.send(msg.into());
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.model, msg) {
                self.process_cmd(cmd);
            }
        }
    }

    /// Drive a complete drag from `from` to `to` in the given mode, then
    /// return to reading mode
    pub fn drag(&mut self, mode: InteractionMode, from: usize, to: usize) {
        self.dispatch(ReaderMsg::SetMode(mode));
        self.dispatch(ReaderMsg::PointerDown { offset: from });
        self.dispatch(ReaderMsg::PointerMove { offset: to });
        self.dispatch(ReaderMsg::PointerUp);
        self.dispatch(ReaderMsg::ExitModes);
    }

    pub fn model(&self) -> &ReaderModel {
        &self.model
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn redraws(&self) -> u64 {
        self.redraws
    }

    pub fn native_selection_clears(&self) -> u64 {
        self.native_selection_clears
    }

    pub fn into_parts(self) -> (ReaderModel, S) {
        (self.model, self.store)
    }

    fn send(&self, msg: impl Into<Msg>) {
        let _ = self.msg_tx.send(msg.into());
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {
                self.redraws += 1;
            }
            Cmd::ClearNativeSelection => {
                trace!("clearing native selection");
                self.native_selection_clears += 1;
            }
            Cmd::FetchHighlights {
                user,
                document,
                force,
            } => {
                if force {
                    self.cache.invalidate(&user, &document);
                }
                let result = self.fetch(&user, &document).map_err(|e| e.to_string());
                self.send(StoreMsg::HighlightsLoaded {
                    user,
                    document,
                    result,
                });
            }
            Cmd::ApplyPlan {
                user,
                document,
                plan,
            } => match self.apply_plan(&user, &document, &plan) {
                Ok((deleted, inserted)) => {
                    self.cache.invalidate(&user, &document);
                    self.send(StoreMsg::PlanApplied {
                        document,
                        deleted,
                        inserted,
                    });
                }
                Err(e) => {
                    // A partial batch may have changed the store; the next
                    // fetch must not be served from the cache
                    self.cache.invalidate(&user, &document);
                    self.send(StoreMsg::PlanFailed {
                        message: e.to_string(),
                    });
                }
            },
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    fn fetch(&mut self, user: &UserId, document: &DocumentId) -> Result<Vec<Highlight>, StoreError> {
        if let Some(rows) = self.cache.get(user, document) {
            trace!(%document, "highlight cache hit");
            return Ok(rows);
        }
        let rows = self.store.list(user, document)?;
        self.cache.put(user, document, rows.clone());
        Ok(rows)
    }

    /// Batch delete, then batch insert. A failed delete skips the insert.
    fn apply_plan(
        &mut self,
        user: &UserId,
        document: &DocumentId,
        plan: &HighlightPlan,
    ) -> Result<(usize, usize), StoreError> {
        if plan.is_empty() {
            return Ok((0, 0));
        }

        let deleted = if plan.deletions.is_empty() {
            0
        } else {
            let deleted = self.store.delete(user, &plan.deletions)?;
            if deleted != plan.deletions.len() {
                warn!(
                    %document,
                    requested = plan.deletions.len(),
                    deleted,
                    "store deleted fewer rows than requested"
                );
            }
            deleted
        };

        let inserted = if plan.insertions.is_empty() {
            0
        } else {
            self.store.insert(&plan.insertions)?.len()
        };

        debug!(%document, deleted, inserted, "applied highlight plan");
        Ok((deleted, inserted))
    }
}
