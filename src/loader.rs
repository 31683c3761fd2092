//! Asset loading collaborators
//!
//! Two small pieces sit between the presentation core and the renderer:
//!
//! - [`AssetLoader`] runs fire-and-forget loads on worker threads and reports
//!   back over a channel. Success and failure both end in the same
//!   "ready" state; the placeholder stays up until then.
//! - [`VisibilityObserver`] holds one-shot subscriptions: the first signal for
//!   a region fires its callbacks and drops them.
//!
//! Every load is tagged with the presentation generation that issued it.
//! Completions from an older generation are dropped, so loads still in flight
//! when the slide set is rebuilt finish as harmless no-ops.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::hash::Hash;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tracing::debug;

use crate::assets::AssetRef;

/// How a load ended; the renderer does not distinguish the two
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

/// Completion message sent from a load thread to the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadMessage {
    pub generation: u64,
    pub asset: AssetRef,
    pub outcome: LoadOutcome,
}

/// Cloneable handle that starts loads for one generation
#[derive(Debug, Clone)]
pub struct LoadRequester {
    root: PathBuf,
    generation: u64,
    tx: Sender<LoadMessage>,
}

impl LoadRequester {
    /// Start loading `asset` in the background
    pub fn load(&self, asset: AssetRef) {
        let path = self.root.join(asset.as_str());
        let tx = self.tx.clone();
        let generation = self.generation;

        thread::spawn(move || {
            let outcome = read_asset(&path);
            debug!("Asset {} finished: {:?}", asset, outcome);
            // Receiver gone means the app is shutting down
            let _ = tx.send(LoadMessage {
                generation,
                asset,
                outcome,
            });
        });
    }
}

fn read_asset(path: &Path) -> LoadOutcome {
    match fs::read(path) {
        Ok(_) => LoadOutcome::Loaded,
        Err(_) => LoadOutcome::Failed,
    }
}

/// Owns the completion channel and the current generation
#[derive(Debug)]
pub struct AssetLoader {
    root: PathBuf,
    generation: u64,
    tx: Sender<LoadMessage>,
    rx: Receiver<LoadMessage>,
}

impl AssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            root: root.into(),
            generation: 0,
            tx,
            rx,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Adopt a new generation; later requesters tag their loads with it
    pub fn set_generation(&mut self, generation: u64) {
        self.generation = generation;
    }

    pub fn requester(&self) -> LoadRequester {
        LoadRequester {
            root: self.root.clone(),
            generation: self.generation,
            tx: self.tx.clone(),
        }
    }

    /// Drain completed loads into `board` without blocking.
    ///
    /// Returns how many completions were applied.
    pub fn poll(&self, board: &mut AssetBoard) -> usize {
        let mut applied = 0;
        while let Ok(message) = self.rx.try_recv() {
            if board.complete(&message) {
                applied += 1;
            }
        }
        applied
    }
}

/// Display readiness of assets for the current generation
#[derive(Debug, Clone, Default)]
pub struct AssetBoard {
    generation: u64,
    ready: HashSet<AssetRef>,
}

impl AssetBoard {
    pub fn new(generation: u64) -> Self {
        Self {
            generation,
            ready: HashSet::new(),
        }
    }

    /// Start over for a rebuilt slide set
    pub fn reset(&mut self, generation: u64) {
        self.generation = generation;
        self.ready.clear();
    }

    /// Record a completion; stale generations are ignored
    pub fn complete(&mut self, message: &LoadMessage) -> bool {
        if message.generation != self.generation {
            debug!(
                "Dropping stale load of {} (generation {} != {})",
                message.asset, message.generation, self.generation
            );
            return false;
        }
        self.ready.insert(message.asset.clone())
    }

    pub fn is_ready(&self, asset: &AssetRef) -> bool {
        self.ready.contains(asset)
    }
}

type Callback = Box<dyn FnOnce()>;

/// Handle to a one-shot visibility registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription<K> {
    key: K,
    id: u64,
}

impl<K: Eq + Hash> Subscription<K> {
    /// Remove the registration before it fires. Harmless if it already fired.
    pub fn unsubscribe(self, observer: &mut VisibilityObserver<K>) {
        observer.remove(&self.key, self.id);
    }
}

/// One-shot "became visible" subscriptions keyed by region
pub struct VisibilityObserver<K> {
    next_id: u64,
    pending: HashMap<K, Vec<(u64, Callback)>>,
}

impl<K> Default for VisibilityObserver<K> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> VisibilityObserver<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` to run the first time `region` becomes visible
    pub fn subscribe(&mut self, region: K, callback: impl FnOnce() + 'static) -> Subscription<K> {
        let id = self.next_id;
        self.next_id += 1;
        self.pending
            .entry(region.clone())
            .or_default()
            .push((id, Box::new(callback)));
        Subscription { key: region, id }
    }

    /// Report `region` as visible. Fires and deregisters its callbacks;
    /// returns how many ran.
    pub fn signal(&mut self, region: &K) -> usize {
        let Some(callbacks) = self.pending.remove(region) else {
            return 0;
        };
        let fired = callbacks.len();
        for (_, callback) in callbacks {
            callback();
        }
        fired
    }

    /// Number of registrations still waiting
    pub fn pending(&self) -> usize {
        self.pending.values().map(Vec::len).sum()
    }

    /// Drop every registration without firing
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<K: Eq + Hash> VisibilityObserver<K> {
    fn remove(&mut self, region: &K, id: u64) {
        if let Some(callbacks) = self.pending.get_mut(region) {
            callbacks.retain(|(existing, _)| *existing != id);
            if callbacks.is_empty() {
                self.pending.remove(region);
            }
        }
    }
}
