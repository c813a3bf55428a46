//! Search nodes.

use indexmap::IndexMap;
use lode_core::{Access, Dimensions, Position};
use lode_sample::VoxelSample;

use crate::action::{Action, ActionSet};
use crate::constraints::GenerationConstraints;
use crate::pattern::GeneratedPattern;

/// Where one access's player stands and how it got there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessTrack {
    /// Current head position.
    pub head: Position,
    /// Actions taken since the access was opened, oldest first.
    pub history: Vec<Action>,
}

/// Identity of a state for deduplication: dug blocks plus head positions.
///
/// Action histories are left out, so two orderings of the
/// same digs collapse into one key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateKey {
    dug: Vec<u32>,
    heads: Vec<Position>,
}

/// A node of the pattern search.
///
/// States are persistent values: [`expand`](Self::expand) never touches
/// `self` and every successor owns a deep copy of the sample. Equality
/// compares the sample and head positions, not histories.
#[derive(Clone, Debug)]
pub struct DiggingState {
    sample: VoxelSample,
    tracks: IndexMap<Access, AccessTrack>,
    /// Dense indices of dug blocks, sorted.
    dug: Vec<u32>,
    actions_taken: usize,
}

impl DiggingState {
    /// The starting state: `base` with the feet and head of every access
    /// dug, each head at its access.
    ///
    /// Accesses must lie inside `base`; a duplicated access is tracked
    /// once.
    pub fn initial(base: &VoxelSample, accesses: &[Access]) -> Self {
        let mut sample = base.clone();
        let mut tracks = IndexMap::with_capacity(accesses.len());
        for &access in accesses {
            for p in access.blocks() {
                sample.dig(p);
            }
            tracks.entry(access).or_insert_with(|| AccessTrack {
                head: access.head,
                history: Vec::new(),
            });
        }
        let dims = sample.dimensions();
        let dug = sample
            .positions_matching(|b| b.is_dug())
            .into_iter()
            .map(|p| dims.index(p) as u32)
            .collect();
        Self {
            sample,
            tracks,
            dug,
            actions_taken: 0,
        }
    }

    /// The sample as dug so far.
    pub fn sample(&self) -> &VoxelSample {
        &self.sample
    }

    /// Every access with its track, in declaration order.
    pub fn tracks(&self) -> impl Iterator<Item = (&Access, &AccessTrack)> + '_ {
        self.tracks.iter()
    }

    /// The track of `access`, if it belongs to this state.
    pub fn track(&self, access: &Access) -> Option<&AccessTrack> {
        self.tracks.get(access)
    }

    /// Actions taken over all accesses.
    pub fn actions_taken(&self) -> usize {
        self.actions_taken
    }

    /// Positions of every dug block, in index order.
    pub fn dug_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let dims = self.sample.dimensions();
        self.dug.iter().map(move |&i| dims.position_of(i as usize))
    }

    /// Whether every access's last action, if any, is a dig.
    ///
    /// Walking alone never changes the produced pattern, so only canonical
    /// states are worth reporting.
    pub fn is_canonical(&self) -> bool {
        self.tracks
            .values()
            .all(|t| t.history.last().map_or(true, Action::is_dig))
    }

    /// The deduplication key of this state.
    pub fn key(&self) -> StateKey {
        StateKey {
            dug: self.dug.clone(),
            heads: self.tracks.values().map(|t| t.head).collect(),
        }
    }

    /// Every state one action away, access by access in declaration order.
    ///
    /// Empty once the constraints forbid further actions. A move undoing
    /// an access's previous move is skipped.
    pub fn expand(&self, actions: &ActionSet, constraints: &GenerationConstraints) -> Vec<DiggingState> {
        if !constraints.allows(self.actions_taken, self.sample.dug_count()) {
            return Vec::new();
        }
        let mut successors = Vec::new();
        for (access, track) in &self.tracks {
            let previous = track.history.last();
            for action in actions {
                if previous.is_some_and(|p| action.is_inverse_of(p)) {
                    continue;
                }
                if !action.is_valid_for(&self.sample, track.head) {
                    continue;
                }
                if let Some(next) = self.after(access, *action) {
                    successors.push(next);
                }
            }
        }
        successors
    }

    /// The state after `access` performs `action`, or `None` if the action
    /// has no target in the sample.
    fn after(&self, access: &Access, action: Action) -> Option<DiggingState> {
        let head = self.tracks.get(access)?.head;
        let mut next = self.clone();
        match action {
            Action::Move(m) => {
                let dest = m.destination(&next.sample, head)?;
                next.track_mut(access)?.head = dest;
            }
            Action::Dig(d) => {
                let target = d.target(&next.sample, head)?;
                next.sample.dig(target);
                let index = next.sample.dimensions().index(target) as u32;
                if let Err(at) = next.dug.binary_search(&index) {
                    next.dug.insert(at, index);
                }
            }
        }
        next.track_mut(access)?.history.push(action);
        next.actions_taken += 1;
        Some(next)
    }

    fn track_mut(&mut self, access: &Access) -> Option<&mut AccessTrack> {
        self.tracks.get_mut(access)
    }

    /// The pattern that digs this state's blocks, tiled with the sample's
    /// dimensions as period.
    pub fn to_pattern(&self) -> GeneratedPattern {
        GeneratedPattern::from_state(
            self.sample.dimensions(),
            self.tracks
                .iter()
                .map(|(a, t)| (*a, t.history.clone()))
                .collect(),
            self.dug_positions().collect(),
        )
    }

    /// Dimensions of the state's sample.
    pub fn dimensions(&self) -> Dimensions {
        self.sample.dimensions()
    }
}

impl PartialEq for DiggingState {
    fn eq(&self, other: &Self) -> bool {
        self.sample == other.sample
            && self.tracks.len() == other.tracks.len()
            && self
                .tracks
                .iter()
                .all(|(a, t)| other.tracks.get(a).is_some_and(|o| o.head == t.head))
    }
}

impl Eq for DiggingState {}
