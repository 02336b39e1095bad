use std::collections::HashSet;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Center,
    LeftPreview,
    RightPreview,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Back,
    Forward,
}

impl Step {
    fn direction(self) -> Direction {
        match self {
            Self::Back => Direction::Left,
            Self::Forward => Direction::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOffset {
    Settled,
    ShiftedLeft,
    ShiftedRight,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    Empty,
    #[error("duplicate carousel item id {0}")]
    DuplicateId(u32),
}

pub trait CarouselItem {
    fn item_id(&self) -> u32;
}

/// Classifies `candidate_index` against `center_index`. Both indices are
/// taken modulo `item_count`. With two items the non-center card satisfies
/// both preview conditions and resolves to `LeftPreview`; center always wins
/// over either preview. An empty carousel has no visible slots.
pub fn resolve_slot(item_count: usize, center_index: usize, candidate_index: usize) -> Slot {
    if item_count == 0 {
        return Slot::Hidden;
    }

    let center = center_index % item_count;
    let candidate = candidate_index % item_count;
    let distance = (candidate + item_count - center) % item_count;

    if distance == 0 {
        Slot::Center
    } else if distance == item_count - 1 {
        Slot::LeftPreview
    } else if distance == 1 {
        Slot::RightPreview
    } else {
        Slot::Hidden
    }
}

pub fn transition_offset(slot: Slot, direction: Direction) -> Option<TransitionOffset> {
    match (slot, direction) {
        (Slot::LeftPreview, Direction::Left) => Some(TransitionOffset::Settled),
        (Slot::LeftPreview, Direction::Right) => Some(TransitionOffset::ShiftedLeft),
        (Slot::RightPreview, Direction::Right) => Some(TransitionOffset::Settled),
        (Slot::RightPreview, Direction::Left) => Some(TransitionOffset::ShiftedRight),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingCommit {
    ticket: CommitTicket,
    target: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<T> {
    items: Vec<T>,
    center_index: usize,
    direction: Direction,
    pending: Option<PendingCommit>,
    issued: u64,
}

impl<T: CarouselItem> Carousel<T> {
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.item_id()) {
                return Err(CarouselError::DuplicateId(item.item_id()));
            }
        }

        Ok(Self {
            items,
            center_index: 0,
            direction: Direction::None,
            pending: None,
            issued: 0,
        })
    }
}

impl<T> Carousel<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn center_index(&self) -> usize {
        self.center_index
    }

    pub fn center_item(&self) -> &T {
        &self.items[self.center_index]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn has_pending_commit(&self) -> bool {
        self.pending.is_some()
    }

    pub fn slot_of(&self, index: usize) -> Slot {
        resolve_slot(self.items.len(), self.center_index, index)
    }

    pub fn offset_of(&self, index: usize) -> Option<TransitionOffset> {
        transition_offset(self.slot_of(index), self.direction)
    }

    pub fn is_indicator_active(&self, index: usize) -> bool {
        index % self.items.len() == self.center_index
    }

    /// Marks the transition toward the neighbour in `step` and schedules the
    /// center change. A commit still pending is superseded and the step is
    /// taken from its target, so quick repeated clicks all count.
    pub fn advance(&mut self, step: Step) -> CommitTicket {
        let len = self.items.len();
        let base = self.navigation_base();
        let target = match step {
            Step::Forward => (base + 1) % len,
            Step::Back => (base + len - 1) % len,
        };

        self.schedule(step.direction(), target)
    }

    pub fn jump_to(&mut self, target_index: usize) -> Option<CommitTicket> {
        let target = target_index % self.items.len();
        let base = self.navigation_base();
        if target == base {
            return None;
        }

        let direction = if target > base {
            Direction::Right
        } else {
            Direction::Left
        };
        Some(self.schedule(direction, target))
    }

    pub fn click(&mut self, index: usize) -> Option<CommitTicket> {
        match self.slot_of(index) {
            Slot::LeftPreview => Some(self.advance(Step::Back)),
            Slot::RightPreview => Some(self.advance(Step::Forward)),
            Slot::Center | Slot::Hidden => None,
        }
    }

    pub fn commit(&mut self, ticket: CommitTicket) -> bool {
        match self.pending {
            Some(pending) if pending.ticket == ticket => {
                log::debug!(
                    "carousel commit: center {} -> {}",
                    self.center_index,
                    pending.target
                );
                self.center_index = pending.target;
                self.direction = Direction::None;
                self.pending = None;
                true
            }
            _ => {
                log::debug!("carousel commit {ticket:?} ignored: superseded");
                false
            }
        }
    }

    fn navigation_base(&self) -> usize {
        self.pending
            .map(|pending| pending.target)
            .unwrap_or(self.center_index)
    }

    fn schedule(&mut self, direction: Direction, target: usize) -> CommitTicket {
        if let Some(previous) = self.pending {
            log::debug!(
                "carousel navigation supersedes pending commit to {}",
                previous.target
            );
        }

        self.issued += 1;
        let ticket = CommitTicket(self.issued);
        self.direction = direction;
        self.pending = Some(PendingCommit { ticket, target });
        ticket
    }
}
