//! Lucky-number slot lifecycle. Every badge click walks one container
//! through Empty -> Loading -> Showing (or a short-lived Notice), and
//! the registry here is the single source of truth for which slots
//! currently show a number.

use std::collections::HashMap;

use serde::Deserialize;

use crate::api::types::{Category, CategorySet};

/// Wire shape of the lucky-number endpoint. Every field is optional;
/// an empty body means "no number for this category".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LuckyNumberResponse {
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub sum: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl LuckyNumberResponse {
    pub fn into_outcome(self) -> LuckyOutcome {
        match self.number {
            Some(number) if !number.is_empty() => LuckyOutcome::Found(LuckyNumber {
                number,
                sum: self.sum,
                keywords: self.keywords,
            }),
            _ => LuckyOutcome::NotFound,
        }
    }
}

/// A number the endpoint handed back, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuckyNumber {
    pub number: String,
    pub sum: Option<String>,
    pub keywords: Vec<String>,
}

/// What a fetch round ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LuckyOutcome {
    Found(LuckyNumber),
    NotFound,
    Failed,
}

/// Where a slot is in its click cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotPhase {
    /// Showing its original badge markup.
    #[default]
    Empty,
    /// A fetch is in flight. Another click starts a second fetch; the
    /// response that lands last wins.
    Loading,
    /// Showing a fetched number.
    Showing,
    /// Showing a not-found or error notice, about to revert.
    Notice,
}

/// One badge container's slot state.
#[derive(Debug, Clone, Default)]
pub struct LuckySlot {
    phase: SlotPhase,
    /// Original badge markup, captured before the first swap and kept
    /// for every later revert.
    captured: Option<String>,
    /// Which result to ask for next; advances while numbers are showing.
    index: u32,
}

impl LuckySlot {
    pub fn phase(&self) -> SlotPhase {
        self.phase
    }

    pub fn is_showing(&self) -> bool {
        self.phase == SlotPhase::Showing
    }

    /// Remember the container's default markup. Only the first call
    /// takes; replacement markup must never overwrite the original.
    pub fn capture_default(&mut self, html: &str) {
        if self.captured.is_none() {
            self.captured = Some(html.to_owned());
        }
    }

    /// Enter Loading and return the result index to request. A slot
    /// already showing a number asks for the next one; anything else
    /// starts over from zero.
    pub fn begin_fetch(&mut self) -> u32 {
        self.index = if self.phase == SlotPhase::Showing {
            self.index + 1
        } else {
            0
        };
        self.phase = SlotPhase::Loading;
        self.index
    }

    /// Settle the in-flight fetch and return the phase to render.
    pub fn finish_fetch(&mut self, outcome: &LuckyOutcome) -> SlotPhase {
        self.phase = match outcome {
            LuckyOutcome::Found(_) => SlotPhase::Showing,
            LuckyOutcome::NotFound | LuckyOutcome::Failed => SlotPhase::Notice,
        };
        self.phase
    }

    /// Drop back to Empty and hand out the captured markup to restore.
    /// The capture itself stays for the next cycle.
    pub fn revert(&mut self) -> Option<String> {
        self.phase = SlotPhase::Empty;
        self.captured.clone()
    }
}

#[derive(Debug, Clone)]
struct ContainerEntry {
    name: String,
    category: Category,
    slot: LuckySlot,
}

/// Slot registry keyed by container element id. Desktop and modal
/// containers of the same chart live side by side.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    slots: HashMap<String, ContainerEntry>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch or create the slot for a container.
    pub fn slot_mut(
        &mut self,
        container_id: &str,
        name: &str,
        category: Category,
    ) -> &mut LuckySlot {
        let entry = self
            .slots
            .entry(container_id.to_owned())
            .or_insert_with(|| ContainerEntry {
                name: name.to_owned(),
                category,
                slot: LuckySlot::default(),
            });
        &mut entry.slot
    }

    pub fn slot(&self, container_id: &str) -> Option<&LuckySlot> {
        self.slots.get(container_id).map(|entry| &entry.slot)
    }

    /// Union of categories currently showing a number for a chart name,
    /// across its desktop and modal containers.
    pub fn lucky_for(&self, name: &str) -> CategorySet {
        self.slots
            .values()
            .filter(|entry| entry.name == name && entry.slot.is_showing())
            .map(|entry| entry.category)
            .collect()
    }
}
