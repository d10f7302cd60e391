use crate::anim::easing::Easing;
use crate::anim::transition::Transition;
use crate::api::config::DonutConfig;
use crate::api::types::{Category, CategorySet};
use crate::core::allocation::{allocate, Allocation};

/// State for one rendered donut: which categories qualify, which are
/// active, which the user marked lucky, and what the ring currently
/// shows. Desktop and modal variants of the same chart are separate
/// instances sharing a name key.
#[derive(Debug, Clone)]
pub struct ChartInstance {
    /// Key shared between the desktop and modal variants of one chart.
    name: String,
    modal: bool,
    /// Categories with a qualifying good attribute. Fixed after setup.
    statuses: CategorySet,
    /// Categories eligible for a base share. Fixed after setup.
    active: CategorySet,
    /// User-picked bonus categories.
    lucky: CategorySet,
    /// What the ring currently shows; the start state of the next
    /// animated redraw.
    last_painted: Allocation,
    config: DonutConfig,
}

impl ChartInstance {
    pub fn new(
        name: impl Into<String>,
        modal: bool,
        statuses: CategorySet,
        active: CategorySet,
        config: DonutConfig,
    ) -> Self {
        let mut chart = Self {
            name: name.into(),
            modal,
            statuses,
            active,
            lucky: CategorySet::EMPTY,
            last_painted: Allocation::default(),
            config,
        };
        chart.last_painted = chart.target();
        chart
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_modal(&self) -> bool {
        self.modal
    }

    pub fn config(&self) -> &DonutConfig {
        &self.config
    }

    pub fn lucky(&self) -> CategorySet {
        self.lucky
    }

    /// The distribution the ring should settle on for the current state.
    pub fn target(&self) -> Allocation {
        allocate(self.statuses, self.active, self.lucky)
    }

    /// Mark a category lucky. Returns true when the set actually grew.
    pub fn add_lucky(&mut self, cat: Category) -> bool {
        let added = self.lucky.insert(cat);
        if added {
            log::debug!("chart {}: lucky += {}", self.name, cat.label());
        }
        added
    }

    /// Replace the whole lucky set during a badge resync. Returns true
    /// when the set actually changed.
    pub fn set_lucky(&mut self, lucky: CategorySet) -> bool {
        if self.lucky == lucky {
            return false;
        }
        self.lucky = lucky;
        true
    }

    /// Record what was just painted, so the next transition starts from
    /// the on-screen state.
    pub fn mark_painted(&mut self, allocation: Allocation) {
        self.last_painted = allocation;
    }

    pub fn last_painted(&self) -> &Allocation {
        &self.last_painted
    }

    /// Build the animated move from the on-screen state to the current
    /// target.
    pub fn begin_transition(&self) -> Transition {
        Transition::between(
            self.last_painted.clone(),
            self.target(),
            self.config.animation_ms,
            Easing::QuadOut,
        )
        .with_dip(self.config.dip_scale)
    }
}
