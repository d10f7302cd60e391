//! Percentage distribution over the category ring.
//!
//! Every qualifying active category gets a flat base share, the
//! remainder is split evenly across the lucky categories as an additive
//! bonus, and whatever is left lands on the Unassigned filler slice.

use crate::api::types::{Category, CategorySet};

/// Flat share granted to each qualifying active category.
pub const BASE_SHARE: f32 = 25.0;

/// Unassigned absorbs the leftover only while the named total stays below
/// this threshold; at or above it the ring counts as full.
const FULL_RING: f32 = 99.9;

/// Percentages per category. Non-negative, sums to 100 within rounding
/// tolerance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Allocation {
    values: [f32; 5],
}

impl Allocation {
    pub fn get(&self, cat: Category) -> f32 {
        self.values[cat.slot()]
    }

    pub fn set(&mut self, cat: Category, pct: f32) {
        self.values[cat.slot()] = pct;
    }

    /// Total of the four named categories; this is the center score.
    pub fn named_total(&self) -> f32 {
        Category::NAMED.into_iter().map(|cat| self.get(cat)).sum()
    }

    /// Grand total including Unassigned.
    pub fn total(&self) -> f32 {
        self.values.iter().sum()
    }

    /// Componentwise comparison within `tol`.
    pub fn approx_eq(&self, other: &Allocation, tol: f32) -> bool {
        Category::DRAW_ORDER
            .into_iter()
            .all(|cat| (self.get(cat) - other.get(cat)).abs() <= tol)
    }

    /// Componentwise scale. Used for the synthetic dip start state.
    pub fn scaled(&self, factor: f32) -> Allocation {
        let mut out = self.clone();
        for value in &mut out.values {
            *value *= factor;
        }
        out
    }
}

/// Distribute 100% across the ring.
///
/// `statuses` holds the categories with a qualifying good attribute,
/// `active` the categories eligible for a base share, `lucky` the
/// user-picked bonus categories.
pub fn allocate(statuses: CategorySet, active: CategorySet, lucky: CategorySet) -> Allocation {
    let mut out = Allocation::default();

    let mut used = 0.0;
    for cat in Category::NAMED {
        if statuses.contains(cat) && active.contains(cat) {
            out.set(cat, BASE_SHARE);
            used += BASE_SHARE;
        }
    }

    if !lucky.is_empty() {
        // Rounding can briefly push the base total past 100.
        let remaining = (100.0 - used).max(0.0);
        let bonus = remaining / lucky.len() as f32;
        for cat in lucky.iter() {
            out.set(cat, out.get(cat) + bonus);
        }
    }

    let named = out.named_total();
    if named < FULL_RING {
        out.set(Category::Unassigned, 100.0 - named);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_from_bits(bits: u8) -> CategorySet {
        Category::NAMED
            .into_iter()
            .enumerate()
            .filter(|(i, _)| bits & (1 << i) != 0)
            .map(|(_, cat)| cat)
            .collect()
    }

    #[test]
    fn always_sums_to_one_hundred() {
        for statuses in 0..16u8 {
            for active in 0..16u8 {
                for lucky in 0..16u8 {
                    let alloc = allocate(
                        set_from_bits(statuses),
                        set_from_bits(active),
                        set_from_bits(lucky),
                    );
                    assert!(
                        (alloc.total() - 100.0).abs() <= 0.1,
                        "statuses={statuses:04b} active={active:04b} lucky={lucky:04b} total={}",
                        alloc.total()
                    );
                    for cat in Category::DRAW_ORDER {
                        assert!(alloc.get(cat) >= 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn nothing_qualifying_fills_unassigned() {
        let alloc = allocate(CategorySet::EMPTY, CategorySet::ALL, CategorySet::EMPTY);
        assert_eq!(alloc.get(Category::Unassigned), 100.0);
        assert_eq!(alloc.named_total(), 0.0);
    }

    #[test]
    fn four_qualifying_split_evenly() {
        let alloc = allocate(CategorySet::ALL, CategorySet::ALL, CategorySet::EMPTY);
        for cat in Category::NAMED {
            assert_eq!(alloc.get(cat), 25.0);
        }
        assert_eq!(alloc.get(Category::Unassigned), 0.0);
    }

    #[test]
    fn single_lucky_takes_the_whole_leftover() {
        let statuses: CategorySet = [Category::Health, Category::Career].into_iter().collect();
        let lucky: CategorySet = [Category::Love].into_iter().collect();
        let alloc = allocate(statuses, CategorySet::ALL, lucky);

        assert_eq!(alloc.get(Category::Love), 50.0);
        assert_eq!(alloc.get(Category::Health), 25.0);
        assert_eq!(alloc.get(Category::Career), 25.0);
        assert_eq!(alloc.get(Category::Finance), 0.0);
        assert_eq!(alloc.get(Category::Unassigned), 0.0);
    }

    #[test]
    fn bonus_splits_evenly_across_lucky_picks() {
        let statuses: CategorySet = [Category::Health].into_iter().collect();
        let lucky: CategorySet = [Category::Career, Category::Finance].into_iter().collect();
        let alloc = allocate(statuses, CategorySet::ALL, lucky);

        assert_eq!(alloc.get(Category::Health), 25.0);
        assert_eq!(alloc.get(Category::Career), 37.5);
        assert_eq!(alloc.get(Category::Finance), 37.5);
        assert_eq!(alloc.get(Category::Unassigned), 0.0);
    }

    #[test]
    fn lucky_stacks_bonus_on_its_base_share() {
        let statuses: CategorySet = [Category::Health].into_iter().collect();
        let lucky: CategorySet = [Category::Health].into_iter().collect();
        let alloc = allocate(statuses, CategorySet::ALL, lucky);

        assert_eq!(alloc.get(Category::Health), 100.0);
        assert_eq!(alloc.get(Category::Unassigned), 0.0);
    }

    #[test]
    fn inactive_category_earns_no_base_share() {
        let active: CategorySet = [Category::Health, Category::Career].into_iter().collect();
        let alloc = allocate(CategorySet::ALL, active, CategorySet::EMPTY);

        assert_eq!(alloc.get(Category::Health), 25.0);
        assert_eq!(alloc.get(Category::Career), 25.0);
        assert_eq!(alloc.get(Category::Finance), 0.0);
        assert_eq!(alloc.get(Category::Love), 0.0);
        assert_eq!(alloc.get(Category::Unassigned), 50.0);
    }

    #[test]
    fn full_ring_leaves_no_filler() {
        let alloc = allocate(CategorySet::ALL, CategorySet::ALL, CategorySet::ALL);
        assert_eq!(alloc.named_total(), 100.0);
        assert_eq!(alloc.get(Category::Unassigned), 0.0);
    }

    #[test]
    fn scaled_shrinks_every_slot() {
        let alloc = allocate(CategorySet::ALL, CategorySet::ALL, CategorySet::EMPTY);
        let dipped = alloc.scaled(0.85);
        for cat in Category::NAMED {
            assert!((dipped.get(cat) - 21.25).abs() < 1e-4);
        }
    }
}
