/// Two-stop linear gradient painting one category's wedge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    /// Stop at 0%.
    pub light: &'static str,
    /// Stop at 100%. Doubles as the accent color for score badges.
    pub dark: &'static str,
    /// `gradientTransform` rotation in degrees.
    pub rotation: i32,
}

/// One slice identity on the ring. Labels are Thai because they double
/// as payload keys and element-id suffixes in the server-rendered
/// markup.
///
/// `Unassigned` is the filler for percentage mass no named category earned.
/// It is never active, never lucky, and never labeled on the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Health,
    Career,
    Finance,
    Love,
    Unassigned,
}

impl Category {
    /// The four real categories, in draw order.
    pub const NAMED: [Category; 4] = [
        Category::Health,
        Category::Career,
        Category::Finance,
        Category::Love,
    ];

    /// Full draw order around the ring, clockwise from 12 o'clock.
    pub const DRAW_ORDER: [Category; 5] = [
        Category::Health,
        Category::Career,
        Category::Finance,
        Category::Love,
        Category::Unassigned,
    ];

    /// Display label. Also the breakdown payload key and the trailing
    /// segment of badge/lucky container element ids.
    pub fn label(self) -> &'static str {
        match self {
            Category::Health => "สุขภาพ",
            Category::Career => "การงาน",
            Category::Finance => "การเงิน",
            Category::Love => "ความรัก",
            Category::Unassigned => "N/A",
        }
    }

    /// One-letter code used in gradient def ids.
    pub fn code(self) -> char {
        match self {
            Category::Health => 'H',
            Category::Career => 'W',
            Category::Finance => 'F',
            Category::Love => 'L',
            Category::Unassigned => 'N',
        }
    }

    /// Wedge gradient. The Unassigned entry exists for the defs block even
    /// though its wedge is painted flat.
    pub fn gradient(self) -> Gradient {
        match self {
            Category::Health => Gradient { light: "#80CBC4", dark: "#26A69A", rotation: 90 },
            Category::Career => Gradient { light: "#90CAF9", dark: "#42A5F5", rotation: 0 },
            Category::Finance => Gradient { light: "#FFCC80", dark: "#FFA726", rotation: -45 },
            Category::Love => Gradient { light: "#F48FB1", dark: "#EC407A", rotation: 45 },
            Category::Unassigned => Gradient { light: "#F1F5F9", dark: "#E2E8F0", rotation: 0 },
        }
    }

    /// Reverse lookup from a display label.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::DRAW_ORDER.into_iter().find(|cat| cat.label() == label)
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            Category::Health => 0,
            Category::Career => 1,
            Category::Finance => 2,
            Category::Love => 3,
            Category::Unassigned => 4,
        }
    }
}

/// Set over the four named categories.
///
/// Insertion order is irrelevant: iteration always follows draw order.
/// Inserting `Unassigned` is a rejected no-op, which keeps active and
/// lucky sets free of the filler slice by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategorySet(u8);

impl CategorySet {
    pub const EMPTY: CategorySet = CategorySet(0);
    /// All four named categories.
    pub const ALL: CategorySet = CategorySet(0b1111);

    /// Returns true when the category was not already present.
    pub fn insert(&mut self, cat: Category) -> bool {
        if cat == Category::Unassigned {
            return false;
        }
        let bit = 1u8 << cat.slot();
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    /// Returns true when the category was present.
    pub fn remove(&mut self, cat: Category) -> bool {
        if cat == Category::Unassigned {
            return false;
        }
        let bit = 1u8 << cat.slot();
        let had = self.0 & bit != 0;
        self.0 &= !bit;
        had
    }

    pub fn contains(self, cat: Category) -> bool {
        cat != Category::Unassigned && self.0 & (1u8 << cat.slot()) != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in draw order.
    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::NAMED.into_iter().filter(move |cat| self.contains(*cat))
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = CategorySet::EMPTY;
        for cat in iter {
            set.insert(cat);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trips() {
        for cat in Category::DRAW_ORDER {
            assert_eq!(Category::from_label(cat.label()), Some(cat));
        }
        assert_eq!(Category::from_label("โบนัส"), None);
    }

    #[test]
    fn set_rejects_unassigned() {
        let mut set = CategorySet::EMPTY;
        assert!(!set.insert(Category::Unassigned));
        assert!(set.is_empty());
        assert!(!set.contains(Category::Unassigned));
    }

    #[test]
    fn set_semantics() {
        let mut set = CategorySet::EMPTY;
        assert!(set.insert(Category::Love));
        assert!(!set.insert(Category::Love));
        assert_eq!(set.len(), 1);
        assert!(set.remove(Category::Love));
        assert!(!set.remove(Category::Love));
        assert!(set.is_empty());
    }

    #[test]
    fn iteration_follows_draw_order() {
        let set: CategorySet = [Category::Love, Category::Health].into_iter().collect();
        let members: Vec<Category> = set.iter().collect();
        assert_eq!(members, vec![Category::Health, Category::Love]);
    }

    #[test]
    fn all_covers_named_only() {
        assert_eq!(CategorySet::ALL.len(), 4);
        for cat in Category::NAMED {
            assert!(CategorySet::ALL.contains(cat));
        }
    }
}
