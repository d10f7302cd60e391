//! Element id grammar shared with the page templates. The page renders
//! ids, the engine parses and rebuilds them, so both sides must agree
//! on these shapes exactly:
//!
//! ```text
//! [modal-]nested-donut-<name>                     chart svg
//! skeleton-html-<name>                            chart placeholder
//! [modal-]good-score-container-<name>-<label>     score badge
//! [modal-]lucky-container-<name>-<label>          lucky number slot
//! total-score-<name>*                             external totals
//! ```
//!
//! `<name>` may itself contain hyphens; `<label>` never does, so
//! container ids split on the last hyphen.

use crate::api::types::Category;

const CHART_PREFIX: &str = "nested-donut-";
const MODAL_CHART_PREFIX: &str = "modal-nested-donut-";
const SKELETON_PREFIX: &str = "skeleton-html-";
const BADGE_PREFIX: &str = "good-score-container-";
const LUCKY_PREFIX: &str = "lucky-container-";
const MODAL_MARK: &str = "modal-";
const TOTAL_SCORE_PREFIX: &str = "total-score-";
const DEF_PREFIX: &str = "donut-";

/// A chart id, split into its name and variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartKey {
    pub name: String,
    pub modal: bool,
}

/// A lucky container id, split into chart name, category and variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerKey {
    pub name: String,
    pub category: Category,
    pub modal: bool,
}

/// Parse a chart svg id. The modal prefix embeds the plain one, so it
/// is checked first.
pub fn parse_chart_id(id: &str) -> Option<ChartKey> {
    if let Some(name) = id.strip_prefix(MODAL_CHART_PREFIX) {
        return Some(ChartKey {
            name: name.to_owned(),
            modal: true,
        });
    }
    id.strip_prefix(CHART_PREFIX).map(|name| ChartKey {
        name: name.to_owned(),
        modal: false,
    })
}

pub fn chart_id(name: &str, modal: bool) -> String {
    if modal {
        format!("{MODAL_CHART_PREFIX}{name}")
    } else {
        format!("{CHART_PREFIX}{name}")
    }
}

pub fn skeleton_id(name: &str) -> String {
    format!("{SKELETON_PREFIX}{name}")
}

pub fn badge_id(name: &str, modal: bool, category: Category) -> String {
    if modal {
        format!("{MODAL_MARK}{BADGE_PREFIX}{name}-{}", category.label())
    } else {
        format!("{BADGE_PREFIX}{name}-{}", category.label())
    }
}

pub fn lucky_container_id(name: &str, modal: bool, category: Category) -> String {
    if modal {
        format!("{MODAL_MARK}{LUCKY_PREFIX}{name}-{}", category.label())
    } else {
        format!("{LUCKY_PREFIX}{name}-{}", category.label())
    }
}

/// Parse a lucky container id back into its parts. Returns None for
/// ids outside the grammar or with an unknown category label.
pub fn parse_lucky_container(id: &str) -> Option<ContainerKey> {
    let (modal, rest) = match id.strip_prefix(MODAL_MARK) {
        Some(rest) => (true, rest),
        None => (false, id),
    };
    let rest = rest.strip_prefix(LUCKY_PREFIX)?;
    let (name, label) = rest.rsplit_once('-')?;
    let category = Category::from_label(label)?;
    Some(ContainerKey {
        name: name.to_owned(),
        category,
        modal,
    })
}

/// Id prefix matching every external total-score element of a chart.
pub fn total_score_prefix(name: &str) -> String {
    format!("{TOTAL_SCORE_PREFIX}{name}")
}

/// Prefix for gradient and filter def ids. Desktop and modal charts of
/// one name render into separate defs, so their prefixes must differ.
pub fn def_prefix(name: &str, modal: bool) -> String {
    if modal {
        format!("{DEF_PREFIX}{MODAL_MARK}{name}")
    } else {
        format!("{DEF_PREFIX}{name}")
    }
}

pub fn gradient_id(prefix: &str, category: Category) -> String {
    format!("{prefix}-{}", category.code())
}

pub fn filter_id(prefix: &str) -> String {
    format!("{prefix}-dropShadow")
}

pub fn gold_gradient_id(prefix: &str) -> String {
    format!("{prefix}-gold")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_ids_round_trip_both_variants() {
        let desktop = parse_chart_id("nested-donut-0812345678").unwrap();
        assert_eq!(desktop.name, "0812345678");
        assert!(!desktop.modal);
        assert_eq!(chart_id(&desktop.name, desktop.modal), "nested-donut-0812345678");

        let modal = parse_chart_id("modal-nested-donut-0812345678").unwrap();
        assert_eq!(modal.name, "0812345678");
        assert!(modal.modal);
        assert_eq!(
            chart_id(&modal.name, modal.modal),
            "modal-nested-donut-0812345678"
        );
    }

    #[test]
    fn foreign_ids_do_not_parse() {
        assert!(parse_chart_id("sidebar-donut-a").is_none());
        assert!(parse_lucky_container("good-score-container-a-สุขภาพ").is_none());
    }

    #[test]
    fn hyphenated_names_split_on_the_last_hyphen() {
        let key = parse_lucky_container("modal-lucky-container-john-doe-ความรัก").unwrap();
        assert_eq!(key.name, "john-doe");
        assert_eq!(key.category, Category::Love);
        assert!(key.modal);

        assert_eq!(
            lucky_container_id(&key.name, key.modal, key.category),
            "modal-lucky-container-john-doe-ความรัก"
        );
    }

    #[test]
    fn unknown_labels_fail_the_parse() {
        assert!(parse_lucky_container("lucky-container-a-อื่นๆ").is_none());
    }

    #[test]
    fn badge_ids_follow_the_same_grammar() {
        assert_eq!(
            badge_id("a", false, Category::Health),
            "good-score-container-a-สุขภาพ"
        );
        assert_eq!(
            badge_id("a", true, Category::Finance),
            "modal-good-score-container-a-การเงิน"
        );
    }

    #[test]
    fn def_prefixes_keep_variants_apart() {
        let desktop = def_prefix("a", false);
        let modal = def_prefix("a", true);
        assert_ne!(desktop, modal);
        assert_eq!(gradient_id(&desktop, Category::Career), "donut-a-W");
        assert_eq!(filter_id(&modal), "donut-modal-a-dropShadow");
        assert_eq!(gold_gradient_id(&desktop), "donut-a-gold");
    }
}
