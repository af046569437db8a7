//! Default menu for the training and consulting site.

use chrono::Utc;

use crate::domain::{NavItem, NavItemId};

/// (id, title, href, parent, order)
const DEFAULT_MENU: &[(&str, &str, &str, Option<&str>, u32)] = &[
    ("home", "Home", "/", None, 0),
    ("about", "About Us", "/about", None, 1),
    ("about-story", "Our Story", "/about#story", Some("about"), 0),
    ("about-team", "Our Team", "/about#team", Some("about"), 1),
    ("about-values", "Our Values", "/about#values", Some("about"), 2),
    ("training", "Training", "/training", None, 2),
    ("training-leadership", "Leadership Development", "/training/leadership", Some("training"), 0),
    ("training-capacity", "Capacity Building Programs", "/training#capacity-building", Some("training"), 1),
    ("training-customized", "Customized Training", "/training#customized", Some("training"), 2),
    ("training-women-youth", "Women and Youth Programs", "/training#women-youth", Some("training"), 3),
    ("executive-training", "Executive Training", "/executive-training", None, 3),
    ("executive-ceo", "CEO Professional Development", "/executive-training/ceo-development", Some("executive-training"), 0),
    (
        "executive-ceo-strategic",
        "Strategic Leadership",
        "/executive-training/ceo-development/strategic-leadership",
        Some("executive-ceo"),
        0,
    ),
    (
        "executive-ceo-decision",
        "Executive Decision Making",
        "/executive-training/ceo-development/decision-making",
        Some("executive-ceo"),
        1,
    ),
    ("consulting", "Consulting", "/consulting", None, 4),
    ("consulting-strategic", "Strategic Planning", "/consulting/strategic-planning", Some("consulting"), 0),
    ("consulting-org", "Organizational Development", "/consulting#organizational-development", Some("consulting"), 1),
    ("consulting-performance", "Performance Improvement", "/consulting#performance-improvement", Some("consulting"), 2),
    ("consulting-data", "Data Analytics", "/consulting#data-analytics", Some("consulting"), 3),
    ("calendar", "Training Calendar", "/training-calendar", None, 5),
    ("blog", "Blog", "/blog", None, 6),
    ("contact", "Contact", "/contact", None, 7),
];

pub fn default_nav_items() -> Vec<NavItem> {
    let created_at = Utc::now();
    DEFAULT_MENU
        .iter()
        .map(|&(id, title, href, parent, order)| NavItem {
            id: NavItemId::from(id),
            title: title.to_string(),
            href: Some(href.to_string()),
            parent_id: parent.map(NavItemId::from),
            order,
            is_visible: true,
            is_external: false,
            open_in_new_tab: false,
            created_at,
            modified_at: None,
        })
        .collect()
}
