// ============================================================================
// Nav Core - Navigation Item Entity
// File: crates/nav-core/src/domain/nav_item.rs
// Description: One entry of the site navigation menu
// ============================================================================

use std::fmt;

use chrono::{DateTime, Utc};
use nav_shared::constants::PLACEHOLDER_HREF;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::GroupKey;

/// Stable identifier of a navigation item. Immutable once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavItemId(String);

impl NavItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh `nav-<uuid>` identifier for items created at runtime.
    pub fn generate() -> Self {
        Self(nav_shared::new_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NavItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NavItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for NavItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Navigation item entity.
///
/// `order` is the zero-based position among the siblings sharing `parent_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub id: NavItemId,

    #[validate(length(min = 1, max = 100, message = "Title is required (max 100 characters)"))]
    pub title: String,

    #[validate(length(max = 255, message = "Href too long"))]
    #[serde(default)]
    pub href: Option<String>,

    #[serde(default)]
    pub parent_id: Option<NavItemId>,

    #[serde(default)]
    pub order: u32,

    #[serde(default = "default_true")]
    pub is_visible: bool,
    #[serde(default)]
    pub is_external: bool,
    #[serde(default)]
    pub open_in_new_tab: bool,

    // Audit fields
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

impl NavItem {
    /// Creates a visible internal link with a generated id.
    ///
    /// A missing or blank `href` becomes `"#"`.
    pub fn new(
        title: String,
        href: Option<String>,
        parent_id: Option<NavItemId>,
        order: u32,
    ) -> Result<Self, validator::ValidationErrors> {
        let href = href
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_HREF.to_string());
        Self::with_id(NavItemId::generate(), title, Some(href), parent_id, order)
    }

    /// Creates an item with a caller-chosen id; `href` is kept as given.
    pub fn with_id(
        id: NavItemId,
        title: String,
        href: Option<String>,
        parent_id: Option<NavItemId>,
        order: u32,
    ) -> Result<Self, validator::ValidationErrors> {
        let item = Self {
            id,
            title: title.trim().to_string(),
            href,
            parent_id,
            order,
            is_visible: true,
            is_external: false,
            open_in_new_tab: false,
            created_at: Utc::now(),
            modified_at: None,
        };

        item.validate()?;
        Ok(item)
    }

    pub fn group(&self) -> GroupKey {
        GroupKey::from(self.parent_id.clone())
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn touch(&mut self) {
        self.modified_at = Some(Utc::now());
    }
}

/// Payload of the "add item" form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNavItem {
    pub title: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub parent_id: Option<NavItemId>,
    #[serde(default = "default_true")]
    pub is_visible: bool,
    #[serde(default)]
    pub is_external: bool,
    #[serde(default)]
    pub open_in_new_tab: bool,
}

impl NewNavItem {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: Some(href.into()),
            parent_id: None,
            is_visible: true,
            is_external: false,
            open_in_new_tab: false,
        }
    }

    pub fn under(mut self, parent_id: impl Into<NavItemId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }
}

/// Payload of the "edit item" form. `None` leaves a field unchanged.
///
/// For `parent`, an absent key means unchanged and `null` means top level.
/// `parent` and `order` are structural: they move the item through the
/// reorder engine instead of being written directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItemChanges {
    pub title: Option<String>,
    /// An empty string clears the link (pure dropdown parent).
    pub href: Option<String>,
    pub is_visible: Option<bool>,
    pub is_external: Option<bool>,
    pub open_in_new_tab: Option<bool>,
    #[serde(
        default,
        deserialize_with = "deserialize_parent",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent: Option<GroupKey>,
    pub order: Option<u32>,
}

fn deserialize_parent<'de, D>(deserializer: D) -> Result<Option<GroupKey>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    GroupKey::deserialize(deserializer).map(Some)
}

impl NavItemChanges {
    pub fn is_structural(&self) -> bool {
        self.parent.is_some() || self.order.is_some()
    }

    /// Copies the non-structural fields onto `item`.
    pub(crate) fn apply_fields(&self, item: &mut NavItem) {
        if let Some(title) = &self.title {
            item.title = title.trim().to_string();
        }
        if let Some(href) = &self.href {
            let href = href.trim();
            item.href = if href.is_empty() { None } else { Some(href.to_string()) };
        }
        if let Some(visible) = self.is_visible {
            item.is_visible = visible;
        }
        if let Some(external) = self.is_external {
            item.is_external = external;
        }
        if let Some(new_tab) = self.open_in_new_tab {
            item.open_in_new_tab = new_tab;
        }
    }
}
