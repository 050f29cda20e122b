//! Site navigation fetching and rendering.
//!
//! Pulls navigation menus from the CMS admin API and renders a menu
//! fragment for the static output. The API is optional: when it is
//! unconfigured or unreachable the caller gets `None` and the rest of the
//! pipeline keeps working.

use std::{fmt::Write, time::Duration};

use herosection::{model::LinkTarget, render::markup::escape_html};
use serde::{Deserialize, Serialize};
use ureq::Agent;

/// A page referenced by a navigation item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageRef {
    pub id: String,
    pub title: String,
    pub slug: String,
}

/// One entry of a navigation menu as served by the CMS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationItem {
    pub id: String,
    pub title: String,
    /// Explicit link target; wins over the linked page's slug when set.
    pub url: Option<String>,
    pub page_id: Option<String>,
    /// Items with a parent are rendered under it, not at the top level.
    pub parent_id: Option<String>,
    pub target: LinkTarget,
    pub order: i64,
    pub is_visible: bool,
    pub children: Vec<NavigationItem>,
    pub page: Option<PageRef>,
}

// The API omits `isVisible` for items that were never hidden, so the
// default must read as visible.
impl Default for NavigationItem {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            url: None,
            page_id: None,
            parent_id: None,
            target: LinkTarget::default(),
            order: 0,
            is_visible: true,
            children: Vec::new(),
            page: None,
        }
    }
}

impl NavigationItem {
    /// The href of this item.
    ///
    /// An explicit `url` wins; otherwise the linked page's slug maps to
    /// the page route (`/` stays the front page, everything else lands
    /// under `/pages`). Items with neither link anywhere (`#`).
    pub fn item_url(&self) -> String {
        if let Some(url) = &self.url
            && !url.is_empty()
        {
            return url.clone();
        }
        match self.page.as_ref().map(|p| p.slug.as_str()) {
            Some("/") => "/".to_string(),
            Some(slug) if !slug.is_empty() => format!("/pages{slug}"),
            _ => "#".to_string(),
        }
    }
}

/// One named menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationMenu {
    pub id: String,
    pub name: String,
    pub location: String,
    pub is_active: bool,
    pub items: Vec<NavigationItem>,
}

/// The endpoint's response envelope: `{"menus": [...]}`.
#[derive(Debug, Default, Deserialize)]
struct NavigationResponse {
    #[serde(default)]
    menus: Vec<NavigationMenu>,
}

impl NavigationResponse {
    fn into_active_menu(self) -> Option<NavigationMenu> {
        self.menus.into_iter().find(|m| m.is_active)
    }
}

/// Fetches `{base_url}/api/admin/navigation?location=...` and returns the
/// first active menu.
///
/// Degrades to `None` on any transport or decode failure, and when no
/// active menu exists; a broken CMS must not block rendering.
pub fn fetch_menu(base_url: &str, location: &str, timeout_secs: u64) -> Option<NavigationMenu> {
    let url = format!(
        "{}/api/admin/navigation?location={location}",
        base_url.trim_end_matches('/')
    );
    let config = Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(timeout_secs)))
        .build();
    let agent = Agent::new_with_config(config);
    let response: NavigationResponse = match agent.get(&url).call() {
        Ok(mut response) => match response.body_mut().read_json() {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!("navigation response from {url} did not decode: {e}");
                return None;
            }
        },
        Err(e) => {
            warn!("navigation fetch from {url} failed: {e}");
            return None;
        }
    };
    let menu = response.into_active_menu();
    if menu.is_none() {
        warn!("no active navigation menu at location `{location}`");
    }
    menu
}

fn render_items(items: &[NavigationItem], top_level: bool, out: &mut String) {
    let mut visible: Vec<&NavigationItem> = items
        .iter()
        .filter(|i| i.is_visible && (!top_level || i.parent_id.is_none()))
        .collect();
    visible.sort_by_key(|i| i.order);
    out.push_str("<ul>");
    for item in visible {
        let target = match item.target {
            LinkTarget::Blank => " target=\"_blank\" rel=\"noopener\"",
            LinkTarget::Self_ => "",
        };
        let _ = write!(
            out,
            "<li><a href=\"{}\"{target}>{}</a>",
            escape_html(&item.item_url()),
            escape_html(&item.title)
        );
        if item.children.iter().any(|c| c.is_visible) {
            render_items(&item.children, false, out);
        }
        out.push_str("</li>");
    }
    out.push_str("</ul>");
}

/// Renders a menu fragment: visible top-level items ordered by `order`,
/// nested lists for children.
pub fn render_menu(menu: &NavigationMenu) -> String {
    let mut out = format!(
        "<nav class=\"site-nav\" aria-label=\"{}\">",
        escape_html(&menu.name)
    );
    render_items(&menu.items, true, &mut out);
    out.push_str("</nav>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: serde_json::Value) -> NavigationItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_item_url_rules() {
        assert_eq!(item(json!({})).item_url(), "#");
        assert_eq!(item(json!({"page": {"slug": "/"}})).item_url(), "/");
        assert_eq!(
            item(json!({"page": {"slug": "/about"}})).item_url(),
            "/pages/about"
        );
        assert_eq!(
            item(json!({"page": {"slug": "/about"}, "url": "https://ext.example"})).item_url(),
            "https://ext.example"
        );
        assert_eq!(item(json!({"url": ""})).item_url(), "#");
    }

    #[test]
    fn test_render_menu_orders_and_filters() {
        let menu = NavigationMenu {
            name: "Main".into(),
            is_active: true,
            items: vec![
                item(json!({"title": "Last", "page": {"slug": "/last"}, "order": 9,
                            "isVisible": true})),
                item(json!({"title": "Hidden", "page": {"slug": "/no"}, "order": 0,
                            "isVisible": false})),
                item(json!({"title": "Child", "parentId": "x", "order": 1,
                            "isVisible": true})),
                item(json!({"title": "First", "page": {"slug": "/"}, "order": 1,
                            "isVisible": true, "target": "BLANK"})),
            ],
            ..NavigationMenu::default()
        };
        let html = render_menu(&menu);
        let first = html.find("First").unwrap();
        let last = html.find("Last").unwrap();
        assert!(first < last);
        assert!(!html.contains("Hidden"));
        // Items with a parent are not rendered at the top level.
        assert!(!html.contains("Child"));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("href=\"/pages/last\""));
        assert!(html.contains("aria-label=\"Main\""));
    }

    #[test]
    fn test_response_envelope_yields_first_active_menu() {
        let body = json!({"menus": [
            {"id": "m1", "name": "Retired", "location": "HEADER_PRIMARY",
             "isActive": false, "items": []},
            {"id": "m2", "name": "Main", "location": "HEADER_PRIMARY",
             "isActive": true,
             "items": [{"title": "Home", "page": {"slug": "/"}}]},
        ]});
        let response: NavigationResponse = serde_json::from_value(body).unwrap();
        let menu = response.into_active_menu().unwrap();
        assert_eq!(menu.id, "m2");
        assert_eq!(menu.items.len(), 1);
    }

    #[test]
    fn test_no_active_menu_in_envelope() {
        let body = json!({"menus": [
            {"id": "m1", "name": "Retired", "isActive": false, "items": []},
        ]});
        let response: NavigationResponse = serde_json::from_value(body).unwrap();
        assert!(response.into_active_menu().is_none());
        let empty: NavigationResponse = serde_json::from_value(json!({})).unwrap();
        assert!(empty.into_active_menu().is_none());
    }

    #[test]
    fn test_items_without_visibility_flag_render() {
        let plain = item(json!({"title": "Plain", "page": {"slug": "/plain"}}));
        assert!(plain.is_visible);
        let menu = NavigationMenu {
            name: "Main".into(),
            is_active: true,
            items: vec![plain],
            ..NavigationMenu::default()
        };
        assert!(render_menu(&menu).contains("Plain"));
    }

    #[test]
    fn test_render_menu_escapes_titles() {
        let menu = NavigationMenu {
            name: "Main".into(),
            items: vec![item(json!({
                "title": "<b>Home</b>", "page": {"slug": "/"}, "order": 0, "isVisible": true
            }))],
            ..NavigationMenu::default()
        };
        assert!(render_menu(&menu).contains("&lt;b&gt;Home&lt;/b&gt;"));
    }
}
