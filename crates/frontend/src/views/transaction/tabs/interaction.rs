//! Mouse, keyboard and focus rules of the tab strip.

use super::state::TransactionTab;
use crate::shared::dom::Modifiers;

pub const TAB_STRIP_SELECTOR: &str = ".transaction-tabs";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabClick {
    /// Re-clicking the active tab redraws its charts instead of navigating
    RefreshCharts,
    Navigate,
}

pub fn tab_click_action(clicked: TransactionTab, active: TransactionTab, modifiers: Modifiers) -> TabClick {
    if clicked == active && !modifiers.any() {
        TabClick::RefreshCharts
    } else {
        TabClick::Navigate
    }
}

/// Element id to activate for an arrow key press, if any.
///
/// `None` means the event is left alone, default scrolling included.
pub fn tab_key_target<'a>(
    key: &str,
    modifiers: Modifiers,
    left: Option<&'a str>,
    right: Option<&'a str>,
) -> Option<&'a str> {
    if modifiers.any() {
        return None;
    }
    match key {
        "ArrowLeft" => left,
        "ArrowRight" => right,
        _ => None,
    }
}

/// A focused tab link pointing somewhere other than the new location is stale
pub fn should_blur(focused_link: Option<&str>, new_location: &str) -> bool {
    match focused_link {
        Some(link) if !link.is_empty() => link != new_location,
        _ => false,
    }
}
