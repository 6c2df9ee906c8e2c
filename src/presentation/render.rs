use itertools::Itertools;
use crate::catalog::{Category, Platform};
use crate::filter::FilterState;
use crate::index::{CategoryIndex, Resolution};
use crate::presentation::icons::IconRegistry;
use crate::presentation::palette::Palette;

pub fn header(visible: usize, total: usize) -> String {
    format!("{} of {} platforms", visible, total)
}

/// One-line summary of the active filters, `None` when nothing is selected.
pub fn active_filters(state: &FilterState) -> Option<String> {
    if !state.is_active() {
        return None;
    }

    let mut parts = Vec::new();
    if !state.search_text.is_empty() {
        parts.push(format!("Search: \"{}\"", state.search_text));
    }
    if !state.main_category.is_empty() {
        parts.push(state.main_category.clone());
    }
    if !state.sub_category.is_empty() {
        parts.push(state.sub_category.clone());
    }

    Some(format!("Active filters: {}", parts.join(" · ")))
}

pub fn empty_state(state: &FilterState) -> String {
    let hint = if state.is_active() {
        "Try adjusting your filters or search query."
    } else {
        "Get started by adding your first platform."
    };

    format!("No platforms found\n{}", hint)
}

pub fn card(platform: &Platform, icons: &IconRegistry, palette: &Palette, index: &CategoryIndex<'_>) -> String {
    let glyph = icons.platform_icon(&platform.icon);
    let placement = match index.resolve(platform) {
        Resolution::Resolved { category, sub: Some(sub) } => format!("{} › {}", category.main, sub),
        Resolution::Resolved { category, sub: None } => category.main.clone(),
        Resolution::MissingSubCategory { category } => format!("{} › {} (missing)", category.main, platform.sub_category),
        Resolution::MissingCategory => format!("{} (missing)", platform.main_category)
    };

    let mut lines = vec![
        format!("{} {}  [{}]", glyph.render(), palette.paint(&platform.color, &platform.name), platform.id),
    ];
    if !platform.description.is_empty() {
        lines.push(format!("   {}", platform.description));
    }
    lines.push(format!("   {}  {}", placement, platform.url));

    lines.join("\n")
}

pub fn grid(platforms: &[&Platform], state: &FilterState, icons: &IconRegistry, palette: &Palette, index: &CategoryIndex<'_>) -> String {
    if platforms.is_empty() {
        return empty_state(state);
    }

    platforms.iter()
        .map(|p| card(p, icons, palette, index))
        .join("\n\n")
}

/// Category list with the current selection marked, sub-categories shown for the selected main.
pub fn sidebar(categories: &[Category], state: &FilterState, icons: &IconRegistry) -> String {
    let marker = |selected: bool| if selected { "●" } else { "○" };

    let mut lines = vec![format!("{} All Categories", marker(state.main_category.is_empty()))];
    for category in categories {
        let selected = category.main == state.main_category;
        lines.push(format!("{} {} {}", marker(selected), icons.category_icon(&category.icon).render(), category.main));

        if selected && !category.subs.is_empty() {
            lines.push(format!("    {} All Sub Categories", marker(state.sub_category.is_empty())));
            lines.extend(category.subs.iter()
                .map(|sub| format!("    {} {}", marker(*sub == state.sub_category), sub)));
        }
    }

    lines.join("\n")
}

pub fn suggestion_list(suggestions: &[&Platform]) -> String {
    suggestions.iter()
        .map(|p| format!("  {}", p.name))
        .join("\n")
}

pub fn category_summary(category: &Category, icons: &IconRegistry) -> String {
    format!("{} {} ({})", icons.category_icon(&category.icon).render(), category.main, category.subs.iter().join(", "))
}
