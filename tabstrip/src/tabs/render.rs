//! Tabs widget rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::item::{BadgeVariant, TabItem};
use crate::keys::Orientation;

use super::Tabs;

/// Render a tab strip: a single row when horizontal, one tab per row when
/// vertical.
///
/// The displayed active tab is emphasized (highlighted while the strip is
/// focused), disabled tabs are dimmed, and non-empty badges are appended
/// after the label with their variant color.
pub fn render_tabs(
    frame: &mut Frame,
    area: Rect,
    items: &[TabItem],
    tabs: &Tabs,
    focused: bool,
    style: Style,
) {
    let states = tabs.tab_states(items);

    match tabs.orientation() {
        Orientation::Horizontal => {
            let mut spans: Vec<Span> = Vec::new();
            for (item, state) in items.iter().zip(&states) {
                push_tab_spans(&mut spans, item, state.selected, focused, style);
            }
            frame.render_widget(Paragraph::new(Line::from(spans)), area);
        }
        Orientation::Vertical => {
            let lines: Vec<Line> = items
                .iter()
                .zip(&states)
                .map(|(item, state)| {
                    let mut spans = Vec::new();
                    push_tab_spans(&mut spans, item, state.selected, focused, style);
                    Line::from(spans)
                })
                .collect();
            frame.render_widget(Paragraph::new(lines), area);
        }
    }
}

/// Map a widget-relative position to a tab index.
///
/// Uses the same width arithmetic as rendering, so a hit on any part of a
/// tab's segment (including its padding and badge) resolves to that tab.
pub fn hit_test(items: &[TabItem], orientation: Orientation, x: u16, y: u16) -> Option<usize> {
    match orientation {
        Orientation::Horizontal => {
            if y != 0 {
                return None;
            }
            let mut start = 0u16;
            for (idx, item) in items.iter().enumerate() {
                let end = start + segment_width(item);
                if x >= start && x < end {
                    return Some(idx);
                }
                start = end;
            }
            None
        }
        Orientation::Vertical => {
            let idx = y as usize;
            (idx < items.len()).then_some(idx)
        }
    }
}

/// Auto-sizing hint for the strip: (columns, rows).
pub fn intrinsic_size(items: &[TabItem], orientation: Orientation) -> (u16, u16) {
    match orientation {
        Orientation::Horizontal => {
            let width: u16 = items.iter().map(segment_width).sum();
            (width.max(1), 1)
        }
        Orientation::Vertical => {
            let width = items.iter().map(segment_width).max().unwrap_or(1);
            (width, (items.len() as u16).max(1))
        }
    }
}

fn push_tab_spans(
    spans: &mut Vec<Span<'static>>,
    item: &TabItem,
    selected: bool,
    focused: bool,
    base: Style,
) {
    let style = tab_style(selected, item.disabled, focused, base);
    spans.push(Span::styled(format!(" {} ", item.label), style));

    if let Some(badge) = &item.badge
        && !badge.is_empty()
    {
        // Disabled tabs keep their dimmed style for the badge too
        let accent = if item.disabled {
            style
        } else {
            badge_style(badge.variant, style)
        };
        spans.push(Span::styled(format!("({}) ", badge.content), accent));
    }
}

fn tab_style(selected: bool, disabled: bool, focused: bool, base: Style) -> Style {
    if disabled {
        base.fg(Color::DarkGray)
    } else if selected && focused {
        base.bg(Color::Rgb(80, 80, 100)).add_modifier(Modifier::BOLD)
    } else if selected {
        base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        base
    }
}

fn badge_style(variant: BadgeVariant, base: Style) -> Style {
    match variant {
        BadgeVariant::Default => base,
        BadgeVariant::Warning => base.fg(Color::Yellow),
        BadgeVariant::Success => base.fg(Color::Green),
    }
}

/// Columns occupied by a tab's segment: padded label plus badge.
fn segment_width(item: &TabItem) -> u16 {
    let mut width = item.label.chars().count() + 2;
    if let Some(badge) = &item.badge
        && !badge.is_empty()
    {
        width += badge.content.chars().count() + 3;
    }
    width as u16
}
