//! Rendering: home screen and the switcher overlay.
//!
//! Flat draw functions over `App`; no state lives here. The overlay is a
//! centered cleared region drawn above the home screen, one row per
//! navigable group with the cursor cell highlighted.

use ratatui::{prelude::*, widgets::*};
use tabgrid_types::Tab;
use tabgrid_util::truncate_to_width;

use crate::app::App;
use crate::navigator::NavGroup;
use crate::theme;

pub const THROBBER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Display width of one tab cell in the overlay grid.
const CELL_WIDTH: usize = 18;

/// Display width reserved for the group label column.
const LABEL_WIDTH: usize = 13;

pub fn draw(f: &mut Frame, app: &App) {
    draw_home(f, app);
    if app.overlay_open {
        draw_overlay(f, app);
    }
}

fn draw_home(f: &mut Frame, app: &App) {
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(1), Constraint::Length(1)]).split(f.area());

    let header = Paragraph::new(Line::from(vec![
        Span::styled("tabgrid", theme::title_style().fg(theme::ACCENT)),
        Span::styled("  ·  ", theme::text_muted()),
        Span::styled(app.session_path.display().to_string(), theme::text_muted()),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(theme::border_style(false)));
    f.render_widget(header, chunks[0]);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(id) = app.last_activated {
        lines.push(Line::from(vec![
            Span::styled("Last switched: ", theme::text_muted()),
            Span::styled(format!("tab {id}"), theme::text_style()),
        ]));
    }
    if !app.overlay_open
        && let Some(status) = &app.status
    {
        lines.push(Line::from(Span::styled(status.clone(), theme::text_muted())));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Press space to open the tab switcher.",
            theme::text_muted(),
        )));
    }
    f.render_widget(Paragraph::new(lines), chunks[1].inner(Margin::new(1, 0)));

    let hints = Paragraph::new(Line::from(Span::styled(
        " space/tab switcher · q quit",
        theme::text_muted(),
    )));
    f.render_widget(hints, chunks[2]);
}

fn draw_overlay(f: &mut Frame, app: &App) {
    let area = centered_rect(f.area(), 84, 70);
    f.render_widget(Clear, area);

    let mut title = String::from(" tab switcher ");
    if app.loading {
        let sym = THROBBER_FRAMES[app.throbber_idx % THROBBER_FRAMES.len()];
        title = format!(" tab switcher {sym} ");
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(true))
        .title(Span::styled(title, theme::title_style()))
        .style(Style::default().bg(theme::BG_PANEL));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);
    let grid = chunks[0];

    if app.loading {
        let msg = Paragraph::new(Line::from(Span::styled("Loading tabs…", theme::text_muted())));
        f.render_widget(msg, grid.inner(Margin::new(1, 0)));
    } else if app.navigator.is_empty() {
        let (text, style) = match &app.status {
            Some(status) => (status.clone(), theme::warn_style()),
            None => ("No tabs in session".to_string(), theme::text_muted()),
        };
        let msg = Paragraph::new(Line::from(Span::styled(text, style)));
        f.render_widget(msg, grid.inner(Margin::new(1, 0)));
    } else {
        draw_grid(f, app, grid);
    }

    let hints = Paragraph::new(Line::from(Span::styled(
        " ← → ↑ ↓ move · enter switch · esc close",
        theme::text_muted(),
    )));
    f.render_widget(hints, chunks[1]);
}

fn draw_grid(f: &mut Frame, app: &App, area: Rect) {
    let groups = app.navigator.groups();
    let (cursor_group, cursor_item) = app.navigator.cursor();

    let visible_rows = area.height as usize;
    if visible_rows == 0 {
        return;
    }
    // Scroll just enough to keep the cursor row on screen.
    let row_offset = cursor_group.saturating_sub(visible_rows.saturating_sub(1));

    let cells_fit = ((area.width as usize).saturating_sub(LABEL_WIDTH + 1) / (CELL_WIDTH + 1)).max(1);

    for (row, (index, group)) in groups.iter().enumerate().skip(row_offset).take(visible_rows).enumerate() {
        let selected_row = index == cursor_group;
        let item_offset = if selected_row {
            cursor_item.saturating_sub(cells_fit.saturating_sub(1))
        } else {
            0
        };
        let line = group_line(group, selected_row, cursor_item, item_offset, cells_fit);
        let row_area = Rect {
            x: area.x,
            y: area.y + row as u16,
            width: area.width,
            height: 1,
        };
        f.render_widget(Paragraph::new(line), row_area);
    }
}

fn group_line(group: &NavGroup, selected_row: bool, cursor_item: usize, item_offset: usize, cells_fit: usize) -> Line<'static> {
    let label_style = if selected_row {
        theme::title_style().fg(theme::ACCENT)
    } else {
        theme::title_style()
    };
    let mut spans = vec![Span::styled(
        pad_to_width(&truncate_to_width(&group.label, LABEL_WIDTH), LABEL_WIDTH),
        label_style,
    )];
    spans.push(Span::raw(" "));

    for (item, tab) in group.tabs.iter().enumerate().skip(item_offset).take(cells_fit) {
        let style = if selected_row && item == cursor_item {
            theme::cursor_cell_style()
        } else if tab.active {
            theme::text_style().add_modifier(Modifier::UNDERLINED)
        } else {
            theme::text_style()
        };
        spans.push(Span::styled(pad_to_width(&cell_text(tab), CELL_WIDTH), style));
        spans.push(Span::raw(" "));
    }
    if group.tabs.len() > item_offset + cells_fit {
        spans.push(Span::styled("…", theme::text_muted()));
    }
    Line::from(spans)
}

fn cell_text(tab: &Tab) -> String {
    let label = if tab.title.is_empty() { tab.url.as_str() } else { tab.title.as_str() };
    let marker = if tab.active { "● " } else { "" };
    truncate_to_width(&format!("{marker}{label}"), CELL_WIDTH)
}

fn pad_to_width(text: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthStr;
    let used = UnicodeWidthStr::width(text);
    let mut out = text.to_string();
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);
    let horizontal = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1]);
    horizontal[1]
}
