//! Rendering for the grid viewer

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::record::format_progress;

use super::app::{AppState, Panel, StatusKind};
use super::model::CellView;

const BAR_WIDTH: usize = 6;
const BAR_FULL: char = '\u{2588}';
const BAR_EMPTY: char = '\u{2591}';
const CELL_WIDTH: u16 = 13;
const CELL_GAP: u16 = 2;
const TASK_COLUMN_MAX: u16 = 20;
const SIDE_PANEL_WIDTH: u16 = 36;

const COLOR_TEXT: Color = Color::Rgb(234, 236, 239);
const COLOR_MUTED: Color = Color::Rgb(160, 165, 172);
const COLOR_MUTED_DARK: Color = Color::Rgb(118, 124, 130);
const COLOR_BG_SELECTED: Color = Color::Rgb(52, 56, 60);
const COLOR_INFO: Color = Color::Rgb(116, 198, 219);
const COLOR_WARNING: Color = Color::Rgb(244, 200, 98);
const COLOR_ERROR: Color = Color::Rgb(255, 107, 107);
const COLOR_SUCCESS: Color = Color::Rgb(126, 210, 146);
const COLOR_ACCENT: Color = Color::Rgb(122, 170, 255);
const COLOR_BORDER_GRID: Color = Color::Rgb(92, 126, 166);
const COLOR_BORDER_PANEL: Color = Color::Rgb(180, 156, 92);

pub fn render(frame: &mut Frame, app: &mut AppState) {
    let area = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(area);
    let title = chunks[0];
    let main = chunks[1];
    let footer = chunks[2];

    render_title(frame, app, title);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(SIDE_PANEL_WIDTH)].as_ref())
        .split(main);
    render_grid(frame, app, columns[0]);
    match app.panel {
        Panel::Detail => render_detail(frame, app, columns[1]),
        Panel::Summary => render_summary(frame, app, columns[1]),
    }

    render_footer(frame, app, footer);
}

fn render_title(frame: &mut Frame, app: &AppState, area: Rect) {
    let spans = vec![
        Span::styled("taskgrid", Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled("  ", Style::default()),
        Span::styled(
            app.source_path().display().to_string(),
            Style::default().fg(COLOR_MUTED),
        ),
        Span::styled(
            format!(
                "  {} tasks, {} records",
                app.view_model.tasks.len(),
                app.view_model.record_count
            ),
            Style::default().fg(COLOR_MUTED_DARK),
        ),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_grid(frame: &mut Frame, app: &mut AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER_GRID))
        .title(" Grid ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.view_model.is_empty() {
        let empty = Paragraph::new("No tasks to display.")
            .style(Style::default().fg(COLOR_MUTED));
        frame.render_widget(empty, inner);
        return;
    }

    let task_width = app
        .view_model
        .tasks
        .iter()
        .map(|task| task.chars().count() as u16)
        .max()
        .unwrap_or(4)
        .clamp(4, TASK_COLUMN_MAX);

    let cols_fit = ((inner.width.saturating_sub(task_width)) / (CELL_WIDTH + CELL_GAP)).max(1) as usize;
    let rows_fit = inner.height.saturating_sub(1).max(1) as usize;

    // keep the selection in view
    if app.selected_col < app.col_offset {
        app.col_offset = app.selected_col;
    }
    if app.selected_col >= app.col_offset + cols_fit {
        app.col_offset = app.selected_col + 1 - cols_fit;
    }
    if app.selected_row < app.row_offset {
        app.row_offset = app.selected_row;
    }
    if app.selected_row >= app.row_offset + rows_fit {
        app.row_offset = app.selected_row + 1 - rows_fit;
    }

    let visible_cols: Vec<usize> = (app.col_offset
        ..(app.col_offset + cols_fit).min(app.view_model.axis.len()))
        .collect();

    let mut lines: Vec<Line> = Vec::new();

    let mut header = vec![Span::styled(
        pad("", task_width as usize),
        Style::default(),
    )];
    for &col in &visible_cols {
        let entry = &app.view_model.axis[col];
        let style = if col == app.selected_col {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_MUTED)
        };
        header.push(Span::styled(
            pad(&entry.label, (CELL_WIDTH + CELL_GAP) as usize),
            style,
        ));
    }
    lines.push(Line::from(header));

    let visible_rows = app.row_offset
        ..(app.row_offset + rows_fit).min(app.view_model.tasks.len());
    for row in visible_rows {
        let task = &app.view_model.tasks[row];
        let selected_row = row == app.selected_row;
        let name_style = if selected_row {
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_TEXT)
        };

        let mut spans = vec![Span::styled(
            pad(&truncate(task, task_width as usize), task_width as usize),
            name_style,
        )];

        for &col in &visible_cols {
            let selected = selected_row && col == app.selected_col;
            if let Some(cell) = app.view_model.cell(row, col) {
                spans.push(cell_span(cell, selected));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn cell_span(cell: &CellView, selected: bool) -> Span<'static> {
    let progress = cell.record.progress;
    let filled = (((progress / 100.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);

    let mut text = String::new();
    for _ in 0..filled {
        text.push(BAR_FULL);
    }
    for _ in filled..BAR_WIDTH {
        text.push(BAR_EMPTY);
    }
    text.push(' ');
    text.push_str(&format_progress(progress));
    text.push('%');

    let fg = if !cell.present {
        COLOR_MUTED_DARK
    } else if progress >= 100.0 {
        COLOR_SUCCESS
    } else if progress >= 50.0 {
        COLOR_INFO
    } else {
        COLOR_WARNING
    };

    let mut style = Style::default().fg(fg);
    if selected {
        style = style.bg(COLOR_BG_SELECTED).add_modifier(Modifier::BOLD);
    }

    Span::styled(pad(&text, (CELL_WIDTH + CELL_GAP) as usize), style)
}

fn render_detail(frame: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER_PANEL))
        .title(" Detail ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(cell) = app.view_model.cell(app.selected_row, app.selected_col) else {
        return;
    };
    let entry = &app.view_model.axis[app.selected_col];
    let placeholder = app.placeholder().to_string();

    let lines = vec![
        field_line("Task", cell.record.task.clone(), COLOR_TEXT),
        field_line("Month", entry.label.clone(), COLOR_TEXT),
        field_line(
            "Progress",
            format!("{}%", format_progress(cell.record.progress)),
            COLOR_INFO,
        ),
        field_line(
            "Status",
            display_or(&cell.record.status, &placeholder),
            COLOR_TEXT,
        ),
        field_line(
            "Comment",
            display_or(&cell.record.comment, &placeholder),
            COLOR_TEXT,
        ),
    ];

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(widget, inner);
}

fn render_summary(frame: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER_PANEL))
        .title(" Summary ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(summary) = app.view_model.summaries.get(app.selected_row) else {
        return;
    };
    let task = &app.view_model.tasks[app.selected_row];
    let placeholder = app.placeholder().to_string();

    let mut lines = vec![
        field_line("Task", task.clone(), COLOR_TEXT),
        field_line(
            "Last progress",
            format!("{}%", format_progress(summary.last_progress)),
            COLOR_INFO,
        ),
        field_line(
            "Last status",
            display_or(&summary.last_status, &placeholder),
            COLOR_TEXT,
        ),
        field_line(
            "Last comment",
            display_or(&summary.last_comment, &placeholder),
            COLOR_TEXT,
        ),
        Line::default(),
    ];
    if app.view_model.skipped_rows > 0 {
        lines.push(Line::from(Span::styled(
            format!("{} row(s) skipped on load", app.view_model.skipped_rows),
            Style::default().fg(COLOR_WARNING),
        )));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(widget, inner);
}

fn render_footer(frame: &mut Frame, app: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)].as_ref())
        .split(area);

    let help = Paragraph::new(Line::from(Span::styled(
        "arrows/hjkl move · home/end jump · tab detail/summary · r reload · q quit",
        Style::default().fg(COLOR_MUTED_DARK),
    )));
    frame.render_widget(help, chunks[0]);

    if let Some((kind, message)) = &app.status {
        let color = match kind {
            StatusKind::Info => COLOR_INFO,
            StatusKind::Error => COLOR_ERROR,
        };
        let status = Paragraph::new(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(color),
        )));
        frame.render_widget(status, chunks[1]);
    }
}

fn field_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().fg(COLOR_MUTED).add_modifier(Modifier::BOLD),
        ),
        Span::styled(value, Style::default().fg(color)),
    ])
}

fn display_or(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        let mut padded = text.to_string();
        padded.extend(std::iter::repeat(' ').take(width - len));
        padded
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('\u{2026}');
    out
}
