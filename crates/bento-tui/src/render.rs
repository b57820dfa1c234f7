// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use bento_app::{
    Accent, AppState, BentoPlacement, Candidate, DashboardData, MetricCard, RankTier, WidgetSpec,
    place,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};

use crate::{DashboardOptions, PanelSide, ViewData};

pub(crate) const TABLE_ROW_HEIGHT: u16 = 2;
const TABLE_HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;

/// Screen regions for one frame. Derived from the frame size and the
/// placement alone, so input handling can recompute it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DashboardAreas {
    pub top_rows: Vec<Vec<Rect>>,
    pub left: Vec<Rect>,
    pub right: Vec<Rect>,
    pub panel: Option<Rect>,
    pub table: Rect,
    pub bottom_rows: Vec<Vec<Rect>>,
    pub status: Rect,
}

pub(crate) fn placement(options: &DashboardOptions) -> BentoPlacement<&'static WidgetSpec> {
    place(options.widgets.clone(), options.side_slots())
}

pub(crate) fn dashboard_areas(
    area: Rect,
    placement: &BentoPlacement<&'static WidgetSpec>,
    options: &DashboardOptions,
) -> DashboardAreas {
    let [body, status] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
        .areas(area);

    let has_top = !placement.top_rows.is_empty();
    let has_bottom = !placement.bottom_rows.is_empty();
    let mut constraints = Vec::with_capacity(3);
    if has_top {
        constraints.push(Constraint::Fill(1));
    }
    constraints.push(Constraint::Length(options.center_height));
    if has_bottom {
        constraints.push(Constraint::Fill(1));
    }
    if !has_top && !has_bottom {
        constraints.push(Constraint::Fill(1));
    }
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(body);

    let mut index = 0;
    let top_rows = if has_top {
        index += 1;
        grid_rows(sections[0], &placement.top_rows)
    } else {
        Vec::new()
    };
    let center = sections[index];
    let bottom_rows = if has_bottom {
        grid_rows(sections[index + 1], &placement.bottom_rows)
    } else {
        Vec::new()
    };

    let [left_area, table, right_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(2), Constraint::Fill(3), Constraint::Fill(2)])
        .areas(center);

    let (panel, left, right) = match options.requirements_panel {
        PanelSide::Left => (
            Some(left_area),
            Vec::new(),
            stack(right_area, placement.right.len()),
        ),
        PanelSide::Right => (
            Some(right_area),
            stack(left_area, placement.left.len()),
            Vec::new(),
        ),
        PanelSide::Hidden => (
            None,
            stack(left_area, placement.left.len()),
            stack(right_area, placement.right.len()),
        ),
    };

    DashboardAreas {
        top_rows,
        left,
        right,
        panel,
        table,
        bottom_rows,
        status,
    }
}

fn grid_rows<T>(area: Rect, rows: &[Vec<T>]) -> Vec<Vec<Rect>> {
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Fill(1); rows.len()])
        .split(area);
    rows.iter()
        .zip(row_areas.iter())
        .map(|(row, row_area)| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Fill(1); row.len()])
                .split(*row_area)
                .to_vec()
        })
        .collect()
}

fn stack(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Fill(1); count])
        .split(area)
        .to_vec()
}

pub(crate) fn selected_candidate<'a>(
    state: &AppState,
    data: &'a DashboardData,
) -> Option<&'a Candidate> {
    state
        .selection
        .selected()
        .and_then(|id| data.candidate(id))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CandidateRowView {
    pub name: String,
    pub email: String,
    pub rank: u32,
    pub tier: RankTier,
    pub selected: bool,
    pub focused: bool,
}

pub(crate) fn candidate_rows(state: &AppState, data: &DashboardData) -> Vec<CandidateRowView> {
    data.candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| CandidateRowView {
            name: candidate.name.clone(),
            email: candidate.email.clone(),
            rank: candidate.job_relevance_rank,
            tier: candidate.rank_tier(),
            selected: state.selection.is_selected(&candidate.id),
            focused: index == state.cursor,
        })
        .collect()
}

pub(crate) fn visible_table_rows(table: Rect) -> usize {
    let inner_height = table.height.saturating_sub(2 + TABLE_HEADER_HEIGHT);
    usize::from((inner_height / TABLE_ROW_HEIGHT).max(1))
}

/// First row drawn so the cursor stays on screen.
pub(crate) fn table_offset(cursor: usize, visible: usize) -> usize {
    cursor.saturating_sub(visible.saturating_sub(1))
}

/// Maps a screen position to a candidate index, if it lands on a row.
pub(crate) fn table_row_at(
    table: Rect,
    cursor: usize,
    len: usize,
    column: u16,
    row: u16,
) -> Option<usize> {
    let visible = visible_table_rows(table);
    let body_top = table.y + 1 + TABLE_HEADER_HEIGHT;
    // A leftover line below the last drawn row belongs to no candidate.
    let rows_bottom = body_top.saturating_add((visible as u16).saturating_mul(TABLE_ROW_HEIGHT));
    let body_bottom = (table.y + table.height.saturating_sub(1)).min(rows_bottom);
    if column <= table.x || column >= table.x + table.width.saturating_sub(1) {
        return None;
    }
    if row < body_top || row >= body_bottom {
        return None;
    }
    let index = table_offset(cursor, visible) + usize::from((row - body_top) / TABLE_ROW_HEIGHT);
    (index < len).then_some(index)
}

pub(crate) fn render(
    frame: &mut ratatui::Frame<'_>,
    state: &AppState,
    view_data: &ViewData,
    options: &DashboardOptions,
) {
    let placement = placement(options);
    let areas = dashboard_areas(frame.area(), &placement, options);
    let selected = selected_candidate(state, &view_data.data);

    for (row, row_areas) in placement.top_rows.iter().zip(areas.top_rows.iter()) {
        for (widget, area) in row.iter().zip(row_areas.iter()) {
            render_card(frame, *area, &widget.payload.card(selected));
        }
    }
    for (widget, area) in placement.left.iter().zip(areas.left.iter()) {
        render_card(frame, *area, &widget.payload.card(selected));
    }
    for (widget, area) in placement.right.iter().zip(areas.right.iter()) {
        render_card(frame, *area, &widget.payload.card(selected));
    }
    for (row, row_areas) in placement.bottom_rows.iter().zip(areas.bottom_rows.iter()) {
        for (widget, area) in row.iter().zip(row_areas.iter()) {
            render_card(frame, *area, &widget.payload.card(selected));
        }
    }

    if let Some(panel) = areas.panel {
        render_requirements(frame, panel, &view_data.data);
    }
    render_candidate_table(frame, areas.table, state, &view_data.data);

    let status = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(status, areas.status);

    if view_data.help_visible {
        let area = centered_rect(60, 60, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Emerald => Color::LightGreen,
        Accent::Blue => Color::LightBlue,
        Accent::Amber => Color::Yellow,
        Accent::Purple => Color::LightMagenta,
        Accent::Green => Color::Green,
        Accent::Cyan => Color::Cyan,
    }
}

fn rank_color(tier: RankTier) -> Color {
    match tier {
        RankTier::Top => Color::Green,
        RankTier::Middle => Color::Yellow,
        RankTier::Low => Color::Red,
    }
}

fn render_card(frame: &mut ratatui::Frame<'_>, area: Rect, card: &MetricCard) {
    let block = Block::default()
        .title(card.header)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let [body, footer] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .areas(inner);

    let mut lines = vec![Line::from(Span::styled(
        card.value.clone(),
        Style::default()
            .fg(accent_color(card.accent))
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(caption) = card.caption {
        lines.push(Line::from(Span::styled(
            caption,
            Style::default().fg(Color::Gray),
        )));
    }
    let padding = body.height.saturating_sub(lines.len() as u16) / 2;
    let mut padded = vec![Line::default(); usize::from(padding)];
    padded.extend(lines);
    frame.render_widget(
        Paragraph::new(Text::from(padded)).alignment(Alignment::Center),
        body,
    );

    let footer_line = Line::from(vec![
        Span::styled("Score: ", Style::default().fg(Color::Gray)),
        Span::styled(
            card.score.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(card.person.clone(), Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(footer_line), footer);
}

fn render_requirements(frame: &mut ratatui::Frame<'_>, area: Rect, data: &DashboardData) {
    let heading = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let muted = Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::ITALIC);

    let mut lines = vec![Line::from(Span::styled("Requirements", heading))];
    if data.requirements.is_empty() {
        lines.push(Line::from(Span::styled("No requirements specified.", muted)));
    }
    for requirement in &data.requirements {
        lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(Color::LightGreen)),
            Span::raw(requirement.clone()),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Tech Skills Needed", heading)));
    if data.tech_skills.is_empty() {
        lines.push(Line::from(Span::styled("No tech skills specified.", muted)));
    } else {
        let mut badges = Vec::with_capacity(data.tech_skills.len() * 2);
        for skill in &data.tech_skills {
            badges.push(Span::styled(
                format!("[{skill}]"),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            badges.push(Span::raw(" "));
        }
        lines.push(Line::from(badges));
    }

    let panel = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Job Requirements")
                .borders(Borders::ALL),
        );
    frame.render_widget(panel, area);
}

fn render_candidate_table(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    data: &DashboardData,
) {
    let block = Block::default()
        .title("Candidates Rank")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if data.candidates.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No candidates loaded.",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(["Candidate", "Rank", "LinkedIn", "Contact"].map(|label| {
        Cell::from(label).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    }))
    .height(TABLE_HEADER_HEIGHT);

    let visible = visible_table_rows(area);
    let offset = table_offset(state.cursor, visible);
    let rows = candidate_rows(state, data)
        .into_iter()
        .skip(offset)
        .take(visible)
        .map(|row| {
            let mut style = Style::default();
            if row.focused {
                style = style.bg(Color::DarkGray);
            }
            if row.selected {
                style = Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD);
            }
            let name = Text::from(vec![
                Line::from(row.name),
                Line::from(Span::styled(row.email, Style::default().fg(Color::Gray))),
            ]);
            Row::new(vec![
                Cell::from(name),
                Cell::from(Span::styled(
                    row.rank.to_string(),
                    Style::default()
                        .fg(rank_color(row.tier))
                        .add_modifier(Modifier::BOLD),
                )),
                Cell::from("o link"),
                Cell::from("m mail"),
            ])
            .height(TABLE_ROW_HEIGHT)
            .style(style)
        });

    let widths = [
        Constraint::Fill(3),
        Constraint::Length(5),
        Constraint::Length(8),
        Constraint::Length(8),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(block);
    frame.render_widget(table, area);
}

pub(crate) fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if let Some(status) = &state.status_line {
        return status.clone();
    }
    let selection = match selected_candidate(state, &view_data.data) {
        Some(candidate) => format!("showing {}", candidate.name),
        None => "showing team defaults".to_owned(),
    };
    format!("{selection} | enter select  m mail  o profile  ? help  q quit")
}

pub(crate) fn help_overlay_text() -> &'static str {
    "j/k or arrows  move between candidates\n\
     g/G            first/last candidate\n\
     enter/space    select or clear a candidate\n\
     click          select or clear a candidate\n\
     m              email the focused candidate\n\
     o              open the focused candidate's profile\n\
     ?              toggle this help\n\
     q/esc          quit"
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
