// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod render;

use anyhow::{Context, Result};
use bento_app::{
    AppCommand, AppState, Candidate, DashboardData, OutboundLink, SideSlots, Widget,
    default_widgets, mailto_link, profile_link,
};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

pub const DEFAULT_CENTER_HEIGHT: u16 = 16;

pub trait DashboardRuntime {
    fn load_dashboard(&mut self) -> Result<DashboardData>;
    fn open_link(&mut self, link: &OutboundLink) -> Result<()>;
}

/// Where the job requirements panel sits beside the candidate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelSide {
    #[default]
    Left,
    Right,
    Hidden,
}

impl PanelSide {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Hidden => "none",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "none" => Some(Self::Hidden),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardOptions {
    pub widgets: Vec<Widget>,
    pub requirements_panel: PanelSide,
    pub center_height: u16,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            widgets: default_widgets(),
            requirements_panel: PanelSide::Left,
            center_height: DEFAULT_CENTER_HEIGHT,
        }
    }
}

impl DashboardOptions {
    pub fn side_slots(&self) -> SideSlots {
        SideSlots {
            left: self.requirements_panel != PanelSide::Left,
            right: self.requirements_panel != PanelSide::Right,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ViewData {
    data: DashboardData,
    help_visible: bool,
    status_token: u64,
    frame_area: Rect,
}

pub fn run_app<R: DashboardRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    options: &DashboardOptions,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, EnableMouseCapture)
        .context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let result = match Terminal::new(backend).context("create terminal") {
        Ok(mut terminal) => event_loop(&mut terminal, state, runtime, options),
        Err(error) => Err(error),
    };

    disable_raw_mode().context("disable raw mode")?;
    execute!(
        io::stdout(),
        DisableMouseCapture,
        terminal::LeaveAlternateScreen
    )
    .context("leave alternate screen")?;
    result
}

fn event_loop<B: Backend, R: DashboardRuntime>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    runtime: &mut R,
    options: &DashboardOptions,
) -> Result<()> {
    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();

    load_view_data(state, runtime, &mut view_data, &internal_tx);

    loop {
        process_internal_events(state, &view_data, &internal_rx);

        let completed = terminal
            .draw(|frame| render::render(frame, state, &view_data, options))
            .context("draw frame")?;
        view_data.frame_area = completed.area;

        if !event::poll(Duration::from_millis(120)).context("poll event")? {
            continue;
        }
        match event::read().context("read event")? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                handle_mouse_event(state, &view_data, options, mouse);
            }
            _ => {}
        }
    }
}

fn load_view_data<R: DashboardRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    match runtime.load_dashboard() {
        Ok(data) => {
            let count = data.candidates.len();
            view_data.data = data;
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("loaded {count} candidates"),
            );
        }
        Err(error) => {
            tracing::warn!(error = %format!("{error:#}"), "dashboard data load failed");
            view_data.data = DashboardData::default();
            state.dispatch(AppCommand::SetStatus(format!("load failed: {error:#}")));
        }
    }
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &ViewData,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn focused_candidate<'a>(state: &AppState, view_data: &'a ViewData) -> Option<&'a Candidate> {
    view_data.data.candidates.get(state.cursor)
}

fn toggle_focused(state: &mut AppState, view_data: &ViewData) {
    if let Some(candidate) = focused_candidate(state, view_data) {
        state.dispatch(AppCommand::SelectCandidate(candidate.id.clone()));
    }
}

/// Returns true when the app should quit.
fn handle_key_event<R: DashboardRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    if view_data.help_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            view_data.help_visible = false;
        }
        return matches!(key.code, KeyCode::Char('q'));
    }

    let len = view_data.data.candidates.len();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('?') => view_data.help_visible = true,
        KeyCode::Char('j') | KeyCode::Down => {
            state.dispatch(AppCommand::MoveCursor { delta: 1, len });
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.dispatch(AppCommand::MoveCursor { delta: -1, len });
        }
        KeyCode::Char('g') | KeyCode::Home => {
            state.dispatch(AppCommand::SetCursor { row: 0, len });
        }
        KeyCode::Char('G') | KeyCode::End => {
            state.dispatch(AppCommand::SetCursor {
                row: len.saturating_sub(1),
                len,
            });
        }
        KeyCode::Enter | KeyCode::Char(' ') => toggle_focused(state, view_data),
        KeyCode::Char('m') => open_focused_link(state, runtime, view_data, internal_tx, mailto_link),
        KeyCode::Char('o') => {
            open_focused_link(state, runtime, view_data, internal_tx, profile_link);
        }
        _ => {}
    }
    false
}

fn open_focused_link<R: DashboardRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    build: fn(&Candidate) -> Result<OutboundLink>,
) {
    let Some(candidate) = focused_candidate(state, view_data) else {
        emit_status(state, view_data, internal_tx, "no candidate focused");
        return;
    };
    let name = candidate.name.clone();

    let message = match build(candidate).and_then(|link| {
        runtime.open_link(&link)?;
        Ok(link)
    }) {
        Ok(link) => {
            tracing::info!(candidate = %name, kind = link.label(), "opened outbound link");
            format!("opened {} for {name}", link.label())
        }
        Err(error) => {
            tracing::warn!(candidate = %name, error = %format!("{error:#}"), "outbound link failed");
            format!("cannot open link: {error:#}")
        }
    };
    emit_status(state, view_data, internal_tx, message);
}

fn handle_mouse_event(
    state: &mut AppState,
    view_data: &ViewData,
    options: &DashboardOptions,
    mouse: MouseEvent,
) {
    if view_data.help_visible || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let placement = render::placement(options);
    let areas = render::dashboard_areas(view_data.frame_area, &placement, options);
    let len = view_data.data.candidates.len();
    let Some(row) = render::table_row_at(areas.table, state.cursor, len, mouse.column, mouse.row)
    else {
        return;
    };

    state.dispatch(AppCommand::SetCursor { row, len });
    toggle_focused(state, view_data);
}

#[cfg(test)]
mod tests {
    use super::render::{
        TABLE_ROW_HEIGHT, candidate_rows, dashboard_areas, placement, render, selected_candidate,
        status_text, table_offset, table_row_at, visible_table_rows,
    };
    use super::{
        DashboardOptions, DashboardRuntime, PanelSide, ViewData, handle_key_event,
        handle_mouse_event, load_view_data,
    };
    use anyhow::{Result, anyhow};
    use bento_app::{
        AppState, CandidateId, DashboardData, OutboundLink, SideSlots, mount_widgets, widget_spec,
    };
    use bento_testkit::{CandidateFaker, bob_smith};
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use std::sync::mpsc;

    #[derive(Debug, Default)]
    struct TestRuntime {
        data: DashboardData,
        load_error: Option<String>,
        open_error: Option<String>,
        opened: Vec<OutboundLink>,
    }

    impl DashboardRuntime for TestRuntime {
        fn load_dashboard(&mut self) -> Result<DashboardData> {
            match &self.load_error {
                Some(error) => Err(anyhow!(error.clone())),
                None => Ok(self.data.clone()),
            }
        }

        fn open_link(&mut self, link: &OutboundLink) -> Result<()> {
            if let Some(error) = &self.open_error {
                return Err(anyhow!(error.clone()));
            }
            self.opened.push(link.clone());
            Ok(())
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_data() -> DashboardData {
        let mut data = CandidateFaker::new(9).document(5);
        data.candidates[1] = bob_smith();
        data
    }

    fn view_with(data: DashboardData) -> ViewData {
        ViewData {
            data,
            frame_area: Rect::new(0, 0, 160, 48),
            ..ViewData::default()
        }
    }

    fn render_to_string(
        state: &AppState,
        view_data: &ViewData,
        options: &DashboardOptions,
        width: u16,
        height: u16,
    ) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal
            .draw(|frame| render(frame, state, view_data, options))
            .expect("draw frame");
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn default_options_put_requirements_left() {
        let options = DashboardOptions::default();
        assert_eq!(
            options.side_slots(),
            SideSlots {
                left: false,
                right: true,
            }
        );
        assert_eq!(options.widgets.len(), 9);
    }

    #[test]
    fn panel_side_names_round_trip() {
        for side in [PanelSide::Left, PanelSide::Right, PanelSide::Hidden] {
            assert_eq!(PanelSide::parse(side.as_str()), Some(side));
        }
        assert_eq!(PanelSide::parse("top"), None);
    }

    #[test]
    fn default_layout_fills_right_slot_and_splits_the_rest() {
        let options = DashboardOptions::default();
        let placement = placement(&options);
        let areas = dashboard_areas(Rect::new(0, 0, 140, 50), &placement, &options);

        assert!(areas.panel.is_some());
        assert!(areas.left.is_empty());
        assert_eq!(areas.right.len(), 2);
        assert_eq!(
            areas.top_rows.iter().map(Vec::len).collect::<Vec<_>>(),
            vec![4]
        );
        assert_eq!(
            areas.bottom_rows.iter().map(Vec::len).collect::<Vec<_>>(),
            vec![3]
        );
        assert_eq!(areas.table.height, options.center_height);
        assert_eq!(areas.status.height, 1);
    }

    #[test]
    fn row_siblings_share_width_equally() {
        let options = DashboardOptions::default();
        let placement = placement(&options);
        let areas = dashboard_areas(Rect::new(0, 0, 120, 50), &placement, &options);
        let widths = areas.top_rows[0]
            .iter()
            .map(|rect| rect.width)
            .collect::<Vec<_>>();
        assert!(widths.iter().all(|width| *width == widths[0]), "{widths:?}");
    }

    #[test]
    fn hidden_panel_frees_both_side_slots() {
        let options = DashboardOptions {
            requirements_panel: PanelSide::Hidden,
            widgets: mount_widgets(&["team-performance", "active-candidates", "interview-rate"])
                .expect("known widgets"),
            ..DashboardOptions::default()
        };
        let placement = placement(&options);
        let areas = dashboard_areas(Rect::new(0, 0, 120, 40), &placement, &options);
        assert!(areas.panel.is_none());
        assert_eq!(areas.left.len(), 2);
        assert_eq!(areas.right.len(), 1);
        assert!(areas.top_rows.is_empty());
        assert!(areas.bottom_rows.is_empty());
    }

    #[test]
    fn candidate_rows_follow_input_order() {
        for count in [1, 5, 15] {
            let data = CandidateFaker::new(count as u64).document(count);
            let rows = candidate_rows(&AppState::default(), &data);
            assert_eq!(rows.len(), count);
            let names = rows.iter().map(|row| row.name.clone()).collect::<Vec<_>>();
            let expected = data
                .candidates
                .iter()
                .map(|candidate| candidate.name.clone())
                .collect::<Vec<_>>();
            assert_eq!(names, expected);
        }
    }

    #[test]
    fn enter_toggles_selection_of_focused_row() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = view_with(sample_data());
        let (tx, _rx) = mpsc::channel();

        handle_key_event(&mut state, &mut runtime, &mut view_data, &tx, key(KeyCode::Down));
        handle_key_event(&mut state, &mut runtime, &mut view_data, &tx, key(KeyCode::Enter));
        assert!(state.selection.is_selected(&CandidateId::from("2")));

        handle_key_event(&mut state, &mut runtime, &mut view_data, &tx, key(KeyCode::Enter));
        assert_eq!(state.selection.selected(), None);
    }

    #[test]
    fn selecting_another_row_switches_selection() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = view_with(sample_data());
        let (tx, _rx) = mpsc::channel();

        handle_key_event(&mut state, &mut runtime, &mut view_data, &tx, key(KeyCode::Enter));
        let first = view_data.data.candidates[0].id.clone();
        assert!(state.selection.is_selected(&first));

        handle_key_event(&mut state, &mut runtime, &mut view_data, &tx, key(KeyCode::Char('j')));
        handle_key_event(&mut state, &mut runtime, &mut view_data, &tx, key(KeyCode::Char(' ')));
        assert!(state.selection.is_selected(&CandidateId::from("2")));
    }

    #[test]
    fn selection_drives_interview_rate_card() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = view_with(sample_data());
        let (tx, _rx) = mpsc::channel();
        let spec = widget_spec("interview-rate").expect("registered widget");

        let card = spec.card(selected_candidate(&state, &view_data.data));
        assert_eq!((card.value.as_str(), card.score.as_str()), ("73%", "A+"));
        assert_eq!(card.person, "Lisa K.");

        handle_key_event(&mut state, &mut runtime, &mut view_data, &tx, key(KeyCode::Char('j')));
        handle_key_event(&mut state, &mut runtime, &mut view_data, &tx, key(KeyCode::Enter));
        let card = spec.card(selected_candidate(&state, &view_data.data));
        assert_eq!(card.value, "73%");
        assert_eq!(card.score, "A+");
        assert_eq!(card.person, "Bob Smith");

        handle_key_event(&mut state, &mut runtime, &mut view_data, &tx, key(KeyCode::Enter));
        let card = spec.card(selected_candidate(&state, &view_data.data));
        assert_eq!(card.person, "Lisa K.");
    }

    #[test]
    fn quit_keys_end_the_loop() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = view_with(sample_data());
        let (tx, _rx) = mpsc::channel();

        assert!(handle_key_event(
            &mut state,
            &mut runtime,
            &mut view_data,
            &tx,
            key(KeyCode::Char('q'))
        ));
        assert!(handle_key_event(
            &mut state,
            &mut runtime,
            &mut view_data,
            &tx,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
        assert!(!handle_key_event(
            &mut state,
            &mut runtime,
            &mut view_data,
            &tx,
            key(KeyCode::Char('x'))
        ));
    }

    #[test]
    fn escape_closes_help_before_quitting() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = view_with(sample_data());
        let (tx, _rx) = mpsc::channel();

        handle_key_event(&mut state, &mut runtime, &mut view_data, &tx, key(KeyCode::Char('?')));
        assert!(view_data.help_visible);
        assert!(!handle_key_event(
            &mut state,
            &mut runtime,
            &mut view_data,
            &tx,
            key(KeyCode::Esc)
        ));
        assert!(!view_data.help_visible);
    }

    #[test]
    fn mail_key_opens_templated_link() {
        let mut state = AppState {
            cursor: 1,
            ..AppState::default()
        };
        let mut runtime = TestRuntime::default();
        let mut view_data = view_with(sample_data());
        let (tx, _rx) = mpsc::channel();

        handle_key_event(&mut state, &mut runtime, &mut view_data, &tx, key(KeyCode::Char('m')));
        assert_eq!(runtime.opened.len(), 1);
        let target = runtime.opened[0].target();
        assert!(target.starts_with("mailto:bob.smith@example.com?subject="));
        assert!(target.contains("Bob%20Smith"));
        assert_eq!(state.status_line.as_deref(), Some("opened mail for Bob Smith"));
    }

    #[test]
    fn profile_key_opens_profile_url() {
        let mut state = AppState {
            cursor: 1,
            ..AppState::default()
        };
        let mut runtime = TestRuntime::default();
        let mut view_data = view_with(sample_data());
        let (tx, _rx) = mpsc::channel();

        handle_key_event(&mut state, &mut runtime, &mut view_data, &tx, key(KeyCode::Char('o')));
        assert_eq!(
            runtime.opened,
            vec![OutboundLink::Profile(
                "https://linkedin.com/in/bobsmith".to_owned()
            )]
        );
    }

    #[test]
    fn opener_failure_lands_in_status_line() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime {
            open_error: Some("no opener".to_owned()),
            ..TestRuntime::default()
        };
        let mut view_data = view_with(sample_data());
        let (tx, _rx) = mpsc::channel();

        handle_key_event(&mut state, &mut runtime, &mut view_data, &tx, key(KeyCode::Char('m')));
        assert!(runtime.opened.is_empty());
        assert_eq!(
            state.status_line.as_deref(),
            Some("cannot open link: no opener")
        );
    }

    #[test]
    fn link_keys_without_candidates_report_status() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = view_with(DashboardData::default());
        let (tx, _rx) = mpsc::channel();

        handle_key_event(&mut state, &mut runtime, &mut view_data, &tx, key(KeyCode::Char('o')));
        assert_eq!(state.status_line.as_deref(), Some("no candidate focused"));
        handle_key_event(&mut state, &mut runtime, &mut view_data, &tx, key(KeyCode::Enter));
        assert_eq!(state.selection.selected(), None);
    }

    #[test]
    fn load_failure_degrades_to_empty_data() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime {
            data: sample_data(),
            load_error: Some("connection refused".to_owned()),
            ..TestRuntime::default()
        };
        let mut view_data = view_with(sample_data());
        let (tx, _rx) = mpsc::channel();

        load_view_data(&mut state, &mut runtime, &mut view_data, &tx);
        assert!(view_data.data.candidates.is_empty());
        assert_eq!(
            state.status_line.as_deref(),
            Some("load failed: connection refused")
        );
    }

    #[test]
    fn load_success_reports_candidate_count() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime {
            data: sample_data(),
            ..TestRuntime::default()
        };
        let mut view_data = ViewData::default();
        let (tx, _rx) = mpsc::channel();

        load_view_data(&mut state, &mut runtime, &mut view_data, &tx);
        assert_eq!(view_data.data.candidates.len(), 5);
        assert_eq!(state.status_line.as_deref(), Some("loaded 5 candidates"));
        assert_eq!(view_data.status_token, 1);
    }

    #[test]
    fn table_rows_map_from_screen_positions() {
        let table = Rect::new(10, 5, 40, 13);
        // 13 rows: 2 border, 1 header, 10 body -> 5 visible candidates
        assert_eq!(visible_table_rows(table), 5);
        assert_eq!(table_row_at(table, 0, 8, 20, 7), Some(0));
        assert_eq!(table_row_at(table, 0, 8, 20, 7 + TABLE_ROW_HEIGHT), Some(1));
        assert_eq!(table_row_at(table, 0, 8, 20, 6), None);
        assert_eq!(table_row_at(table, 0, 8, 10, 7), None);
        assert_eq!(table_row_at(table, 0, 1, 20, 9), None);
        // cursor at 7 scrolls so rows 3..8 are visible
        assert_eq!(table_offset(7, 5), 3);
        assert_eq!(table_row_at(table, 7, 8, 20, 7), Some(3));
    }

    #[test]
    fn blank_line_under_last_row_is_not_a_row() {
        // 16 rows: 2 border, 1 header, 13 body -> 6 rows and one blank line
        let table = Rect::new(0, 16, 60, 16);
        assert_eq!(visible_table_rows(table), 6);
        assert_eq!(table_row_at(table, 0, 8, 5, 18 + 5 * TABLE_ROW_HEIGHT + 1), Some(5));
        assert_eq!(table_row_at(table, 0, 8, 5, 30), None);
        assert_eq!(table_row_at(table, 0, 8, 5, 31), None);
    }

    #[test]
    fn click_on_blank_line_leaves_selection_alone() {
        let options = DashboardOptions::default();
        let mut state = AppState::default();
        let view_data = view_with(CandidateFaker::new(4).document(8));
        let placement = placement(&options);
        let areas = dashboard_areas(view_data.frame_area, &placement, &options);
        let visible = visible_table_rows(areas.table) as u16;
        let blank_line = areas.table.y + 2 + visible * TABLE_ROW_HEIGHT;
        assert!(blank_line < areas.table.y + areas.table.height - 1);

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: areas.table.x + 2,
            row: blank_line,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(&mut state, &view_data, &options, click);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.selection.selected(), None);
    }

    #[test]
    fn mouse_click_selects_the_clicked_row() {
        let options = DashboardOptions::default();
        let mut state = AppState::default();
        let view_data = view_with(sample_data());
        let placement = placement(&options);
        let areas = dashboard_areas(view_data.frame_area, &placement, &options);
        let second_row = areas.table.y + 2 + TABLE_ROW_HEIGHT;

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: areas.table.x + 2,
            row: second_row,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(&mut state, &view_data, &options, click);
        assert_eq!(state.cursor, 1);
        assert!(state.selection.is_selected(&CandidateId::from("2")));

        handle_mouse_event(&mut state, &view_data, &options, click);
        assert_eq!(state.selection.selected(), None);
    }

    #[test]
    fn rendered_dashboard_shows_defaults_then_selection() {
        let options = DashboardOptions::default();
        let mut state = AppState::default();
        let view_data = view_with(sample_data());

        let text = render_to_string(&state, &view_data, &options, 160, 48);
        assert!(text.contains("Interview Rate"));
        assert!(text.contains("Lisa K."));
        assert!(text.contains("Candidates Rank"));
        assert!(text.contains("Job Requirements"));
        assert!(text.contains("showing team defaults"));

        state.cursor = 1;
        state.selection.toggle(&CandidateId::from("2"));
        let text = render_to_string(&state, &view_data, &options, 160, 48);
        assert!(!text.contains("Lisa K."));
        assert!(text.contains("showing Bob Smith"));
    }

    #[test]
    fn rendered_empty_state_messages() {
        let options = DashboardOptions::default();
        let state = AppState::default();
        let view_data = view_with(DashboardData::default());

        let text = render_to_string(&state, &view_data, &options, 160, 48);
        assert!(text.contains("No candidates loaded."));
        assert!(text.contains("No requirements specified."));
        assert!(text.contains("No tech skills specified."));
    }

    #[test]
    fn status_line_overrides_hint() {
        let mut state = AppState::default();
        let view_data = view_with(sample_data());
        assert!(status_text(&state, &view_data).contains("q quit"));

        state.status_line = Some("loaded 5 candidates".to_owned());
        assert_eq!(status_text(&state, &view_data), "loaded 5 candidates");
    }
}
