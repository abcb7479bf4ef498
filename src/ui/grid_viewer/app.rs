//! Event loop and state for the grid viewer
//!
//! Crossterm terminal lifecycle, key handling, and a notify watcher on the
//! CSV source with debounce so the grid follows edits to the file.

use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::cli::Context;
use crate::error::Result;
use crate::grid::GridModel;

use super::model::ViewModel;
use super::view;

const EVENT_POLL_MS: u64 = 120;
const WATCH_DEBOUNCE_MS: u64 = 200;

enum UiMsg {
    SourceChanged,
    WatchError(String),
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusKind {
    Info,
    Error,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Panel {
    Detail,
    Summary,
}

pub struct AppState {
    context: Context,
    pub(crate) view_model: ViewModel,
    pub(crate) selected_row: usize,
    pub(crate) selected_col: usize,
    pub(crate) row_offset: usize,
    pub(crate) col_offset: usize,
    pub(crate) panel: Panel,
    pub(crate) status: Option<(StatusKind, String)>,
}

impl AppState {
    fn new(context: Context, view_model: ViewModel) -> Self {
        Self {
            context,
            view_model,
            selected_row: 0,
            selected_col: 0,
            row_offset: 0,
            col_offset: 0,
            panel: Panel::Detail,
            status: None,
        }
    }

    pub(crate) fn source_path(&self) -> &PathBuf {
        &self.context.source_path
    }

    pub(crate) fn placeholder(&self) -> &str {
        &self.context.config.labels.placeholder
    }

    fn move_selection(&mut self, d_row: isize, d_col: isize) {
        let rows = self.view_model.tasks.len();
        let cols = self.view_model.axis.len();
        if rows == 0 || cols == 0 {
            return;
        }
        self.selected_row = step(self.selected_row, d_row, rows);
        self.selected_col = step(self.selected_col, d_col, cols);
    }

    fn clamp_selection(&mut self) {
        let rows = self.view_model.tasks.len();
        let cols = self.view_model.axis.len();
        self.selected_row = self.selected_row.min(rows.saturating_sub(1));
        self.selected_col = self.selected_col.min(cols.saturating_sub(1));
        self.row_offset = self.row_offset.min(self.selected_row);
        self.col_offset = self.col_offset.min(self.selected_col);
    }

    fn reload(&mut self) {
        match self.context.load_model() {
            Ok(model) => {
                self.apply_model(&model);
                self.status = Some((
                    StatusKind::Info,
                    format!("reloaded {}", self.context.source_path.display()),
                ));
            }
            Err(err) => {
                self.status = Some((StatusKind::Error, err.to_string()));
            }
        }
    }

    fn apply_model(&mut self, model: &GridModel) {
        self.view_model = ViewModel::build(model);
        self.clamp_selection();
    }
}

fn step(current: usize, delta: isize, len: usize) -> usize {
    let next = current as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}

pub fn run(context: Context, model: GridModel) -> Result<()> {
    let (ui_tx, ui_rx) = mpsc::channel();
    spawn_watch(context.source_path.clone(), ui_tx);

    let view_model = ViewModel::build(&model);
    let mut app = AppState::new(context, view_model);
    run_terminal(&mut app, ui_rx)
}

fn run_terminal(app: &mut AppState, ui_rx: Receiver<UiMsg>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, app, ui_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    ui_rx: Receiver<UiMsg>,
) -> Result<()> {
    let mut dirty = true;
    loop {
        while let Ok(msg) = ui_rx.try_recv() {
            match msg {
                UiMsg::SourceChanged => app.reload(),
                UiMsg::WatchError(err) => {
                    app.status = Some((StatusKind::Error, format!("watch: {err}")));
                }
            }
            dirty = true;
        }

        if dirty {
            terminal.draw(|frame| view::render(frame, app))?;
            dirty = false;
        }

        if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key(app, key) {
                        break;
                    }
                    dirty = true;
                }
                Event::Resize(_, _) => {
                    dirty = true;
                }
                _ => {}
            }
        }
    }
    Ok(())
}

/// Returns true when the app should quit.
fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1, 0),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1, 0),
        KeyCode::Left | KeyCode::Char('h') => app.move_selection(0, -1),
        KeyCode::Right | KeyCode::Char('l') => app.move_selection(0, 1),
        KeyCode::Home => {
            app.selected_col = 0;
        }
        KeyCode::End => {
            let cols = app.view_model.axis.len();
            app.selected_col = cols.saturating_sub(1);
        }
        KeyCode::Tab => {
            app.panel = match app.panel {
                Panel::Detail => Panel::Summary,
                Panel::Summary => Panel::Detail,
            };
        }
        KeyCode::Char('r') => app.reload(),
        _ => {}
    }

    false
}

fn spawn_watch(source: PathBuf, ui_tx: Sender<UiMsg>) {
    // Watch the parent directory: editors often replace the file wholesale,
    // which drops a watch registered on the file itself.
    let watch_dir = source
        .parent()
        .map(|dir| dir.to_path_buf())
        .filter(|dir| dir.exists())
        .unwrap_or_else(|| PathBuf::from("."));

    thread::spawn(move || {
        let (event_tx, event_rx) = mpsc::channel();
        let watcher: notify::Result<RecommendedWatcher> = notify::recommended_watcher(move |res| {
            let _ = event_tx.send(res);
        });

        let mut watcher = match watcher {
            Ok(watcher) => watcher,
            Err(err) => {
                let _ = ui_tx.send(UiMsg::WatchError(err.to_string()));
                return;
            }
        };

        if watcher.watch(&watch_dir, RecursiveMode::NonRecursive).is_err() {
            return;
        }

        let debounce = Duration::from_millis(WATCH_DEBOUNCE_MS);
        let mut pending: Option<Instant> = None;

        loop {
            let timeout = pending
                .map(|deadline| deadline.saturating_duration_since(Instant::now()))
                .unwrap_or(Duration::from_secs(3600));
            match event_rx.recv_timeout(timeout) {
                Ok(Ok(_)) => {
                    pending = Some(Instant::now() + debounce);
                }
                Ok(Err(err)) => {
                    let _ = ui_tx.send(UiMsg::WatchError(err.to_string()));
                }
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    if pending.is_some() {
                        pending = None;
                        if ui_tx.send(UiMsg::SourceChanged).is_err() {
                            break;
                        }
                    }
                }
                Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
        }
    });
}
