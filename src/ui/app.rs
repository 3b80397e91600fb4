//! Main TUI application state and logic

use crate::algorithms::Problem;
use crate::playback::{PlaybackError, Player, Speed};
use crate::trace::AlgorithmTrace;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use super::panes;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    /// Array, heap tree or graph
    Visual,
    Step,
    History,
}

impl FocusedPane {
    /// Move focus to the next pane (visual -> step -> history)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Visual => FocusedPane::Step,
            FocusedPane::Step => FocusedPane::History,
            FocusedPane::History => FocusedPane::Visual,
        }
    }
}

/// The main application state
pub struct App {
    /// The problem being replayed; the graph pane draws from it
    problem: Problem,

    trace: AlgorithmTrace,

    player: Player,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub visual_scroll: usize,
    pub history_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app replaying `trace`, which must come from `problem`
    pub fn new(problem: Problem, trace: AlgorithmTrace, speed: Speed) -> Self {
        let player = Player::new(trace.len()).with_speed(speed);
        App {
            problem,
            trace,
            player,
            focused_pane: FocusedPane::Visual,
            visual_scroll: 0,
            history_scroll: usize::MAX,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn trace(&self) -> &AlgorithmTrace {
        &self.trace
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Start auto-play right away
    pub fn autoplay(&mut self) {
        self.toggle_play();
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.player.is_playing()
                && self.last_play_time.elapsed() >= self.player.speed().interval()
            {
                self.on_tick();
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance one auto-play step
    pub fn on_tick(&mut self) {
        if self.player.tick() {
            self.history_scroll = usize::MAX;
            self.status_message = if self.player.is_playing() {
                "Playing...".to_string()
            } else {
                "Playback complete".to_string()
            };
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Right column: Step (top) | History (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(columns[1]);

        self.render_visual(frame, columns[0]);

        let position = self.player.position();
        panes::render_step_pane(
            frame,
            right_rows[0],
            &self.trace,
            position,
            self.focused_pane == FocusedPane::Step,
        );

        panes::render_history_pane(
            frame,
            right_rows[1],
            &self.trace,
            position,
            self.focused_pane == FocusedPane::History,
            &mut self.history_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            self.trace.algorithm().name(),
            &self.status_message,
            &self.player,
        );
    }

    fn render_visual(&mut self, frame: &mut Frame, area: Rect) {
        let position = self.player.position();
        let focused = self.focused_pane == FocusedPane::Visual;

        match (&self.trace, &self.problem) {
            (AlgorithmTrace::BinarySearch(trace), _) => {
                if let Some(step) = trace.get(position) {
                    let title = format!("Array (target {})", step.target);
                    let view = panes::binary_search_view(step);
                    panes::render_array_pane(frame, area, &title, &view, focused);
                }
            }
            (AlgorithmTrace::HeapSort(trace), _) => {
                if let Some(step) = trace.get(position) {
                    let rows = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                        .split(area);
                    let view = panes::heap_sort_view(step);
                    panes::render_array_pane(frame, rows[0], "Array", &view, focused);
                    panes::render_heap_tree_pane(frame, rows[1], step, focused);
                }
            }
            (AlgorithmTrace::QuickSort(trace), _) => {
                if let Some(step) = trace.get(position) {
                    let view = panes::quick_sort_view(step);
                    panes::render_array_pane(frame, area, "Array", &view, focused);
                }
            }
            (
                AlgorithmTrace::Bfs(trace) | AlgorithmTrace::Dfs(trace),
                Problem::Bfs { graph, .. } | Problem::Dfs { graph, .. },
            ) => {
                if let Some(step) = trace.get(position) {
                    panes::render_graph_pane(
                        frame,
                        area,
                        graph,
                        step,
                        focused,
                        &mut self.visual_scroll,
                    );
                }
            }
            (AlgorithmTrace::Bfs(_) | AlgorithmTrace::Dfs(_), _) => {
                tracing::warn!("graph trace paired with a non-graph problem");
            }
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).map_or(1, |d| d as usize);
                let stepped = self.player.step_forward_by(n);
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.history_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                let result = self.player.step_backward();
                self.report_step(result, "Stepped backward");
            }
            KeyCode::Right => {
                let result = self.player.step_forward();
                self.report_step(result, "Stepped forward");
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Visual => {
                    self.visual_scroll = self.visual_scroll.saturating_sub(1);
                }
                FocusedPane::History => {
                    self.history_scroll = self.history_scroll.saturating_sub(1);
                }
                FocusedPane::Step => {}
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Visual => {
                    self.visual_scroll = self.visual_scroll.saturating_add(1);
                }
                FocusedPane::History => {
                    self.history_scroll = self.history_scroll.saturating_add(1);
                }
                FocusedPane::Step => {}
            },
            KeyCode::Char(' ') => {
                // 200ms debounce to prevent key repeat spam
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.player.set_speed(self.player.speed().faster());
                self.status_message = format!("Speed {}", self.player.speed());
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.player.set_speed(self.player.speed().slower());
                self.status_message = format!("Speed {}", self.player.speed());
            }
            KeyCode::Enter => {
                self.player.jump_to_end();
                self.status_message = "Jumped to end".to_string();
                self.history_scroll = usize::MAX;
            }
            KeyCode::Backspace | KeyCode::Char('r') | KeyCode::Char('R') => {
                self.player.reset();
                self.status_message = "Jumped to start".to_string();
                self.history_scroll = usize::MAX;
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        match self.player.toggle_play() {
            Ok(true) => {
                // First step happens on the next loop iteration
                self.last_play_time = Instant::now()
                    .checked_sub(self.player.speed().interval())
                    .unwrap_or(Instant::now());
                self.status_message = "Playing...".to_string();
            }
            Ok(false) => {
                self.status_message = "Paused".to_string();
            }
            Err(e) => {
                self.status_message = format!("Cannot play: {}", e);
            }
        }
    }

    fn report_step(&mut self, result: Result<(), PlaybackError>, done: &str) {
        match result {
            Ok(()) => {
                self.status_message = done.to_string();
                self.history_scroll = usize::MAX;
            }
            Err(e) => {
                self.status_message = format!("Cannot step: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn sample_app() -> App {
        let problem = Problem::QuickSort {
            array: vec![5, 2, 8, 1],
        };
        let trace = problem.trace();
        App::new(problem, trace, Speed::Normal)
    }

    #[test]
    fn test_arrow_keys_move_position() {
        let mut app = sample_app();

        press(&mut app, KeyCode::Left);
        assert_eq!(app.player().position(), 0);
        assert!(app.status_message.contains("first step"));

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.player().position(), 2);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.player().position(), 1);
    }

    #[test]
    fn test_number_and_jump_keys() {
        let mut app = sample_app();
        let total = app.player().total();

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.player().position(), 3);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.player().position(), total - 1);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.player().position(), 0);
    }

    #[test]
    fn test_space_toggles_playback() {
        let mut app = sample_app();

        press(&mut app, KeyCode::Char(' '));
        assert!(app.player().is_playing());

        app.on_tick();
        assert_eq!(app.player().position(), 1);
        assert!(app.player().is_playing());
    }

    #[test]
    fn test_speed_keys() {
        let mut app = sample_app();

        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.player().speed(), Speed::Double);
        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.player().speed(), Speed::Half);
    }

    #[test]
    fn test_focus_cycles_and_quit() {
        let mut app = sample_app();

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Step);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Visual);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
