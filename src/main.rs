pub mod app_dirs;
pub mod config;
pub mod leaderboard;
pub mod metrics;
pub mod passage;
pub mod runtime;
pub mod score_log;
pub mod session;
pub mod ui;

use crate::{
    config::{ConfigStore, FileConfigStore},
    leaderboard::{format_plain, top_records},
    passage::PassagePool,
    runtime::{AppEvent, AppEventSource, CrosstermEventSource, FixedTicker, Runner, Ticker},
    score_log::{ScoreLog, ScoreRecord},
    session::{Phase, Session},
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
};

/// terminal typing speed trainer
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal typing trainer: retype a sample passage, watch live accuracy and wpm, and collect your best scores on a leaderboard."
)]
pub struct Cli {
    /// file of practice passages separated by blank lines
    #[clap(short = 'p', long)]
    passage_file: Option<PathBuf>,

    /// path of the score log (defaults to the per-user state directory)
    #[clap(long)]
    score_log: Option<PathBuf>,

    /// print the best scores and exit
    #[clap(short = 'b', long)]
    best_scores: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Typing,
    Leaderboard,
}

#[derive(Debug)]
pub struct App {
    pub pool: PassagePool,
    pub score_log: ScoreLog,
    pub top_scores: usize,
    pub session: Option<Session>,
    pub screen: Screen,
    pub leaderboard: Vec<ScoreRecord>,
    pub last_record: Option<ScoreRecord>,
}

impl App {
    pub fn new(pool: PassagePool, score_log: ScoreLog, top_scores: usize) -> Self {
        Self {
            pool,
            score_log,
            top_scores,
            session: None,
            screen: Screen::Typing,
            leaderboard: Vec::new(),
            last_record: None,
        }
    }

    /// Start a new session over a freshly picked passage.
    pub fn start(&mut self) {
        let passage = self.pool.pick_random().to_string();
        self.session = Some(Session::new(passage));
        self.last_record = None;
        self.screen = Screen::Typing;
    }

    /// Start a new session over the current passage.
    pub fn restart(&mut self) {
        match &self.session {
            Some(session) => {
                let passage = session.passage.clone();
                self.session = Some(Session::new(passage));
                self.last_record = None;
                self.screen = Screen::Typing;
            }
            None => self.start(),
        }
    }

    /// Discard the passage and typed text; back to the neutral screen.
    pub fn clear(&mut self) {
        self.session = None;
        self.last_record = None;
        self.screen = Screen::Typing;
    }

    /// Stop the running session; persist the score when it qualifies.
    pub fn stop_session(&mut self) -> Result<(), csv::Error> {
        if let Some(session) = &mut self.session {
            if let Some(record) = session.stop() {
                self.score_log.append(&record)?;
                self.last_record = Some(record);
            }
        }
        Ok(())
    }

    /// Flip between the typing screen and the leaderboard; (re)loads the
    /// score log on the way in so the board is current.
    pub fn toggle_leaderboard(&mut self) -> Result<(), csv::Error> {
        match self.screen {
            Screen::Leaderboard => self.screen = Screen::Typing,
            Screen::Typing => {
                let records = self.score_log.load_all()?;
                self.leaderboard = top_records(records, self.top_scores);
                self.screen = Screen::Leaderboard;
            }
        }
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.session
            .as_ref()
            .map_or(false, |s| s.phase == Phase::Running)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = FileConfigStore::new().load();

    let score_log = match &cli.score_log {
        Some(path) => ScoreLog::with_path(path),
        None => ScoreLog::new(),
    };

    if cli.best_scores {
        let records = top_records(score_log.load_all()?, config.top_scores);
        print!("{}", format_plain(&records));
        return Ok(());
    }

    let passage_file = cli
        .passage_file
        .clone()
        .or_else(|| config.passage_file.as_ref().map(PathBuf::from));

    let pool = match passage_file {
        Some(path) => PassagePool::from_file(&path),
        None => PassagePool::embedded(),
    };
    let pool = match pool {
        Ok(pool) => pool,
        Err(e) => {
            let mut cmd = Cli::command();
            cmd.error(ErrorKind::Io, format!("failed to load passages: {e}"))
                .exit();
        }
    };

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(pool, score_log, config.top_scores);
    let res = run_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    res
}

fn run_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let events = CrosstermEventSource::new();
    let ticker = FixedTicker::default();
    let runner = Runner::new(events, ticker);

    run_loop(terminal, app, &runner)
}

fn run_loop<B: Backend, E: AppEventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| ui(app, f))?;

        match runner.step() {
            AppEvent::Tick => {
                if let Some(session) = &mut app.session {
                    session.on_tick();
                }
            }
            AppEvent::Resize => {}
            // Pasted input is rejected outright; scores reflect manual typing only.
            AppEvent::Paste(_) => {}
            AppEvent::Key(key) => match key.code {
                KeyCode::Esc => break,
                KeyCode::Tab => app.toggle_leaderboard()?,
                KeyCode::Enter => {
                    if app.screen == Screen::Typing {
                        if app.is_running() {
                            app.stop_session()?;
                        } else {
                            app.start();
                        }
                    }
                }
                KeyCode::Backspace => {
                    if app.screen == Screen::Typing {
                        if let Some(session) = &mut app.session {
                            session.backspace();
                        }
                    }
                }
                KeyCode::Char(c) => {
                    if key.modifiers.contains(KeyModifiers::CONTROL) {
                        match c {
                            'c' => break,
                            'l' => app.clear(),
                            'r' => app.restart(),
                            _ => {}
                        }
                    } else if app.screen == Screen::Typing {
                        if let Some(session) = &mut app.session {
                            session.type_char(c);
                        }
                    }
                }
                _ => {}
            },
        }
    }

    Ok(())
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}
