//! Brick Pong entry point
//!
//! Terminal front-end: main menu, then a session loop that forwards key
//! events to the sim and drives `tick` on a fixed deadline. All sim state is
//! owned by this one thread; there is no background game thread.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode};
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode, size};
use log::info;

use brick_pong::render::FieldView;
use brick_pong::settings::Config;
use brick_pong::sim::{GameState, PaddleDir, SessionPhase, move_paddle, tick};

const CONFIG_PATH: &str = "brick-pong.json";
const LOG_PATH: &str = "brick-pong.log";

fn main() -> io::Result<()> {
    // Stdout belongs to the raw-mode UI, so logs go to a file
    simple_logging::log_to_file(LOG_PATH, log::LevelFilter::Info).ok();
    info!("Starting brick-pong");

    let config = Config::load(CONFIG_PATH);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, Hide, Clear(ClearType::All))?;

    let result = run(&mut stdout, &config);

    execute!(stdout, Show, Clear(ClearType::All), MoveTo(0, 0))?;
    disable_raw_mode()?;
    info!("Exiting brick-pong");
    result
}

/// Menu / session cycle until the user quits from the menu
fn run(stdout: &mut io::Stdout, config: &Config) -> io::Result<()> {
    loop {
        if !show_menu(stdout)? {
            return Ok(());
        }
        let ended_by_game_over = run_session(stdout, config)?;
        if ended_by_game_over {
            show_game_over(stdout)?;
        }
    }
}

/// Main menu; returns false when the user quits
fn show_menu(stdout: &mut io::Stdout) -> io::Result<bool> {
    let (width, height) = size()?;
    execute!(stdout, Clear(ClearType::All))?;

    let lines = ["BRICK PONG", "", "Enter - start game", "q - quit"];
    let top = (height / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, line) in lines.iter().enumerate() {
        let x = (width / 2).saturating_sub(line.len() as u16 / 2);
        execute!(stdout, MoveTo(x, top + i as u16))?;
        write!(stdout, "{}", line)?;
    }
    stdout.flush()?;

    loop {
        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => return Ok(true),
                KeyCode::Char('q') | KeyCode::Esc => return Ok(false),
                _ => {}
            }
        }
    }
}

/// One game session; returns true when it ended in game over (as opposed to
/// the user stopping it)
fn run_session(stdout: &mut io::Stdout, config: &Config) -> io::Result<bool> {
    let (width, height) = size()?;
    // Last terminal row is the status line
    let mut view = FieldView::new(width, height.saturating_sub(1), config);

    let mut state = GameState::new(config);
    state.start_session(config);

    execute!(stdout, Clear(ClearType::All))?;
    view.draw(&state);
    view.render(stdout)?;
    draw_status(stdout, &state, height)?;

    let interval = Duration::from_millis(config.tick_interval_ms);
    let mut next_tick = Instant::now() + interval;

    while state.is_running() {
        // Drain input until the tick deadline
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.code {
                    KeyCode::Left => move_paddle(&mut state, PaddleDir::Left, config),
                    KeyCode::Right => move_paddle(&mut state, PaddleDir::Right, config),
                    KeyCode::Char('q') | KeyCode::Esc => state.stop_session(),
                    _ => {}
                },
                Event::Resize(new_width, new_height) => {
                    view = FieldView::new(new_width, new_height.saturating_sub(1), config);
                    execute!(stdout, Clear(ClearType::All))?;
                }
                _ => {}
            }
        }

        if Instant::now() >= next_tick {
            let delta = tick(&mut state, config);
            next_tick += interval;

            view.draw(&state);
            view.render(stdout)?;
            draw_status(stdout, &state, size()?.1)?;

            if delta.game_over {
                return Ok(true);
            }
        }
    }

    Ok(state.phase == SessionPhase::GameOver)
}

fn draw_status(stdout: &mut io::Stdout, state: &GameState, height: u16) -> io::Result<()> {
    execute!(stdout, MoveTo(0, height.saturating_sub(1)))?;
    write!(
        stdout,
        "Bricks: {:3}   <-/-> move   q quit",
        state.bricks.len()
    )?;
    stdout.flush()
}

fn show_game_over(stdout: &mut io::Stdout) -> io::Result<()> {
    let (width, height) = size()?;
    let message = "GAME OVER - press any key";
    let x = (width / 2).saturating_sub(message.len() as u16 / 2);
    execute!(stdout, MoveTo(x, height / 2))?;
    write!(stdout, "{}", message)?;
    stdout.flush()?;

    let _ = event::read()?;
    Ok(())
}
