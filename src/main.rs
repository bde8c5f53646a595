mod input;
mod ui;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flapper::core::constants::{MAX_FRAME_MS, SCORE_FILE_NAME};
use flapper::core::game::{Game, GameEvent, InputEvent, InputSource};
use flapper::core::spawner::SpawnTimer;
use flapper::utils::build_info;
use flapper::utils::logging;
use flapper::utils::persistence::{self, ScoreFile, ScoreStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Options for a normal run.
#[derive(Debug, Default, PartialEq)]
struct RunOptions {
    config_path: Option<PathBuf>,
    score_path: Option<PathBuf>,
    seed: Option<u64>,
    /// Write the effective settings here and exit.
    write_config: Option<PathBuf>,
}

#[derive(Debug, PartialEq)]
enum Command {
    Run(RunOptions),
    Help,
    Version,
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = RunOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--config" => {
                let path = iter.next().ok_or("--config needs a path")?;
                options.config_path = Some(PathBuf::from(path));
            }
            "--score-file" => {
                let path = iter.next().ok_or("--score-file needs a path")?;
                options.score_path = Some(PathBuf::from(path));
            }
            "--write-config" => {
                let path = iter.next().ok_or("--write-config needs a path")?;
                options.write_config = Some(PathBuf::from(path));
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a number")?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(Command::Run(options))
}

fn print_help() {
    println!("Flapper - Terminal Flappy Bird\n");
    println!("Usage: flapper [options]\n");
    println!("Options:");
    println!("  --config <path>      Read settings from a JSON file");
    println!("                       (default ~/.flapper/config.json)");
    println!("  --score-file <path>  Where the high score is kept");
    println!("                       (default ~/.flapper/score.txt)");
    println!("  --seed <n>           Seed the pipe generator");
    println!("  --write-config <path>");
    println!("                       Save the effective settings as JSON and exit");
    println!("  --version            Show version information");
    println!("  --help               Show this help message\n");
    println!("Controls: Space/Up/Enter/W or left click to flap, Esc/Q to quit.");
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Version) => {
            println!("{}", build_info::version_string());
            std::process::exit(0);
        }
        Ok(Command::Help) => {
            print_help();
            std::process::exit(0);
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'flapper --help' for usage.");
            std::process::exit(1);
        }
    };

    logging::init();

    let config = match options.config_path {
        Some(path) => persistence::load_config(&path),
        None => match persistence::default_config_path() {
            Ok(path) => persistence::load_config(&path),
            Err(e) => {
                log::warn!("No config directory ({}), using defaults", e);
                Default::default()
            }
        },
    };
    config.validate()?;

    if let Some(path) = options.write_config {
        persistence::save_config(&path, &config)?;
        println!("Wrote settings to {}", path.display());
        return Ok(());
    }

    let store = match options.score_path {
        Some(path) => ScoreFile::new(path),
        None => ScoreFile::default_location().unwrap_or_else(|e| {
            log::warn!("No data directory ({}), keeping score in ./{}", e, SCORE_FILE_NAME);
            ScoreFile::new(SCORE_FILE_NAME)
        }),
    };
    log::info!("High score file: {}", store.path().display());

    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let sound = config.sound;
    let mut game = Game::new(config, store, rng);

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            let mut stdout = io::stdout();
            first_error([
                disable_raw_mode(),
                stdout.execute(DisableMouseCapture).map(|_| ()),
                stdout.execute(LeaveAlternateScreen).map(|_| ()),
            ])
            .ok();
            return Err(e);
        }
    };

    let result = run(&mut terminal, &mut game, sound);
    let restored = restore_terminal(&mut terminal);

    if let Err(e) = &result {
        log::error!("Game loop failed: {}", e);
    }
    result?;
    restored?;

    println!("Best score: {}", game.session().high_score);
    Ok(())
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

/// Undo `setup_terminal`. Every step runs even if an earlier one failed.
fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    first_error([
        disable_raw_mode(),
        terminal
            .backend_mut()
            .execute(LeaveAlternateScreen)
            .map(|_| ()),
        terminal.backend_mut().execute(DisableMouseCapture).map(|_| ()),
        terminal.show_cursor(),
    ])
}

/// The first failure among already-run steps, if any.
fn first_error<const N: usize>(results: [io::Result<()>; N]) -> io::Result<()> {
    results.into_iter().collect()
}

/// Fixed-rate frame loop: collect input, fire spawn signals, run one frame,
/// draw, sleep until the next frame boundary.
fn run<S: ScoreStore, R: Rng>(
    terminal: &mut Tui,
    game: &mut Game<S, R>,
    sound: bool,
) -> io::Result<()> {
    let frame_interval = game.session().config.tick_interval();
    let mut spawn_timer = SpawnTimer::new(game.session().config.spawn_interval());
    let max_frame = Duration::from_millis(MAX_FRAME_MS);
    let mut last_frame = Instant::now();

    log::debug!("cue: intro");

    loop {
        let frame_start = Instant::now();
        // Clamp so a suspended process does not fast-forward the spawner.
        let elapsed = frame_start.duration_since(last_frame).min(max_frame);
        last_frame = frame_start;

        let mut inputs = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Some(input) = input::map_event(&event::read()?) {
                inputs.push(input);
            }
        }
        for _ in 0..spawn_timer.advance(elapsed) {
            inputs.push(InputEvent::SpawnTick);
        }

        let frame = game.run_frame(inputs);
        for event in &frame.events {
            play_cue(event, sound)?;
        }
        if frame.quit {
            log::info!("Quit with best score {}", game.session().high_score);
            return Ok(());
        }

        let snapshot = game.snapshot();
        terminal.draw(|f| ui::draw_ui(f, &snapshot))?;

        let spent = frame_start.elapsed();
        if spent < frame_interval {
            std::thread::sleep(frame_interval - spent);
        }
    }
}

/// Audio cues. The terminal only has a bell, so that is used for the crash;
/// the rest are logged.
fn play_cue(event: &GameEvent, sound: bool) -> io::Result<()> {
    match event {
        GameEvent::Started => log::debug!("cue: start"),
        GameEvent::Flapped {
            source: InputSource::Keyboard,
        } => log::debug!("cue: flap"),
        GameEvent::Crashed { .. } if sound => {
            let mut out = io::stdout();
            out.write_all(b"\x07")?;
            out.flush()?;
        }
        _ => {}
    }
    Ok(())
}
