use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use propwash::audio::Audio;
use propwash::input::{self, PlaneInput};
use propwash::{ui, Game, RunState, Tuning, TICK_INTERVAL_MS};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut tuning = Tuning::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!("propwash {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Propwash - Terminal Side-Scrolling Plane Game\n");
                println!("Usage: propwash [options]\n");
                println!("Options:");
                println!("  --tuning <file>  Load gameplay tuning from a JSON file");
                println!("  --version        Show version information");
                println!("  --help           Show this help message");
                return Ok(());
            }
            "--tuning" => {
                let Some(path) = args.get(i + 1) else {
                    eprintln!("--tuning requires a file path");
                    std::process::exit(1);
                };
                match Tuning::load(Path::new(path)) {
                    Ok(t) => tuning = t,
                    Err(e) => {
                        eprintln!("Could not load tuning file {}: {}", path, e);
                        std::process::exit(1);
                    }
                }
                i += 1;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'propwash --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut game = Game::new(tuning);
    let mut rng = rand::thread_rng();
    let audio = Audio::new(); // None = run silently

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let frame_budget = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();

    // Main loop
    loop {
        terminal.draw(|f| {
            let area = f.size();
            ui::draw(f, area, &game);
        })?;

        for cue in game.take_sounds() {
            if let Some(audio) = &audio {
                audio.play(cue);
            }
        }

        let timeout = frame_budget.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                // Any key dismisses the crash overlay (no restart)
                if game.run_state == RunState::Ended {
                    break;
                }
                match input::map_key(key_event.code) {
                    PlaneInput::Quit => break,
                    other => input::process_input(&mut game, other),
                }
            }
        }

        let now = Instant::now();
        // Clamp dt so a suspended terminal does not explode the physics
        let dt = now.duration_since(last_tick).as_secs_f64().min(0.1);
        last_tick = now;
        game.tick(dt, &mut rng);
    }

    // Restore terminal
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
