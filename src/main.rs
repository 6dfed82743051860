//! Dragon Flight entry point
//!
//! The browser build is driven from the page through `platform::web`. The
//! native binary runs headless rounds flown by the autopilot, which is handy
//! for soak-testing balance changes and seeding a local high score file.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Result, bail};
    use clap::Parser;

    use dragon_flight::autopilot::Autopilot;
    use dragon_flight::highscores::format_date;
    use dragon_flight::persistence::{FileStore, MemoryStore, ScoreStore};
    use dragon_flight::sim::{GameEvent, GamePhase, TickInput, Viewport};
    use dragon_flight::{Session, Tuning};

    #[derive(Parser)]
    #[command(name = "dragon-flight")]
    #[command(about = "Fly headless Dragon Flight rounds with the autopilot")]
    struct Args {
        /// Run seed (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,

        /// Frame limit per round
        #[arg(long, default_value_t = 3600)]
        frames: u32,

        /// Rounds to play back to back
        #[arg(long, default_value_t = 1)]
        rounds: u32,

        #[arg(long, default_value_t = 1280.0)]
        width: f32,

        #[arg(long, default_value_t = 720.0)]
        height: f32,

        /// JSON balance overrides
        #[arg(long)]
        tuning: Option<PathBuf>,

        /// High score file (kept in memory when omitted)
        #[arg(long)]
        scores: Option<PathBuf>,
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let args = Args::parse();

        if args.frames == 0 {
            bail!("--frames must be > 0");
        }

        let tuning = match &args.tuning {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };
        let seed = args.seed.unwrap_or_else(dragon_flight::platform::clock_seed);
        let viewport = Viewport::new(args.width, args.height);
        log::info!("Dragon Flight (native) seed {} viewport {}x{}", seed, args.width, args.height);

        match &args.scores {
            Some(path) => fly(Session::new(FileStore::new(path), viewport, seed, tuning), &args),
            None => fly(Session::new(MemoryStore::new(), viewport, seed, tuning), &args),
        }
    }

    fn fly<S: ScoreStore>(mut session: Session<S>, args: &Args) -> Result<()> {
        let pilot = Autopilot::new();

        for round in 1..=args.rounds {
            session.step(&TickInput {
                start: true,
                ..Default::default()
            });

            let mut frames = 1u32;
            let mut kills = 0u32;
            while session.phase() == GamePhase::Playing && frames < args.frames {
                let input = pilot.next_input(session.world());
                session.step(&input);
                kills += session
                    .last_events()
                    .iter()
                    .filter(|e| matches!(e, GameEvent::HostileDestroyed { .. }))
                    .count() as u32;
                frames += 1;
            }

            let world = session.world();
            let survived = world.phase == GamePhase::Playing;
            let outcome = if survived { "survived" } else { "shot down" };
            println!(
                "Round {round}: {outcome} after {frames} frames, score {} ({kills} kills, {} lives left)",
                world.score, world.lives
            );
            // A round still in the air can't be restarted
            if survived && round < args.rounds {
                println!("Frame limit reached mid-round, skipping the remaining rounds");
                break;
            }
        }

        let table = session.high_scores();
        println!();
        if table.is_empty() {
            println!("No high scores yet");
        } else {
            println!("=== HIGH SCORES ===");
            for (rank, entry) in table.entries.iter().enumerate() {
                println!("  {}. {:>6}  {}", rank + 1, entry.score, format_date(&entry.date));
            }
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::init, this is just to satisfy the compiler
}
