//! # Delve Command Line Entry Point
//!
//! Generates a dungeon, optionally replays a walk through it, and prints the
//! result as ASCII or JSON.

use clap::Parser;
use delve::generation::utils;
use delve::{
    try_move, DelveResult, Direction, Dungeon, DungeonGenerator, GenerationConfig, Generator,
    Player, RandomSource,
};
#[cfg(not(feature = "dev-tools"))]
use log::{error, info, warn};
use std::path::PathBuf;
#[cfg(feature = "dev-tools")]
use tracing::{error, info, warn, Level};

/// Command line arguments for the dungeon generator.
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(about = "Procedural room-and-corridor dungeon generator")]
#[command(version)]
struct Args {
    /// JSON configuration file; command line values override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed for dungeon generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Map width in tiles
    #[arg(long)]
    width: Option<u32>,

    /// Map height in tiles
    #[arg(long)]
    height: Option<u32>,

    /// Number of rooms to try to place
    #[arg(short, long)]
    rooms: Option<u32>,

    /// Minimum room side length
    #[arg(long)]
    min_room_size: Option<u32>,

    /// Maximum room side length
    #[arg(long)]
    max_room_size: Option<u32>,

    /// Maximum number of room placement tries
    #[arg(long)]
    attempt_cap: Option<u32>,

    /// Moves to replay from the start room (n/s/e/w or h/j/k/l)
    #[arg(short, long, value_parser = parse_walk)]
    walk: Option<Walk>,

    /// Print the dungeon as JSON instead of ASCII
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// A parsed sequence of movement keys.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Walk(Vec<Direction>);

/// Parses `--walk`, rejecting unknown keys before anything is generated.
fn parse_walk(keys: &str) -> Result<Walk, String> {
    keys.chars()
        .filter(|c| !c.is_whitespace())
        .map(|key| {
            Direction::from_key(key).ok_or_else(|| format!("unknown movement key '{}'", key))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Walk)
}

impl Args {
    /// Builds the generation config from the file (if any) and the flags.
    fn generation_config(&self) -> DelveResult<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::load(path)?,
            None => GenerationConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(rooms) = self.rooms {
            config.room_count = rooms;
        }
        if let Some(min_room_size) = self.min_room_size {
            config.min_room_size = min_room_size;
        }
        if let Some(max_room_size) = self.max_room_size {
            config.max_room_size = max_room_size;
        }
        if let Some(attempt_cap) = self.attempt_cap {
            config.attempt_cap = attempt_cap;
        }

        Ok(config)
    }
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    initialize_logging(&args.log_level);

    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("delve: {}", e);
        std::process::exit(1);
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .init();
    }
}

fn run(args: &Args) -> DelveResult<()> {
    let config = args.generation_config()?;
    info!("Starting delve v{} with seed {}", delve::VERSION, config.seed);

    let mut rng = utils::create_rng(&config);
    let dungeon = generate_dungeon(&config, &mut rng)?;

    let player = match &args.walk {
        Some(Walk(moves)) => Player::spawn(&dungeon).map(|start| walk(&dungeon, start, moves)),
        None => Player::spawn(&dungeon),
    };

    if args.json {
        println!("{}", dungeon.to_json()?);
    } else {
        println!("{}", render(&dungeon, player));
        if let Some(player) = player {
            println!(
                "rooms: {}  player: ({}, {})",
                dungeon.rooms.len(),
                player.position.x,
                player.position.y
            );
        }
    }

    Ok(())
}

/// Generates and validates a dungeon.
fn generate_dungeon(config: &GenerationConfig, rng: &mut dyn RandomSource) -> DelveResult<Dungeon> {
    let generator = DungeonGenerator::new();
    let dungeon = generator.generate(config, rng)?;
    generator.validate(&dungeon, config)?;

    if dungeon.rooms.len() < config.room_count as usize {
        info!(
            "Placed {} of {} requested rooms",
            dungeon.rooms.len(),
            config.room_count
        );
    }

    Ok(dungeon)
}

/// Replays a sequence of moves from the start position.
fn walk(dungeon: &Dungeon, start: Player, moves: &[Direction]) -> Player {
    let mut player = start;
    for &direction in moves {
        let moved = try_move(&dungeon.grid, player, direction);
        if moved == player {
            warn!("Move {:?} from {:?} is blocked", direction, player.position);
        }
        player = moved;
    }
    player
}

/// Renders the grid with `@` at the player.
fn render(dungeon: &Dungeon, player: Option<Player>) -> String {
    dungeon
        .grid
        .rows()
        .enumerate()
        .map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(|(x, tile)| match player {
                    Some(p) if p.position.x == x as i32 && p.position.y == y as i32 => '@',
                    _ => tile.glyph(),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
