use anyhow::Result;
use clap::Parser;
use cozy_chess::{Color, Move};
use prunebot::selfplay::{play_game, GameOutcome};
use prunebot::{EngineConfig, GameBoard, MoveSelector, Position, Strategy};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess against the PruneBot search engine", long_about = None)]
struct Args {
    /// Operation mode: 'h' for human vs bot, 's' for bot vs bot
    #[arg(long, default_value = "h")]
    mode: String,

    /// Your color: 'w' for white, 'b' for black
    #[arg(long, default_value = "w")]
    color: String,

    /// Move selection strategy (overrides the config file)
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// JSON engine config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the random strategy (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop a bot-vs-bot game after this many plies
    #[arg(long, default_value_t = 300)]
    max_plies: usize,

    /// Starting FEN position
    #[arg(long)]
    fen: Option<String>,
}

fn parse_color(color_str: &str) -> Result<Color> {
    match color_str.to_lowercase().as_str() {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        _ => anyhow::bail!("Invalid color: use 'w' or 'b'"),
    }
}

fn get_human_move(board: &GameBoard) -> Result<Move> {
    loop {
        print!("Enter your move (e.g., e2e4): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 { anyhow::bail!("stdin closed"); }
        match board.find_move(input.trim()) {
            Ok(mv) => return Ok(mv),
            Err(e) => println!("{e}"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mode = args.mode.chars().next().unwrap_or('h');
    let human_color = parse_color(&args.color)?;

    let mut cfg = match args.config.as_deref() {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(s) = args.strategy { cfg.strategy = s; }
    if let Some(seed) = args.seed { cfg.seed = seed; }

    let mut board = match args.fen.as_deref() {
        Some(fen) => GameBoard::from_fen(fen)?,
        None => GameBoard::startpos(),
    };

    if mode == 's' {
        let mut white = MoveSelector::from_config(&cfg);
        let mut black = MoveSelector::from_config(&EngineConfig { seed: cfg.seed.wrapping_add(1), ..cfg.clone() });
        let t0 = Instant::now();
        let record = play_game(&mut board, &mut white, &mut black, args.max_plies)?;
        println!("{}", record.moves.join(" "));
        println!("\n{board}");
        match record.outcome {
            Some(o) => println!("\nGame over! {o}"),
            None => println!("\nStopped after {} plies.", record.moves.len()),
        }
        println!("Elapsed: {:.3}s", t0.elapsed().as_secs_f64());
        return Ok(());
    }

    let mut bot = MoveSelector::from_config(&cfg);
    loop {
        println!("\n{board}");
        if let Some(outcome) = GameOutcome::of(&board) {
            println!("\nGame over! {outcome}");
            break;
        }

        let side = board.side_to_move();
        println!("\n{}'s turn", if side == Color::White { "White" } else { "Black" });
        if side == human_color {
            let mv = get_human_move(&board)?;
            board.make_move(mv);
            continue;
        }

        let t0 = Instant::now();
        let Some(mv) = bot.select_move(&mut board, side)? else {
            println!("No legal moves available!");
            break;
        };
        println!("Computer plays: {} ({:?}, {:.3}s)", board.uci(mv), bot.strategy(), t0.elapsed().as_secs_f64());
        if let Some(v) = bot.last_value() { println!("Expected result: {v}, nodes: {}", bot.nodes()); }
        board.make_move(mv);
    }

    Ok(())
}
