use anyhow::{bail, Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use othebot::board::{Board, Side};
use othebot::perft::perft;
use othebot::search::{EvalMode, SearchParams, Searcher};
use othebot::selfplay::{play_many_with, SelfPlayParams, DEFAULT_MAX_PLIES};
use othebot::Strategy;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Reversi engine driver: self-play, analysis and perft", long_about = None)]
struct Args {
    /// Operation mode: 'selfplay', 'analyse' or 'perft'
    #[arg(long, default_value = "selfplay")]
    mode: String,

    /// Black strategy: 'negamax', 'greedy', 'random' or 'first'
    #[arg(long, default_value = "negamax")]
    black: String,

    /// White strategy: 'negamax', 'greedy', 'random' or 'first'
    #[arg(long, default_value = "greedy")]
    white: String,

    /// Search depth in plies
    #[arg(long, default_value_t = 4)]
    depth: u32,

    /// Reduced validation mode (depth 2, disc differential leaves)
    #[arg(long)]
    validation: bool,

    /// Disable alpha-beta pruning (full-width search)
    #[arg(long)]
    no_pruning: bool,

    /// Number of self-play games
    #[arg(long, default_value_t = 1)]
    games: usize,

    /// Ply cap per game
    #[arg(long, default_value_t = DEFAULT_MAX_PLIES)]
    max_plies: usize,

    /// Seed for random players
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Worker threads for parallel self-play
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Emit one JSON record per game instead of a summary
    #[arg(long)]
    json: bool,

    /// 64-cell layout ('b', 'w', '.') for analyse/perft; defaults to the opening
    #[arg(long)]
    board: Option<String>,

    /// Side to move for analyse/perft: 'b' or 'w'
    #[arg(long, default_value = "b")]
    side: String,
}

fn parse_side(s: &str) -> Result<Side> {
    match s.to_lowercase().as_str() {
        "b" | "black" => Ok(Side::Black),
        "w" | "white" => Ok(Side::White),
        _ => bail!("Invalid side: use 'b' or 'w'"),
    }
}

fn search_params(args: &Args) -> SearchParams {
    let mut p = if args.validation { SearchParams::validation() } else { SearchParams { depth: args.depth, ..SearchParams::default() } };
    p.use_alpha_beta = !args.no_pruning;
    p
}

fn parse_strategy(s: &str, args: &Args) -> Result<Strategy> {
    match s.to_lowercase().as_str() {
        "negamax" | "n" => Ok(Strategy::Negamax(search_params(args))),
        "greedy" | "g" => Ok(Strategy::Greedy),
        "random" | "r" => Ok(Strategy::Random { seed: args.seed }),
        "first" | "f" => Ok(Strategy::First),
        _ => bail!("Invalid strategy '{s}': use 'negamax', 'greedy', 'random' or 'first'"),
    }
}

fn load_board(args: &Args) -> Result<Board> {
    match args.board.as_deref() {
        Some(layout) => Board::from_cells(layout).context("parsing --board"),
        None => Ok(Board::new()),
    }
}

fn run_selfplay(args: &Args) -> Result<()> {
    let params = SelfPlayParams {
        games: args.games,
        max_plies: args.max_plies,
        black: parse_strategy(&args.black, args)?,
        white: parse_strategy(&args.white, args)?,
        seed: args.seed,
    };
    let pb = ProgressBar::new(args.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games {elapsed}").context("progress template")?);

    let t0 = Instant::now();
    let records = play_many_with(&params, |_| pb.inc(1))?;
    pb.finish_and_clear();

    if args.json {
        for r in &records { println!("{}", serde_json::to_string(r)?); }
        return Ok(());
    }
    let (mut b, mut w, mut d) = (0, 0, 0);
    for r in &records {
        match r.winner { Some(Side::Black) => b += 1, Some(Side::White) => w += 1, None => d += 1 }
    }
    println!("games={} black_wins={} white_wins={} draws={} elapsed={:.2}s", records.len(), b, w, d, t0.elapsed().as_secs_f64());
    Ok(())
}

fn run_analyse(args: &Args) -> Result<()> {
    let board = load_board(args)?;
    let side = parse_side(&args.side)?;
    println!("{board}");
    let params = search_params(args);
    let t0 = Instant::now();
    let res = Searcher::new().search(&board, side, params);
    let eval = match params.eval { EvalMode::Heuristic => "heuristic", EvalMode::CoinParity => "coins" };
    println!(
        "bestmove={} score={:.1} eval={} nodes={} elapsed={:.3}s",
        res.best_move.map_or_else(|| "pass".to_string(), |m| m.to_string()),
        res.score, eval, res.nodes, t0.elapsed().as_secs_f64()
    );
    Ok(())
}

fn run_perft(args: &Args) -> Result<()> {
    let board = load_board(args)?;
    let side = parse_side(&args.side)?;
    for d in 1..=args.depth {
        let t0 = Instant::now();
        let n = perft(&board, side, d);
        println!("perft({d}) = {n} ({:.3}s)", t0.elapsed().as_secs_f64());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.threads > 1 {
        rayon::ThreadPoolBuilder::new().num_threads(args.threads).build_global().context("building thread pool")?;
    }
    match args.mode.as_str() {
        "selfplay" => run_selfplay(&args),
        "analyse" | "analyze" => run_analyse(&args),
        "perft" => run_perft(&args),
        other => bail!("Invalid mode '{other}': use 'selfplay', 'analyse' or 'perft'"),
    }
}
