use clap::Parser;
use crossterm::style::Stylize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use slider_astar::logging::setup_logging;
use slider_astar::{Board, Puzzle, Solvability, Solver, SolverConfig};

#[derive(Parser, Debug)]
#[command(name = "slider-astar", about = "Solve sliding-tile puzzles with A*")]
struct Args {
    /// Tiles in row-major order, 0 for the blank, e.g. "8 1 3 4 0 2 7 6 5"
    #[arg(short, long)]
    tiles: Option<String>,

    /// Side of the random board generated when no tiles are given
    #[arg(long, default_value_t = 3)]
    side: usize,

    /// Scramble with this many random moves instead of a full shuffle
    #[arg(long)]
    scramble: Option<usize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Decide solvability by searching the twin board in lock-step
    #[arg(long)]
    twin: bool,

    /// Print the solution as JSON
    #[arg(long)]
    json: bool,

    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let _logger = setup_logging(&args.log_level)?;

    let board = match &args.tiles {
        Some(tiles) => tiles.parse::<Board>()?,
        None => random_board(&args)?,
    };

    let solver = Solver::with_config(SolverConfig {
        solvability: if args.twin {
            Solvability::Twin
        } else {
            Solvability::Parity
        },
        ..SolverConfig::default()
    });

    log::info!("Solving:\n{}", board);
    let solution = solver.solve_with_stats(&board)?;
    let stats = solution.stats();
    log::info!(
        "Expanded {} nodes, generated {}, frontier peak {}",
        stats.expanded,
        stats.generated,
        stats.max_frontier
    );

    if args.json {
        println!("{}", serde_json::to_string(solution.path())?);
        return Ok(());
    }

    if !solution.is_solvable() {
        println!("unsolvable");
        return Ok(());
    }

    println!("Found optimal solution with: {} moves", solution.len());
    let path = solution.path();
    print_board(&path[0], None);
    for (movement, pair) in solution.moves().into_iter().zip(path.windows(2)) {
        println!("{}", movement);
        print_board(&pair[1], Some(pair[0].blank()));
    }

    Ok(())
}

fn random_board(args: &Args) -> Result<Board, Box<dyn std::error::Error>> {
    if args.side < 2 {
        return Err(format!("side must be at least 2, got {}", args.side).into());
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut puzzle = Puzzle::new(args.side);
    match args.scramble {
        Some(steps) => puzzle.scramble(&mut rng, steps),
        None => puzzle.shuffle(&mut rng),
    }
    Ok(puzzle.board())
}

/// Prints the grid with the blank dimmed and the tile that just moved highlighted.
fn print_board(board: &Board, moved: Option<usize>) {
    let width = (board.len() - 1).to_string().len();
    for (i, &val) in board.tiles().iter().enumerate() {
        let cell = format!("{:>width$}", val);
        if val == 0 {
            print!("{} ", cell.dark_grey());
        } else if Some(i) == moved {
            print!("{} ", cell.yellow().bold());
        } else {
            print!("{} ", cell);
        }
        if (i + 1) % board.side() == 0 {
            println!();
        }
    }
    println!();
}
