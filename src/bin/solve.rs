//! Solve Binary
//!
//! Solves one choice allocation game and prints an optimal line of play.
//!
//! Options: --choices, --opponent, --sequence, --random, --repeats, --latest, --json
use choicegame::*;
use clap::Parser;
use colored::Colorize;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "solve", about = "Solve a two-player choice allocation game")]
struct Args {
    /// Pool of the player who moves first, e.g. `1,2`
    #[arg(long, required_unless_present = "random")]
    choices: Option<Pool>,
    /// Pool of the player who moves second, e.g. `2,2`
    #[arg(long, default_value = "")]
    opponent: Pool,
    /// Payoff sequence, e.g. `1,1,-20,1,1`; padded with zeros as needed
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    sequence: Vec<Utility>,
    /// Ignore the pool arguments and solve a random game
    #[arg(long, conflicts_with_all = ["choices", "sequence"])]
    random: bool,
    /// Admit repeated values within a pool
    #[arg(long)]
    repeats: bool,
    /// Let later moves win ties instead of earlier ones
    #[arg(long)]
    latest: bool,
    /// Print a JSON report instead of a table
    #[arg(long)]
    json: bool,
    /// Log cache statistics at debug level
    #[arg(long, short)]
    verbose: bool,
}

impl Args {
    fn rules(&self) -> Rules {
        Rules::default()
            .with_repeats(self.repeats)
            .with_tiebreak(match self.latest {
                true => TieBreak::Latest,
                false => TieBreak::Earliest,
            })
    }
    fn solver(&self) -> anyhow::Result<GameSolver<Utility>> {
        let (root, sequence) = match (self.random, &self.choices) {
            (true, _) => (GameState::random(), Sequence::<Utility>::random().values().to_vec()),
            (false, Some(choices)) => (
                GameState::root(choices.clone(), self.opponent.clone()),
                self.sequence.clone(),
            ),
            (false, None) => anyhow::bail!("--choices is required unless --random is given"),
        };
        Ok(GameSolver::from_parts(root, sequence, self.rules())?)
    }
}

#[derive(Serialize)]
struct Report<'game> {
    root: &'game GameState,
    sequence: &'game [Utility],
    trace: &'game [Choice],
    turns: Vec<Turn<Utility>>,
    payoffs: Payoffs<Utility>,
    stats: Stats,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    choicegame::log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    });
    let mut solver = args.solver()?;
    log::info!("solving {}", solver.root());
    let trace = solver.find_optimal()?;
    let payoffs = solver.payoffs()?;
    let turns = solver.replay(&trace)?.collect::<Vec<_>>();
    log::info!("{}", solver.stats());
    if args.json {
        let report = Report {
            root: solver.root(),
            sequence: solver.sequence().values(),
            trace: &trace,
            turns,
            payoffs,
            stats: solver.stats(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    println!("{:<10}{:?}", "trace", trace);
    for (i, turn) in turns.iter().enumerate() {
        let player = match turn.player {
            Player::First => turn.player.to_string().cyan(),
            Player::Second => turn.player.to_string().magenta(),
        };
        println!(
            "{:<10}{:<10}{:<12}{:<12}",
            format!("turn {}", i + 1),
            player,
            format!("choose {}", turn.choice),
            format!("payoff {}", turn.payoff),
        );
    }
    println!(
        "{:<10}{} {}  {} {}",
        "totals",
        Player::First.to_string().cyan(),
        payoffs.active(),
        Player::Second.to_string().magenta(),
        payoffs.waiting(),
    );
    Ok(())
}
