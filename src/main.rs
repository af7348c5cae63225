use clap::Parser;
use console_chess::console::{self, MoveScript};
use console_chess::game_logic::Rules;

#[derive(Parser, Debug)]
#[command(name = "console-chess", about = "Two-player chess on the terminal")]
struct Args {
    /// Standard move legality: no moving into check, no castling through check
    #[arg(long)]
    strict: bool,

    /// Reject moves that leave the mover's own king attacked
    #[arg(long)]
    forbid_self_check: bool,

    /// Reject castling out of, through, or into an attacked square
    #[arg(long)]
    safe_castling: bool,

    /// Moves to play before the first prompt, e.g. "e2e4 e7e5"
    #[arg(long, default_value = "")]
    moves: String,
}

impl Args {
    fn rules(&self) -> Rules {
        let base = if self.strict {
            Rules::strict()
        } else {
            Rules::classic()
        };
        Rules {
            forbid_self_check: base.forbid_self_check || self.forbid_self_check,
            castling_requires_safe_path: base.castling_requires_safe_path || self.safe_castling,
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let opening = match MoveScript::parse(&args.moves) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let rules = args.rules();
    log::info!("starting game with {rules:?}");
    if let Err(e) = console::run_interactive_terminal(rules, opening) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
