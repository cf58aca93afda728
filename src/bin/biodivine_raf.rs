use biodivine_algo_raf::caf::find_caf;
use biodivine_algo_raf::enumeration::{AllRafs, AllStrictRafs};
use biodivine_algo_raf::io::read_network;
use biodivine_algo_raf::model::ReactionSet;
use biodivine_algo_raf::persistent::{
    persistent_exact, persistent_leave_one_out, persistent_poly,
};
use biodivine_algo_raf::raf::{max_raf, strict_max_raf};
use cancel_this::Cancellable;
use clap::Parser;
use computation_process::Stateful;
use env_logger::Builder;
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "biodivine_raf")]
#[command(about = "Detect reflexively autocatalytic food-generated sets in a reaction network")]
struct Args {
    /// Path to a reaction network file (.crs)
    #[arg(value_name = "FILE")]
    file: String,

    /// Analysis to perform
    #[arg(long, default_value = "max-raf", require_equals = true)]
    algorithm: Algorithm,

    /// Method used by `--algorithm=persistent`
    #[arg(long, default_value = "poly", require_equals = true)]
    persistent_method: PersistentMethod,

    /// Require catalysis by at least one non-food agent (applies to max-raf and all-rafs)
    #[arg(long)]
    strict: bool,

    /// Number of RAFs to enumerate with `--algorithm=all-rafs` (0 = all)
    #[arg(long, default_value_t = 0, require_equals = true)]
    count: usize,

    /// Logging verbosity (use -v for info, or -v=LEVEL for specific level)
    #[arg(long, short = 'v', value_name = "LEVEL", num_args = 0..=1, default_missing_value = "info", require_equals = true)]
    verbose: Option<Option<LogLevel>>,
}

#[derive(Clone, clap::ValueEnum)]
enum Algorithm {
    #[value(name = "max-raf")]
    MaxRaf,
    #[value(name = "all-rafs")]
    AllRafs,
    #[value(name = "persistent")]
    Persistent,
    #[value(name = "caf")]
    Caf,
}

#[derive(Clone, clap::ValueEnum)]
enum PersistentMethod {
    Exact,
    Poly,
    #[value(name = "leave-one-out")]
    LeaveOneOut,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
        }
    }
}

fn print_reactions(title: &str, reactions: &ReactionSet) {
    println!("{} ({} reactions):", title, reactions.len());
    for reaction in reactions {
        println!("  {}", reaction);
    }
}

fn enumerate_rafs<G>(generator: G, count: usize) -> usize
where
    G: Iterator<Item = Cancellable<ReactionSet>>,
{
    let mut enumerated = 0;
    for result in generator {
        match result {
            Ok(raf) => {
                enumerated += 1;
                println!("RAF #{}: {:?}", enumerated, raf.labels());
                if count > 0 && enumerated >= count {
                    break;
                }
            }
            Err(e) => {
                eprintln!("Error during RAF enumeration: {}", e);
                break;
            }
        }
    }
    enumerated
}

fn main() {
    let args = Args::parse();

    // None = not specified, Some(None) = `-v` without value, Some(Some(level)) = `-v=level`.
    let log_level = match args.verbose {
        None => LevelFilter::Off,
        Some(None) => LevelFilter::Info,
        Some(Some(level)) => level.into(),
    };
    Builder::from_default_env().filter_level(log_level).init();

    let network = read_network(&args.file).unwrap_or_else(|e| {
        eprintln!("Failed to load reaction network {}: {}", args.file, e);
        std::process::exit(1);
    });

    println!(
        "Loaded network with {} reactions and {} food agents.",
        network.reactions.len(),
        network.food_set.len()
    );

    let reactions = &network.reactions;
    let food = &network.food_set;
    let result = match args.algorithm {
        Algorithm::MaxRaf if args.strict => strict_max_raf(reactions, food)
            .map(|raf| print_reactions("Maximal strictly autocatalytic RAF", &raf)),
        Algorithm::MaxRaf => {
            max_raf(reactions, food).map(|raf| print_reactions("Maximal RAF", &raf))
        }
        Algorithm::AllRafs => {
            let enumerated = if args.strict {
                enumerate_rafs(AllStrictRafs::configure(&network, &network), args.count)
            } else {
                enumerate_rafs(AllRafs::configure(&network, &network), args.count)
            };
            if args.count == 0 {
                println!("Total RAFs enumerated: {}", enumerated);
            } else {
                println!("Enumerated first {} RAFs", enumerated);
            }
            Ok(())
        }
        Algorithm::Persistent => {
            let persistent = match args.persistent_method {
                PersistentMethod::Exact => persistent_exact(reactions, food),
                PersistentMethod::Poly => persistent_poly(reactions, food),
                PersistentMethod::LeaveOneOut => persistent_leave_one_out(reactions, food),
            };
            persistent.map(|it| print_reactions("Persistent reactions", &it))
        }
        Algorithm::Caf => {
            match find_caf(&network) {
                Some(reaction) => println!("CAF exists: {}", reaction),
                None => println!("No CAF found."),
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Computation cancelled: {}", e);
        std::process::exit(1);
    }
}
