use relang::{Automaton, Flags, LabeledGraph, Regex};
use std::{error::Error, fs, path::PathBuf};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "relang-tool")]
struct Opt {
    /// Build the automaton from this regular expression.
    #[structopt(long, short, required_unless = "graph", conflicts_with = "graph")]
    regex: Option<String>,

    /// Load the automaton from a labeled graph in JSON.
    #[structopt(long, short)]
    graph: Option<PathBuf>,

    /// The transformation flags.
    #[structopt(long, short, parse(from_str = Flags::from))]
    flags: Option<Flags>,

    /// Remove epsilon transitions.
    #[structopt(long)]
    remove_epsilon: bool,

    /// Determinize by subset construction.
    #[structopt(long)]
    determinize: bool,

    /// Minimize.
    #[structopt(long)]
    minimize: bool,

    /// Complete with a sink state.
    #[structopt(long)]
    complete: bool,

    /// Synthesize a regex from the final automaton and print it.
    #[structopt(long)]
    to_regex: bool,

    /// Dump the parsed regex AST to stdout.
    #[structopt(long)]
    dump_ast: bool,

    /// Dump the automaton after each transformation to stdout.
    #[structopt(long)]
    dump_phases: bool,

    /// Print the final automaton as a labeled graph in JSON.
    #[structopt(long)]
    emit_graph: bool,

    /// Log transformation details.
    #[structopt(long, short)]
    verbose: bool,

    /// Words to test for acceptance; `&` is the empty word.
    inputs: Vec<String>,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn load_automaton(args: &Opt) -> Result<Automaton, Box<dyn Error>> {
    if let Some(ref path) = args.graph {
        let contents = fs::read_to_string(path).map_err(|err| format!("{}: {}", err, path.display()))?;
        let graph: LabeledGraph = serde_json::from_str(&contents)?;
        return Ok(relang::to_automaton(&graph)?);
    }
    let pattern = args.regex.as_deref().unwrap_or_default();
    let re: Regex = pattern.parse()?;
    if args.dump_ast {
        println!("AST:\n{}", re.to_tree_string());
    }
    Ok(relang::from_regex(&re))
}

fn dump_phase(args: &Opt, name: &str, nfa: &Automaton) {
    if args.dump_phases {
        println!("{}:\n{}\n", name, nfa.to_readable_string());
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Opt::from_args();
    init_tracing(args.verbose);

    let flags = args.flags.unwrap_or_default();
    let mut nfa = load_automaton(&args)?;
    dump_phase(&args, "Input", &nfa);

    if args.remove_epsilon {
        nfa = relang::remove_epsilon(nfa);
        dump_phase(&args, "Without epsilon", &nfa);
    }
    if args.determinize {
        nfa = relang::determinize(&nfa);
        dump_phase(&args, "Determinized", &nfa);
    }
    if args.minimize {
        nfa = relang::minimize(&nfa, flags);
        dump_phase(&args, "Minimized", &nfa);
    }
    if args.complete {
        nfa = relang::complete(nfa);
        dump_phase(&args, "Completed", &nfa);
    }
    tracing::info!(states = nfa.num_states(), "automaton ready");

    if args.to_regex {
        println!("Regex: {}", relang::to_regex(&nfa, flags)?);
    }
    if args.emit_graph {
        let graph = relang::to_labeled_graph(&nfa);
        println!("{}", serde_json::to_string_pretty(&graph)?);
    }
    for input in &args.inputs {
        let verdict = if relang::is_accepted(&nfa, input) {
            "Accepted"
        } else {
            "Rejected"
        };
        println!("{}: {:?}", verdict, input);
    }
    Ok(())
}
