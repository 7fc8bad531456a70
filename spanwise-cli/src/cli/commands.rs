//! Command implementations and argument parsing for the spanwise CLI.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::iter;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use spanwise_core::{
    AdjacencyGraph, GraphError, MstAlgorithm, MstError, Orientation, SpanningTree, WeightedGraph,
    cross_validate, dot::write_dot,
};
use spanwise_providers_edgelist::{EdgeListError, EdgeListSource};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_MIN_WEIGHT: i64 = 1;
const DEFAULT_MAX_WEIGHT: i64 = 99;
const FALLBACK_GRAPH_NAME: &str = "graph";

type InputGraph = WeightedGraph<AdjacencyGraph<String>>;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanwise",
    about = "Compute minimum spanning trees with Kruskal, reverse-delete and Prim."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Weight each input graph and run all three algorithms on it.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Edge-list files to process, in order.
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Directory receiving the `.gv` and `.txt` outputs.
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Seed for the edge-weight generator. Graph `i` uses `seed + i`.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Smallest edge weight, inclusive.
    #[arg(long = "min-weight", default_value_t = DEFAULT_MIN_WEIGHT, allow_negative_numbers = true)]
    pub min_weight: i64,

    /// Largest edge weight, inclusive.
    #[arg(long = "max-weight", default_value_t = DEFAULT_MAX_WEIGHT, allow_negative_numbers = true)]
    pub max_weight: i64,

    /// Treat the inputs as directed graphs.
    #[arg(long)]
    pub directed: bool,

    /// Also write each weighted input graph as `{graph}.gv`.
    #[arg(long = "emit-input")]
    pub emit_input: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file could not be opened, created or written.
    #[error("i/o failure on `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// An input edge list could not be parsed.
    #[error("failed to read edge list `{path}`: {source}")]
    EdgeList {
        /// Input that failed to parse.
        path: PathBuf,
        /// Parser failure.
        #[source]
        source: EdgeListError,
    },
    /// A spanning tree computation failed.
    #[error(transparent)]
    Mst(#[from] MstError),
    /// Weighting the input graph failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// `--min-weight` exceeds `--max-weight`.
    #[error("weight range is empty: min {min} exceeds max {max}")]
    InvalidWeightRange {
        /// Requested minimum.
        min: i64,
        /// Requested maximum.
        max: i64,
    },
}

impl CliError {
    /// Returns a stable machine-readable code for the failure. Core errors
    /// report their own codes.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::EdgeList { .. } => "CLI_EDGE_LIST",
            Self::Mst(err) => err.code().as_str(),
            Self::Graph(err) => err.code().as_str(),
            Self::InvalidWeightRange { .. } => "CLI_INVALID_WEIGHT_RANGE",
        }
    }
}

/// Outcome of one processed graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSummary {
    /// Name used as the output file prefix.
    pub name: String,
    /// Number of nodes in the input.
    pub nodes: usize,
    /// Number of edges in the input.
    pub edges: usize,
    /// Total weights in [`MstAlgorithm::ALL`] order.
    pub totals: [f64; 3],
    /// Whether the totals agreed within tolerance.
    pub agrees: bool,
    /// Files written for this graph.
    pub files: Vec<PathBuf>,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionSummary {
    /// Directory the outputs were written to.
    pub output: PathBuf,
    /// Per-graph results in input order.
    pub graphs: Vec<GraphSummary>,
}

impl ExecutionSummary {
    /// Returns `true` when every graph's totals agreed.
    #[must_use]
    pub fn all_agree(&self) -> bool {
        self.graphs.iter().all(|graph| graph.agrees)
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, weighting, solving or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwise_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let input = dir.path().join("path.txt");
/// std::fs::write(&input, "a b\nb c\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         inputs: vec![input],
///         output: dir.path().join("out"),
///         seed: 7,
///         min_weight: 1,
///         max_weight: 9,
///         directed: false,
///         emit_input: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert!(summary.all_agree());
/// assert_eq!(summary.graphs[0].files.len(), 6);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(inputs = command.inputs.len(), seed = command.seed, orientation = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    if command.min_weight > command.max_weight {
        return Err(CliError::InvalidWeightRange {
            min: command.min_weight,
            max: command.max_weight,
        });
    }
    let orientation = if command.directed {
        Orientation::Directed
    } else {
        Orientation::Undirected
    };
    Span::current().record("orientation", field::debug(orientation));

    fs::create_dir_all(&command.output).map_err(|source| CliError::Io {
        path: command.output.clone(),
        source,
    })?;

    let names = derive_graph_names(&command.inputs);
    let mut graphs = Vec::with_capacity(command.inputs.len());
    for ((offset, path), name) in (0_u64..).zip(&command.inputs).zip(names) {
        let seed = command.seed.wrapping_add(offset);
        graphs.push(process_input(&command, path, name, seed, orientation)?);
    }

    let summary = ExecutionSummary {
        output: command.output,
        graphs,
    };
    info!(
        graphs = summary.graphs.len(),
        all_agree = summary.all_agree(),
        "command completed"
    );
    Ok(summary)
}

#[instrument(
    name = "cli.process_graph",
    err,
    skip(command, path),
    fields(path = %path.display(), nodes = field::Empty, edges = field::Empty),
)]
pub(super) fn process_input(
    command: &RunCommand,
    path: &Path,
    name: String,
    seed: u64,
    orientation: Orientation,
) -> Result<GraphSummary, CliError> {
    let reader = open_reader(path)?;
    let source = EdgeListSource::try_from_reader(name, reader, orientation)
        .map_err(|source| CliError::EdgeList {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let graph = WeightedGraph::from_unweighted(source.graph(), |_| {
        draw_weight(&mut rng, command.min_weight, command.max_weight)
    })?;
    let span = Span::current();
    span.record("nodes", graph.node_count());
    span.record("edges", graph.edge_count());

    let mut files = Vec::new();
    if command.emit_input {
        let target = command.output.join(format!("{}.gv", source.name()));
        write_graph(&graph, &target)?;
        files.push(target);
    }

    let report = cross_validate(&graph)?;
    let agrees = report.report();
    for tree in report.trees() {
        files.extend(write_tree(&command.output, source.name(), tree)?);
    }

    let totals = report.totals();
    let [kruskal, reverse_delete, prim] = totals;
    info!(
        graph = source.name(),
        kruskal,
        reverse_delete,
        prim,
        agrees,
        "graph processed"
    );
    Ok(GraphSummary {
        name: source.name().to_owned(),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        totals,
        agrees,
        files,
    })
}

#[expect(
    clippy::cast_precision_loss,
    reason = "weights are small integers drawn from a user-chosen range"
)]
fn draw_weight(rng: &mut SmallRng, min: i64, max: i64) -> f64 {
    rng.gen_range(min..=max) as f64
}

#[instrument(name = "cli.open_reader", err, skip(path), fields(path = %path.display()))]
pub(super) fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Writes the tree's DOT rendering and its total-weight file, returning
/// both paths.
fn write_tree(
    output: &Path,
    name: &str,
    tree: &SpanningTree<AdjacencyGraph<String>>,
) -> Result<[PathBuf; 2], CliError> {
    let algorithm = tree.algorithm();
    let stem = tree_stem(name, algorithm);
    let dot_path = output.join(format!("{stem}.gv"));
    let total_path = output.join(format!("{stem}.txt"));

    write_graph(tree.graph(), &dot_path)?;
    let contents = total_file_contents(name, algorithm, tree.total_weight());
    fs::write(&total_path, contents).map_err(|source| CliError::Io {
        path: total_path.clone(),
        source,
    })?;
    Ok([dot_path, total_path])
}

fn write_graph(graph: &InputGraph, path: &Path) -> Result<(), CliError> {
    let to_io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_io_error)?;
    write_dot(graph, BufWriter::new(file)).map_err(to_io_error)
}

/// The `.txt` report: a `{graph} {algorithm}` title line, then the total.
pub(super) fn total_file_contents(name: &str, algorithm: MstAlgorithm, total: f64) -> String {
    format!("{name} {}\nTOTAL_MST = {total:?}\n", algorithm.title())
}

fn tree_stem(name: &str, algorithm: MstAlgorithm) -> String {
    format!("{name}_{}", algorithm.as_str())
}

/// Every file stem a graph called `name` may write: `{name}` for the
/// emitted input and `{name}_{algorithm}` per algorithm.
fn output_stems(name: &str) -> Vec<String> {
    iter::once(name.to_owned())
        .chain(
            MstAlgorithm::ALL
                .into_iter()
                .map(|algorithm| tree_stem(name, algorithm)),
        )
        .collect()
}

/// Names each input after its file stem so that no two inputs write the
/// same file. A name whose outputs clash with an earlier input's gets `_2`,
/// `_3` and so on, skipping any suffix whose outputs a later input's own
/// stem would write.
pub(super) fn derive_graph_names(paths: &[PathBuf]) -> Vec<String> {
    let stems: Vec<String> = paths
        .iter()
        .map(|path| {
            path.file_stem()
                .and_then(|value| value.to_str())
                .filter(|stem| !stem.is_empty())
                .unwrap_or(FALLBACK_GRAPH_NAME)
                .to_owned()
        })
        .collect();

    let mut reserved: HashSet<String> = HashSet::new();
    let mut names = Vec::with_capacity(stems.len());
    for (index, stem) in stems.iter().enumerate() {
        let later: HashSet<String> = stems
            .get(index + 1..)
            .unwrap_or_default()
            .iter()
            .flat_map(|other| output_stems(other))
            .collect();
        let mut candidate = stem.clone();
        let mut suffix = 2_usize;
        loop {
            let outputs = output_stems(&candidate);
            let clashes_earlier = outputs.iter().any(|output| reserved.contains(output));
            let clashes_later = candidate != *stem && outputs.iter().any(|o| later.contains(o));
            if !clashes_earlier && !clashes_later {
                reserved.extend(outputs);
                break;
            }
            candidate = format!("{stem}_{suffix}");
            suffix += 1;
        }
        names.push(candidate);
    }
    names
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwise_cli::cli::{ExecutionSummary, GraphSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     output: "out".into(),
///     graphs: vec![GraphSummary {
///         name: "demo".into(),
///         nodes: 3,
///         edges: 3,
///         totals: [2.0, 2.0, 2.0],
///         agrees: true,
///         files: Vec::new(),
///     }],
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("demo\tnodes=3\tedges=3"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "output: {}", summary.output.display())?;
    for graph in &summary.graphs {
        writeln!(
            writer,
            "{}\tnodes={}\tedges={}",
            graph.name, graph.nodes, graph.edges
        )?;
        for (algorithm, total) in MstAlgorithm::ALL.into_iter().zip(graph.totals) {
            writeln!(writer, "  {}\t{total}", algorithm.as_str())?;
        }
        let verdict = if graph.agrees { "agree" } else { "MISMATCH" };
        writeln!(writer, "  totals\t{verdict}")?;
    }
    Ok(())
}
