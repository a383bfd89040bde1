use selkie::model::TopologyModel;
use selkie::{aggregated_edge_bendpoints, group_hull_points};
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Model(selkie::model::ModelError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Model(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<selkie::model::ModelError> for CliError {
    fn from(value: selkie::model::ModelError) -> Self {
        Self::Model(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

const USAGE: &str = "Usage: selkie-cli [route] [options] [model.json]

Reads a topology model as JSON (from a file argument or stdin) and prints the
aggregate bendpoints of every edge as JSON.

Options:
  --pretty               Pretty-print the output JSON
  --hull-padding <px>    Padding for hulls computed for collapsed groups that
                         carry none (default 0)
  -h, --help             Show this help";

#[derive(Debug, Default)]
struct Args {
    pretty: bool,
    hull_padding: f64,
    input: Option<String>,
    help: bool,
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut saw_command = false;

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "route" if !saw_command && args.input.is_none() => saw_command = true,
            "--pretty" => args.pretty = true,
            "--hull-padding" => {
                let value = argv
                    .next()
                    .ok_or(CliError::Usage("--hull-padding requires a value"))?;
                args.hull_padding = value
                    .parse()
                    .map_err(|_| CliError::Usage("--hull-padding requires a number"))?;
            }
            "-h" | "--help" => args.help = true,
            _ if arg.starts_with('-') => return Err(CliError::Usage("unknown option")),
            _ => {
                if args.input.is_some() {
                    return Err(CliError::Usage("only one input file is accepted"));
                }
                args.input = Some(arg);
            }
        }
    }

    Ok(args)
}

#[derive(Debug, Serialize)]
struct RoutedEdge {
    source: String,
    target: String,
    bendpoints: Vec<[f64; 2]>,
}

#[derive(Debug, Serialize)]
struct RouteOutput {
    edges: Vec<RoutedEdge>,
}

fn run() -> Result<(), CliError> {
    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let model: TopologyModel = serde_json::from_str(&text)?;
    let mut g = model.build()?;

    // Collapsed groups that arrive without a stored hull get one computed from their leaves.
    for id in g.node_ids() {
        let needs_hull = g
            .node(&id)
            .is_some_and(|n| n.group && n.collapsed && n.hull.is_none());
        if !needs_hull {
            continue;
        }
        let hull = group_hull_points(&g, &id, args.hull_padding);
        if let Some(label) = g.node_mut(&id) {
            label.hull = hull;
        }
    }

    let mut out = RouteOutput { edges: Vec::new() };
    for edge in g.edges() {
        let bendpoints = aggregated_edge_bendpoints(&g, edge);
        out.edges.push(RoutedEdge {
            source: edge.source.clone(),
            target: edge.target.clone(),
            bendpoints: bendpoints.into_iter().map(|p| [p.x, p.y]).collect(),
        });
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&out)?
    } else {
        serde_json::to_string(&out)?
    };
    println!("{json}");
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        if matches!(err, CliError::Usage(_)) {
            eprintln!("{err}\n\n{USAGE}");
        } else {
            eprintln!("{err}");
        }
        std::process::exit(1);
    }
}
