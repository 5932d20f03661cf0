use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use shortest_paths::{johnson, select, JohnsonConfig, NegativeCyclePolicy};
use tracing::info;

use crate::cli::{Command, OutputFormat};
use crate::input::{parse_problem, Problem};
use crate::report::Report;

pub fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Solve { input, format, strict, paths, show_graph } => {
            let mut problem = load_problem(input.as_deref())?;
            if show_graph {
                eprint!("{}", problem.graph);
            }
            let negative_cycles = if strict {
                NegativeCyclePolicy::Reject
            } else {
                NegativeCyclePolicy::Truncate
            };
            let config = JohnsonConfig { negative_cycles };
            let report = solve(&mut problem, &config, paths)?;
            match format {
                OutputFormat::Text => print!("{report}"),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
            Ok(())
        }
        Command::ShowGraph { input } => {
            let problem = load_problem(input.as_deref())?;
            print!("{}", problem.graph);
            Ok(())
        }
    }
}

pub fn solve(problem: &mut Problem, config: &JohnsonConfig, with_routes: bool) -> Result<Report> {
    let run = johnson(&mut problem.graph, &problem.branches, config)?;
    let selection = select(&run.matrix);
    match selection.meeting_point() {
        Some(point) => info!(
            location = point.location(),
            total = point.total,
            "meeting point found"
        ),
        None => info!("no location is reachable from every branch"),
    }
    Ok(Report::new(&selection, &run, with_routes))
}

pub fn load_problem(path: Option<&Path>) -> Result<Problem> {
    let text = read_input(path)?;
    let problem = parse_problem(&text).with_context(|| match path {
        Some(path) => format!("invalid problem in {}", path.display()),
        None => "invalid problem on stdin".to_string(),
    })?;
    info!(
        vertices = problem.graph.vertex_count(),
        edges = problem.graph.edge_count(),
        branches = problem.branches.len(),
        "problem loaded"
    );
    Ok(problem)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
            Ok(text)
        }
    }
}
