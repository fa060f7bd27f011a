//! Linkrank CLI — ranks a directory of hyperlinked pages with PageRank
//!
//! Runs the sampling and iteration estimators side by side and prints both.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use comfy_table::{ContentArrangement, Table};
use linkrank::{
    crawl, iterate_page_rank, sample_page_rank, Corpus, MethodReport, PageRankConfig,
    RankReport, SamplingConfig, DEFAULT_DAMPING, DEFAULT_SAMPLES,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "linkrank", version, about = "Rank hyperlinked pages with PageRank")]
struct Cli {
    /// Directory of .html pages
    corpus: PathBuf,

    /// Probability of following a link rather than jumping to a random page
    #[arg(long, default_value_t = DEFAULT_DAMPING)]
    damping: f64,

    /// Random-walk length for the sampling estimator
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// Seed for the random walk (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Which estimator(s) to run
    #[arg(long, default_value = "both")]
    method: Method,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, ValueEnum)]
enum Method {
    Both,
    Sampling,
    Iteration,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Table,
    Json,
    Csv,
}

fn main() {
    // Logs go to stderr; stdout carries the rankings
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let corpus = crawl(&cli.corpus)
        .with_context(|| format!("failed to load corpus from {}", cli.corpus.display()))?;

    info!(pages = corpus.page_count(), damping = cli.damping, "ranking corpus");
    let report = rank(&corpus, cli)?;
    info!(methods = report.methods().count(), "ranking complete");

    match cli.format {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Csv => print_csv(&report),
        OutputFormat::Table => print_table(&corpus, &report),
    }

    Ok(())
}

/// Run the selected estimators; with both selected they run in parallel.
fn rank(corpus: &Corpus, cli: &Cli) -> Result<RankReport> {
    let sampling_config = SamplingConfig {
        damping_factor: cli.damping,
        samples: cli.samples,
        seed: cli.seed,
    };
    let iteration_config = PageRankConfig {
        damping_factor: cli.damping,
        ..Default::default()
    };

    let run_sampling = || -> Result<MethodReport> {
        let ranks = sample_page_rank(corpus, &sampling_config).context("sampling failed")?;
        Ok(MethodReport::sampling(corpus, &ranks, cli.samples))
    };
    let run_iteration = || -> Result<MethodReport> {
        let outcome = iterate_page_rank(corpus, &iteration_config).context("iteration failed")?;
        Ok(MethodReport::iteration(corpus, &outcome.ranks, outcome.iterations))
    };

    let mut report = RankReport::new(cli.damping);
    match cli.method {
        Method::Both => {
            let (sampling, iteration) = rayon::join(run_sampling, run_iteration);
            report.sampling = Some(sampling?);
            report.iteration = Some(iteration?);
        }
        Method::Sampling => report.sampling = Some(run_sampling()?),
        Method::Iteration => report.iteration = Some(run_iteration()?),
    }

    Ok(report)
}

fn print_table(corpus: &Corpus, report: &RankReport) {
    let methods: Vec<&MethodReport> = report.methods().collect();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["Page".to_string()];
    header.extend(methods.iter().map(|m| column_title(m)));
    table.set_header(header);

    for page in corpus.page_names() {
        let mut row = vec![page.clone()];
        row.extend(methods.iter().map(|m| match m.ranks.get(page) {
            Some(rank) => format!("{:.4}", rank),
            None => String::new(),
        }));
        table.add_row(row);
    }

    println!("{}", table);
    println!("{} page(s), damping {}", corpus.page_count(), report.damping_factor);
}

fn print_csv(report: &RankReport) {
    println!("method,page,rank");
    for method in report.methods() {
        for (page, rank) in &method.ranks {
            println!("{},{},{}", method.method, format_csv_value(page), rank);
        }
    }
}

fn column_title(method: &MethodReport) -> String {
    match (method.samples, method.iterations) {
        (Some(n), _) => format!("Sampling (n = {})", n),
        (None, Some(sweeps)) => format!("Iteration ({} sweeps)", sweeps),
        (None, None) => method.method.to_string(),
    }
}

fn format_csv_value(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
