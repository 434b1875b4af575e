use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use statboard::dashboard::Dashboard;
use statboard::settings::{Settings, default_settings_path};
use statboard::table_view::{TablePage, format_row_count, parse_page_size, render_table};
use statboard::types::{ChartType, Row};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "statboard", about = "Explore, search and chart a per-country statistics table")]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Dataset source path, overriding settings
    #[arg(long, global = true)]
    source: Option<String>,

    /// Key column used for search and labels, overriding settings
    #[arg(long, global = true)]
    key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the dataset
    View {
        /// Page to show (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Rows per page (10, 25, 50 or 100)
        #[arg(long, default_value_t = 25, value_parser = parse_page_size)]
        page_size: usize,
    },
    /// Search the key column
    Search { query: String },
    /// List columns that can be charted
    Columns,
    /// Print chart data as JSON
    Chart {
        #[arg(value_enum)]
        kind: ChartKind,
        /// Column to visualize
        #[arg(long)]
        column: String,
        /// Number of top rows for pie and bar charts
        #[arg(long)]
        top: Option<usize>,
    },
    /// Write the dataset as CSV
    Export {
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ChartKind {
    Pie,
    Bar,
    Line,
}

impl From<ChartKind> for ChartType {
    fn from(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Pie => ChartType::Pie,
            ChartKind::Bar => ChartType::Bar,
            ChartKind::Line => ChartType::Line,
        }
    }
}

fn main() {
    statboard::logging::init();

    if let Err(err) = run(Cli::parse()) {
        tracing::error!("{err:#}");
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = match cli.settings.or_else(default_settings_path) {
        Some(path) => Settings::load(&path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(source) = cli.source {
        settings.source = source;
    }
    if let Some(key) = cli.key {
        settings.key_column = Some(key);
    }

    let source = settings.source.clone();
    let dashboard =
        Dashboard::open(settings).with_context(|| format!("failed to load dataset {}", source))?;

    match cli.command {
        Command::View { page, page_size } => {
            let dataset = dashboard.dataset();
            let rows: Vec<&Row> = dataset.rows().iter().collect();
            let mut table = TablePage::new(rows.len());
            table.set_page_size(page_size);
            table.go_to(page.saturating_sub(1));

            println!("{} ({})", dataset.name, format_row_count(rows.len()));
            print!("{}", render_table(dataset, &rows, &table));
        }
        Command::Search { query } => match dashboard.search(&query)? {
            None => {}
            Some(rows) if rows.is_empty() => println!("No results found for '{}'.", query),
            Some(rows) => {
                println!("Search Results for '{}':", query);
                let mut table = TablePage::new(rows.len());
                table.set_page_size(rows.len());
                print!("{}", render_table(dashboard.dataset(), &rows, &table));
            }
        },
        Command::Columns => {
            for column in dashboard.chartable_columns() {
                println!("{}\t{}", column.name, column.kind.label());
            }
        }
        Command::Chart { kind, column, top } => {
            let chart = dashboard.chart(kind.into(), &column, top)?;
            if chart.is_empty() {
                bail!("no data to chart for column {}", column);
            }
            println!("{}", serde_json::to_string_pretty(&chart)?);
        }
        Command::Export { out } => {
            let content = dashboard.export_csv();
            match out {
                Some(path) => std::fs::write(&path, content)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}
