// Command-line entry point for registrar.

use anyhow::{bail, Context};
use clap::Parser;
use registrar::api::dto::ReportDto;
use registrar::api::server;
use registrar::application::{compare_with_mirror, RepositoryBuilder};
use registrar::config::RepositoryConfig;
use registrar::domain::summary::{InstructorSummary, MajorSummary, StudentSummary};
use registrar::domain::University;
use registrar::infrastructure::DelimitedFileSource;
use registrar::ports::table_renderer::{Table, TableRenderer};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the majors, students, instructors and grades files
    #[arg(short = 'd', long)]
    dir: PathBuf,

    /// Layout file (defaults to <dir>/registrar.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// SQLite mirror with instructors and grades tables
    #[arg(long)]
    db: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Serve the instructor page from --db on this port after printing
    #[arg(long)]
    serve: Option<u16>,
}

fn build(cli: &Cli) -> registrar::Result<University> {
    let config = RepositoryConfig::discover(&cli.dir, cli.config.as_deref())?;
    let source = DelimitedFileSource::new(&cli.dir)?;
    RepositoryBuilder::new(&source, &config).build()
}

fn print_text(university: &University, mirror: Option<&[InstructorSummary]>) -> anyhow::Result<()> {
    let mut majors = Table::new(&MajorSummary::HEADER);
    for row in university.major_summaries() {
        majors.add_row(row.cells())?;
    }
    println!("Majors Summary\n{}", TableRenderer::render(&majors));

    let mut students = Table::new(&StudentSummary::HEADER);
    for row in university.student_summaries()? {
        students.add_row(row.cells())?;
    }
    println!("Student Summary\n{}", TableRenderer::render(&students));

    let mut instructors = Table::new(&InstructorSummary::HEADER);
    for row in university.instructor_summaries() {
        instructors.add_row(row.cells())?;
    }
    println!("Instructor Summary\n{}", TableRenderer::render(&instructors));

    if let Some(rows) = mirror {
        let mut table = Table::new(&InstructorSummary::HEADER);
        for row in rows {
            table.add_row(row.cells())?;
        }
        println!("Instructor Summary (database)\n{}", TableRenderer::render(&table));
    }
    Ok(())
}

async fn run(cli: &Cli, university: &University) -> anyhow::Result<()> {
    let mirror = match &cli.db {
        Some(db) => Some(
            compare_with_mirror(university, db)
                .with_context(|| format!("Failed to query mirror {}", db.display()))?
                .mirror_rows,
        ),
        None => None,
    };

    match cli.format.as_str() {
        "text" => print_text(university, mirror.as_deref())?,
        "json" => {
            let mut report = ReportDto::from_university(university)?;
            if let Some(rows) = mirror {
                report = report.with_mirror(rows);
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        other => bail!("Unknown output format: {}", other),
    }

    if let Some(port) = cli.serve {
        let Some(db) = &cli.db else {
            bail!("--serve needs --db");
        };
        server::start_server(port, db).await?;
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    info!("building repository from {}", cli.dir.display());

    let university = match build(&cli) {
        Ok(university) => university,
        Err(e) => {
            error!("repository build failed: {}", e);
            eprintln!("ERROR : {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli, &university).await {
        eprintln!("ERROR : {:#}", e);
        std::process::exit(1);
    }
}
