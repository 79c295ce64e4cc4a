use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use keyword_relevance::{
    resources, resume::Resume, EngineConfig, KeywordEngine, KeywordReport, Resources,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the job description text
    #[arg(long, required_unless_present = "install")]
    job: Option<PathBuf>,

    /// Path to the resume, either a JSON object of sections or plain text
    #[arg(long, required_unless_present = "install")]
    resume: Option<PathBuf>,

    /// Path to a JSON engine config
    #[arg(long)]
    config: Option<PathBuf>,

    /// NLTK-style data directory holding the tagger and WordNet
    #[arg(long)]
    resources: Option<PathBuf>,

    /// Base URL to fetch missing resource files from
    #[arg(long)]
    mirror: Option<String>,

    /// Number of ranked terms to surface
    #[arg(long)]
    top: Option<usize>,

    /// Only install the resources, then exit
    #[arg(long, default_value = "false")]
    install: bool,

    /// Print the report as JSON
    #[arg(long, default_value = "false")]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(dir) = args.resources.clone() {
        config.resource_dir = Some(dir);
    }
    if let Some(mirror) = args.mirror.clone() {
        config.resource_mirror = Some(mirror);
    }
    if let Some(top) = args.top {
        config.max_ranked_terms = top;
    }

    let Some(root) = config.resource_root() else {
        bail!("No resource directory configured and no home directory to default to");
    };

    resources::install(&root, config.resource_mirror.as_deref())
        .context("Lexical resources are not available")?;

    if args.install {
        info!("resources ready in {}", root.display());
        return Ok(());
    }

    let (Some(job_path), Some(resume_path)) = (&args.job, &args.resume) else {
        bail!("Both --job and --resume are required");
    };

    let job_text = fs::read_to_string(job_path)
        .with_context(|| format!("Failed to read job description {}", job_path.display()))?;
    let resume_text = read_resume(resume_path, &config)?;

    let resources = Resources::load(&root)?;
    let engine = KeywordEngine::new(resources, config)?;

    let start = std::time::Instant::now();
    let report = engine.analyze(&job_text, &resume_text)?;
    info!("Time taken: {:?}", start.elapsed());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

/// JSON resumes are analyzed without their protected sections.
fn read_resume(path: &Path, config: &EngineConfig) -> Result<String> {
    let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if !is_json {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read resume {}", path.display()));
    }

    let resume = Resume::from_path(path)
        .with_context(|| format!("Failed to load resume {}", path.display()))?;
    let (open, _) = resume.separate_protected(&config.protected_sections);

    Ok(open.to_text()?)
}

fn print_report(report: &KeywordReport) {
    if report.matched.is_empty() {
        println!("Matched (lemmatized + synonyms): None");
    } else {
        println!("Matched (lemmatized + synonyms): {}", report.matched.join(", "));
    }

    println!("Ranked by TF-IDF importance:");
    for ranked in &report.ranked {
        println!("- {}: {:.4}", ranked.term, ranked.score);
    }

    println!("Emphasize: {}", report.emphasis_terms().join(", "));
}
