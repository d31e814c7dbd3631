use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use clauseguard::{
    AnalysisConfig, AnalysisError, ContractAnalyzer, ContractReport, PipelineStages,
    ReportFormat, StepProfiler,
};

#[derive(Parser)]
#[command(name = "clauseguard")]
#[command(about = "Contract analysis: clause types, named entities and risk levels")]
struct Args {
    /// Path to the contract to analyse (.pdf, .docx or .txt)
    #[arg(short, long)]
    input: Option<String>,

    /// Path to custom config file (YAML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Output format: text, markdown, or json
    #[arg(short = 'f', long, default_value = "text")]
    output_format: String,

    /// Show available config options and exit
    #[arg(long)]
    show_configs: bool,

    /// Output file path (report is printed to stdout if not specified)
    #[arg(short, long)]
    output: Option<String>,

    /// Enable detailed profiling of all pipeline steps
    #[arg(long)]
    profile: bool,

    /// Dump all intermediate pipeline stage outputs to a directory
    /// Captures: extracted text, clauses, and the final report as separate files
    #[arg(long)]
    dump_stages: bool,

    /// Directory for stage dump output (default: test_outputs/stages)
    #[arg(long, default_value = "test_outputs/stages")]
    stages_dir: String,

    /// Show debug logging from the analysis library
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// True when the rendered report is the only thing that may reach stdout
    fn report_on_stdout(&self) -> bool {
        self.output.is_none() && !self.dump_stages
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Status lines go to stderr when the report itself is written to stdout
    let to_stdout = args.report_on_stdout();
    let status = |line: String| {
        if to_stdout {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    };

    status("⚖️  ClauseGuard Contract Analyzer".to_string());

    if args.show_configs {
        show_help();
        return Ok(());
    }

    let Some(input) = args.input.as_deref() else {
        eprintln!("❌ No input file given. Use --input <path> (see --show-configs)");
        std::process::exit(2);
    };

    let format: ReportFormat = args.output_format.parse()?;

    let config = AnalysisConfig::load_with_fallback(args.config.as_deref());
    if let Some(config_path) = &args.config {
        status(format!("📋 Loaded config from: {config_path}"));
    } else {
        status("📋 Using default config".to_string());
    }

    tracing::debug!(?config, "effective config");

    let analyzer = ContractAnalyzer::new(&config)?;
    status(format!("📄 Analysing: {input}"));

    // Stage dump mode: capture and save all intermediates
    if args.dump_stages {
        println!("\n🔬 Pipeline stage dump mode");
        let stages = analyzer
            .capture_stages(Path::new(input))
            .unwrap_or_else(|e| fail(e));
        save_stages(&stages, &args.stages_dir)?;
        println!("\n✅ All stages dumped to: {}", args.stages_dir);
        return Ok(());
    }

    let mut profiler = StepProfiler::new(args.profile);
    let document = analyzer.extractor().extract_file(Path::new(input));
    let (_, report) = analyzer
        .analyze_with_profiler(&document, &mut profiler)
        .unwrap_or_else(|e| fail(e));

    status("✅ Successfully analysed document".to_string());
    status(format!(
        "📊 Contract type: {} | Clauses: {} | Overall risk: {}",
        report.contract_type,
        report.clauses.len(),
        report.overall_risk
    ));

    match &args.output {
        Some(output_path) => save_report(&report, output_path, format)?,
        None => print!("{}", report.render(format)?),
    }

    if to_stdout {
        profiler.eprint_summary();
    } else {
        profiler.print_summary();
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// The only fatal analysis outcome: no text. One message, exit code 1.
fn fail(e: AnalysisError) -> ! {
    eprintln!("❌ {e}");
    std::process::exit(1);
}

fn show_help() {
    println!("\n📋 Available Configuration Options:");
    println!("  --input <path>          Contract to analyse (.pdf, .docx or .txt)");
    println!("  --config <path>         Load custom config file");
    println!("  --output <path>         Write the report to a file (default: stdout)");
    println!("  --output-format <fmt>   Output format: text, markdown, or json");
    println!("  --profile               Print per-step timings");
    println!("  --dump-stages           Save extracted text, clauses and report to --stages-dir");
    println!("  --verbose               Debug logging (or set RUST_LOG)");

    println!("\n📄 Output Formats:");
    println!("  text      - Plain report with one block per clause (default)");
    println!("  markdown  - Same sections with Markdown headings");
    println!("  json      - Full report structure, including the document fingerprint");

    println!("\n🛠  Config keys (YAML, all optional):");
    match AnalysisConfig::default().to_yaml() {
        Ok(yaml) => {
            for line in yaml.lines() {
                println!("  {line}");
            }
        }
        Err(e) => println!("  (unable to render defaults: {e})"),
    }

    println!("\n📝 Usage Examples:");
    println!("  cargo run -- -i contract.pdf");
    println!("  cargo run -- -i contract.docx -f markdown -o report.md");
    println!("  cargo run -- -i contract.txt -c configs/strict.yaml -f json");
}

fn save_stages(stages: &PipelineStages, output_dir: &str) -> Result<()> {
    use std::fs;
    fs::create_dir_all(output_dir)?;

    // Stage 1: extracted text
    let text_path = format!("{output_dir}/stage1_document.txt");
    fs::write(&text_path, &stages.document.text)?;
    println!(
        "  💾 {} ({} chars)",
        text_path,
        stages.document.text.chars().count()
    );

    // Stage 2: segmented clauses
    let clauses_path = format!("{output_dir}/stage2_clauses.json");
    fs::write(&clauses_path, serde_json::to_string_pretty(&stages.clauses)?)?;
    println!("  💾 {} ({} clauses)", clauses_path, stages.clauses.len());

    // Stage 3: final report
    let report_path = format!("{output_dir}/stage3_report.json");
    stages
        .report
        .save_with_format(&report_path, ReportFormat::Json)?;
    println!("  💾 {} (overall risk {})", report_path, stages.report.overall_risk);

    // Summary file: quick reference for validation scripts
    let (low, medium, high) = stages.report.severity_counts();
    let summary = serde_json::json!({
        "input": stages.document.source,
        "fingerprint": stages.report.fingerprint,
        "captured_at": chrono::Utc::now().to_rfc3339(),
        "stage_counts": {
            "text_chars": stages.document.text.chars().count(),
            "clauses": stages.clauses.len(),
            "low": low,
            "medium": medium,
            "high": high,
        }
    });
    let summary_path = format!("{output_dir}/summary.json");
    fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)?;
    println!("  💾 {summary_path}");

    Ok(())
}

fn save_report(report: &ContractReport, output_path: &str, format: ReportFormat) -> Result<()> {
    report.save_with_format(output_path, format)?;

    match format {
        ReportFormat::Text => println!("💾 Text report saved to: {output_path}"),
        ReportFormat::Markdown => println!("💾 Markdown report saved to: {output_path}"),
        ReportFormat::Json => println!("💾 JSON report saved to: {output_path}"),
    }

    Ok(())
}
