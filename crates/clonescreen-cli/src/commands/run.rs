use crate::cli::RunArgs;
use crate::config::PartialCampaignConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use clonescreen::core::io::csv::CsvResultFile;
use clonescreen::core::models::results::ResultRow;
use clonescreen::engine::clock::SystemClock;
use clonescreen::engine::progress::Reporter;
use clonescreen::engine::state::{CampaignSummary, SelectionReport};
use clonescreen::workflows::screen::{self, CampaignOutcome};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;

const BANNER_WIDTH: usize = 78;

pub fn run(args: RunArgs) -> Result<()> {
    let partial = match &args.config {
        Some(path) => PartialCampaignConfig::from_file(path)?,
        None => PartialCampaignConfig::default(),
    };
    let (config, seed) = partial.merge_with_cli(&args)?;

    print_background(&config.plate_format, config.num_clones);
    if !args.yes {
        pause_for_enter()?;
    }

    let rng = match seed {
        Some(seed) => {
            info!(seed, "Using seeded random source.");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let output_dir = args.output.unwrap_or_else(|| PathBuf::from("."));
    let mut sink = CsvResultFile::new(&output_dir);

    let progress_handler = CliProgressHandler::new();
    let reporter = Reporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core screening workflow...");
    let outcome = screen::run(config, rng, SystemClock, &mut sink, &reporter)?;

    print_selection(&outcome.selection);
    print_summary(&outcome);
    if let Some(path) = sink.written_path() {
        println!("\n💾 Results saved to: {}", path.display());
    }
    print_time_comparison(outcome.summary.total_screened);

    Ok(())
}

fn pause_for_enter() -> Result<()> {
    print!("\n⏸️  Press Enter to start the screening campaign...");
    std::io::stdout().flush().map_err(CliError::Io)?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

fn banner(title: &str) {
    println!("\n{}", "=".repeat(BANNER_WIDTH));
    println!("{title}");
    println!("{}", "=".repeat(BANNER_WIDTH));
}

fn print_background(plate_format: &str, num_clones: usize) {
    banner("🧬 CELL LINE SCREENING SIMULATOR");
    println!("\n📚 Background:");
    println!("   Biotherapeutics (antibodies, proteins) are made by living cells.");
    println!("   CHO cells (Chinese Hamster Ovary) are the industry workhorse.");
    println!("   Hundreds to thousands of clones are screened to find the best producers;");
    println!("   automated liquid handling makes that tractable.");
    println!("\n   Plate format: {plate_format}");
    println!("   Clones to screen: {num_clones}");
}

fn print_selection(selection: &SelectionReport) {
    banner(&format!("🏆 TOP {} CLONE SELECTION", selection.requested));

    println!("\n📋 Selection criteria:");
    for criterion in &selection.criteria {
        println!("   • {criterion}");
    }

    println!("\n🎯 Selected clones:\n");
    println!(
        "{:<11} {:>11} {:>13} {:>19} {:>11} {:>7} {:>13} {:>14} {:>7}",
        "Clone ID",
        "Titer (g/L)",
        "Viability (%)",
        "VCD (10^6 cells/mL)",
        "Growth Rate",
        "Stable",
        "Glycosylation",
        "Aggregates (%)",
        "Score"
    );
    for row in &selection.selected {
        println!("{}", format_row(row));
    }

    println!(
        "\n✅ {} clones selected for scale-up to shake flasks",
        selection.selected.len()
    );
    println!("   Next steps:");
    println!("   1. Expand in 125 mL shake flasks");
    println!("   2. Validate titer in fed-batch (14 days)");
    println!("   3. Assess stability over 60 generations");
    println!("   4. Best clone → bioreactor scale-up (2L → 200L → 2000L)");
}

fn format_row(row: &ResultRow) -> String {
    format!(
        "{:<11} {:>11.2} {:>13.1} {:>19.2} {:>11.4} {:>7} {:>13} {:>14.1} {:>7.3}",
        row.clone_id,
        row.titer,
        row.viability,
        row.density_millions(),
        row.growth_rate,
        if row.is_stable { "Yes" } else { "No" },
        row.glycosylation.as_str(),
        row.aggregation_level,
        row.score
    )
}

fn print_summary(outcome: &CampaignOutcome) {
    let summary: &CampaignSummary = &outcome.summary;
    banner("📈 CAMPAIGN SUMMARY");

    println!(
        "Campaign start: {}",
        summary.started_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "Campaign end:   {}",
        summary.finished_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!("Total clones screened: {}", summary.total_screened);
    println!("Clones advanced: {}", summary.advanced);
    println!("Success rate: {:.1}%", summary.success_rate_pct);
    println!("\n📊 Screening statistics:");
    println!("   Mean titer: {:.2} g/L", summary.mean_titer);
    println!("   Max titer: {:.2} g/L", summary.max_titer);
    println!("   Mean viability: {:.1}%", summary.mean_viability);
    println!(
        "   High producers (>3 g/L): {} clones",
        summary.high_producers
    );
    println!(
        "   Stable clones: {}/{}",
        summary.stable_clones, summary.total_screened
    );
    println!(
        "   Best clone: {} (score {:.3})",
        summary.best_clone_id, summary.best_score
    );
}

fn print_time_comparison(num_clones: usize) {
    banner("⏱️  TIME COMPARISON");
    println!("Manual screening (1 person, {num_clones} clones):");
    println!("   Day 0: ~8 hours (seeding, counting, diluting)");
    println!("   Day 3: ~6 hours (sampling, feeding, analysis)");
    println!("   Day 7: ~10 hours (harvest, centrifuge, assays)");
    println!("   Total: ~24 hours of intensive pipetting, with a high error rate");
    println!("\nAutomated screening (liquid-handling robot):");
    println!("   Day 0: ~45 minutes, Day 3: ~30 minutes, Day 7: ~1 hour");
    println!("   Total: ~2 hours of setup and monitoring, minimal error rate");
}
