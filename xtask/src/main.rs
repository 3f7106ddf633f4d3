use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "keel workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Benchmark native double-word atomics against the seqlock fallback
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

/// Baselines to compare: the default build uses the target's native
/// double-word CAS; `fallback` opts into portable-atomic's seqlock.
const BASELINES: &[(&str, Option<&str>)] = &[("native", None), ("fallback", Some("fallback"))];

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running double-word atomic benchmarks...");

    for (name, feature) in BASELINES {
        println!("\n>>> Benchmarking baseline: {name}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");

        cmd.arg("bench")
            .arg("--package")
            .arg("keel")
            .arg("--bench")
            .arg("atomics_benchmark");
        if let Some(feature) = feature {
            cmd.arg("--features").arg(feature);
        }

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        cmd.arg("--save-baseline").arg(name);

        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .context(format!("Failed to run bench baseline {name}"))?;

        if status.success() {
            println!("Finished {name} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: Benchmark failed for baseline {name}");
        }
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let mut results: HashMap<String, HashMap<String, f64>> = HashMap::new();

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    collect_results(criterion_dir, criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Native vs Fallback Double-Word Atomics")?;

    let mut workloads: Vec<_> = results.keys().collect();
    workloads.sort();

    write!(file, "| Workload |")?;
    for (name, _) in BASELINES {
        write!(file, " {name} (ns/op) | vs native |")?;
    }
    writeln!(file)?;

    write!(file, "|---|")?;
    for _ in BASELINES {
        write!(file, "---|---|")?;
    }
    writeln!(file)?;

    for workload in workloads {
        write!(file, "| {workload} |")?;

        let native_ns = results
            .get(workload)
            .and_then(|m| m.get("native"))
            .copied()
            .unwrap_or(0.0);

        for (name, _) in BASELINES {
            if let Some(ns) = results.get(workload).and_then(|m| m.get(*name)) {
                let rel = if native_ns > 0.0 { ns / native_ns } else { 0.0 };
                write!(file, " {ns:.1} | **{rel:.2}x** |")?;
            } else {
                write!(file, " N/A | - |")?;
            }
        }
        writeln!(file)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn collect_results(root: &Path, dir: &Path, results: &mut HashMap<String, HashMap<String, f64>>) {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(root, &path, results);
        } else if path.file_name().and_then(|s| s.to_str()) == Some("estimates.json") {
            // Structure: <root>/<group>/<function...>/<baseline>/estimates.json.
            // The workload key must keep the whole group-qualified path:
            // different groups reuse function names (load/relaxed exists for
            // both cell types), and a bare directory name would merge them.
            let Some(baseline_dir) = path.parent() else { continue };
            let Some(workload_dir) = baseline_dir.parent() else { continue };
            let Some(baseline) = baseline_dir.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            let Ok(rel) = workload_dir.strip_prefix(root) else { continue };
            let components: Vec<&str> = rel.iter().filter_map(|c| c.to_str()).collect();

            if baseline == "report" || components.is_empty() || components.contains(&"report") {
                continue;
            }
            let workload = components.join("/");

            if let Ok(content) = fs::read_to_string(&path) {
                if let Ok(json) = serde_json::from_str::<serde_json::Value>(&content) {
                    if let Some(mean) = json.get("mean").and_then(|m| m.get("point_estimate")) {
                        let time_ns = mean.as_f64().unwrap_or(0.0);
                        if time_ns > 0.0 {
                            results
                                .entry(workload)
                                .or_default()
                                .insert(baseline.to_string(), time_ns);
                        }
                    }
                }
            }
        }
    }
}
