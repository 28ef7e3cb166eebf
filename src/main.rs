//! CLI entry point for dirsnap

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use dirsnap::output::sibling_path;
use dirsnap::scaffold::create_demo_tree;
use dirsnap::tree::format_size;
use dirsnap::{
    DescriptorLog, Error, ExtensionSplit, OutputConfig, TreeWalker, WalkerConfig,
    collect_size_records, directory_size, log_tree, output_inside_root, read_snapshot,
    snapshot_base, write_snapshot,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "dirsnap")]
#[command(about = "Snapshot a directory tree into a descriptor log and JSON/CSV/binary size records")]
#[command(version)]
struct Args {
    /// Directory to snapshot
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Write the log and snapshot files here instead of next to the directory
    #[arg(short = 'o', long = "out-dir", value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Split file names on the first dot and store the leading part as the
    /// extension (matches snapshots from the older tooling)
    #[arg(long = "legacy-split")]
    legacy_split: bool,

    /// Keep filesystem enumeration order instead of sorting entries by name
    #[arg(long = "unsorted")]
    unsorted: bool,

    /// Skip the descriptor log
    #[arg(long = "no-log")]
    no_log: bool,

    /// Skip the JSON/CSV/binary snapshot
    #[arg(long = "no-snapshot")]
    no_snapshot: bool,

    /// Create a demo tree under PATH first, then snapshot it
    #[arg(long = "demo", conflicts_with = "read")]
    demo: bool,

    /// Print a previously written snapshot (.json, .csv or .bin) as JSON and exit
    #[arg(long = "read", value_name = "FILE")]
    read: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match args.read {
        Some(ref file) => print_snapshot(file),
        None => run(&args),
    };

    if let Err(e) = result {
        eprintln!("dirsnap: {}", e);
        process::exit(1);
    }
}

fn print_snapshot(file: &Path) -> dirsnap::Result<()> {
    let records = read_snapshot(file)?;
    let json = serde_json::to_string_pretty(&records).map_err(|e| Error::Encode {
        format: "json",
        reason: e.to_string(),
    })?;
    println!("{}", json);
    Ok(())
}

fn run(args: &Args) -> dirsnap::Result<()> {
    let walker_config = WalkerConfig {
        sort_entries: !args.unsorted,
        split: if args.legacy_split {
            ExtensionSplit::FirstDotLegacy
        } else {
            ExtensionSplit::LastDot
        },
    };
    let output_config = OutputConfig {
        output_dir: args.out_dir.clone(),
        write_log: !args.no_log,
        write_snapshot: !args.no_snapshot,
    };

    let mut root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    if args.demo {
        root = create_demo_tree(&root).map_err(|source| Error::OutputWrite {
            path: root.clone(),
            source,
        })?;
        println!("created demo tree at {}", root.display());
    }

    let root = root.canonicalize().unwrap_or(root);

    // Validate before any output file is created
    TreeWalker::new(walker_config.clone()).walk(&root)?;

    if let Some(dir) = &output_config.output_dir {
        if output_inside_root(&root, dir) {
            return Err(Error::OutputInsideRoot {
                output: dir.clone(),
                root,
            });
        }
        std::fs::create_dir_all(dir).map_err(|source| Error::OutputWrite {
            path: dir.clone(),
            source,
        })?;
    }
    let base = snapshot_base(&root, output_config.output_dir.as_deref());

    if output_config.write_log {
        let log_path = sibling_path(&base, "log");
        let mut log = DescriptorLog::create(&log_path)?;
        let summary = log_tree(&root, &walker_config, &mut log)?;
        println!(
            "{} directories, {} files",
            summary.directories, summary.files
        );
        if summary.skipped > 0 {
            eprintln!(
                "dirsnap: warning: {} unreadable entries skipped",
                summary.skipped
            );
        }
        println!("wrote {}", log_path.display());
    }

    if output_config.write_snapshot {
        let records = collect_size_records(&root, &walker_config)?;
        let paths = write_snapshot(&records, &base)?;
        println!(
            "{} records, {} total",
            records.len(),
            format_size(directory_size(&root))
        );
        for path in paths.iter() {
            println!("wrote {}", path.display());
        }
    }

    Ok(())
}
