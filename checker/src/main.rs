mod cli;

use anyhow::Context;
use clap::Parser;
use log::{debug, info};

use dt_botapi::{read_api_reference, ApiReference, ConsistencyReport, ReadOptions, ResolvedType};

fn print_summary(reference: &ApiReference) {
    for section in &reference.sections {
        println!(
            "SECTION {:?}: {} types, {} methods",
            section.name,
            section.types.len(),
            section.methods.len()
        );
    }
}

fn print_report(report: &ConsistencyReport) {
    for name in &report.duplicate_types {
        println!("DUPLICATE {name:?}");
    }
    for name in &report.unknown_types {
        let kind = match ResolvedType::resolve(name) {
            ResolvedType::Declared { .. } => "not declared",
            ResolvedType::Primitive(_) => "primitive",
            ResolvedType::Super(_) => "super type",
            ResolvedType::WithAlternative { .. } => "alternative",
            ResolvedType::CallbackGame | ResolvedType::InputFile | ResolvedType::ParseMode => {
                "builtin"
            }
            ResolvedType::ListType(_) => "list",
        };
        println!("UNKNOWN {name:?} ({kind})");
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = cli::Cli::parse();

    let source = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let document = scraper::Html::parse_document(&source);
    for error in &document.errors {
        debug!("{}: {error}", cli.input.display());
    }

    let reference = read_api_reference(
        &document,
        &ReadOptions {
            content_root_id: cli.content_root,
        },
    )
    .with_context(|| format!("failed to read the reference in {}", cli.input.display()))?;
    info!(
        "read {} sections, {} types, {} methods",
        reference.sections.len(),
        reference.types().count(),
        reference.methods().count()
    );

    if cli.summary {
        print_summary(&reference);
    }
    let report = reference.check_consistency();
    print_report(&report);
    info!(
        "{} names are not covered by any builtin table",
        report.unaccounted().count()
    );
    Ok(())
}
