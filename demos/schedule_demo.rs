//! Demonstration of both schedule enumeration strategies on a small catalog.
//!
//! Run with `RUST_LOG=debug` to see per-strategy search counters.

use std::time::Instant;

use class_scheduler::algorithms::{
    BacktrackingEnumerator, CompatibilityGraph, Enumeration, Enumerator, GraphEnumerator,
};
use class_scheduler::section::{sections_from_catalog, CatalogEntry};
use tracing_subscriber::EnvFilter;

fn catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("52638", "CSCI 202 01", "TR 3:00 PM - 3:50 PM"),
        CatalogEntry::new("50537", "CSCI 205 01", "MWF 9:00 AM - 9:50 AM"),
        CatalogEntry::new("50860", "CSCI 205 02", "MWF 10:00 AM - 10:50 AM"),
        CatalogEntry::new("50120", "CSCI 206 01", "MWF 9:00 AM - 9:50 AM"),
        CatalogEntry::new("50536", "CSCI 206 02", "MWF 11:00 AM - 11:50 AM"),
        CatalogEntry::new("54958", "CSCI 206 03", "MWF 1:00 PM - 1:50 PM"),
        CatalogEntry::new("54690", "RESC 221 06", "W 5:00 PM - 6:30 PM"),
        CatalogEntry {
            times: vec!["T 5:00 PM - 6:30 PM".into(), "R 7:00 PM - 9:50 PM".into()],
            ..CatalogEntry::new("54691", "RESC 221 07", "")
        },
        CatalogEntry::new("55001", "RESC 221 08", "TBA"),
        CatalogEntry::new("52954", "ARST 245 01", "MW 10:00 AM - 11:50 AM").as_elective(1),
        CatalogEntry::new("54547", "ARST 131 03", "MW 1:00 PM - 2:50 PM").as_elective(1),
        CatalogEntry::new("51345", "ARST 239 01", "TR 10:00 AM - 11:50 AM").as_elective(1),
    ]
}

fn report(label: &str, out: &Enumeration<'_>, elapsed: std::time::Duration) {
    println!("{label}: {} schedules in {elapsed:?}", out.len());
    println!(
        "  calls={} leaves={} accepted={} rejected={} pruned={}",
        out.stats.calls,
        out.stats.leaves,
        out.stats.accepted,
        out.stats.rejected,
        out.stats.pruned
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let sections = sections_from_catalog(&catalog())?;

    let graph = CompatibilityGraph::build(&sections);
    println!("{graph}");

    let started = Instant::now();
    let tree = BacktrackingEnumerator::new().enumerate(&sections)?;
    report("Backtracking", &tree, started.elapsed());

    let started = Instant::now();
    let chains = GraphEnumerator::default().enumerate(&sections)?;
    report("Graph", &chains, started.elapsed());

    let agree = tree.len() == chains.len()
        && tree
            .schedules
            .iter()
            .all(|s| chains.schedules.iter().any(|c| c.same_sections(s)));
    println!("Strategies agree: {agree}");
    println!();

    for (n, schedule) in tree.schedules.iter().enumerate() {
        println!("Schedule {}", n + 1);
        println!("{schedule}");
    }

    Ok(())
}
