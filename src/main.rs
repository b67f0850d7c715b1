// Timetable Planner
// Command-line entry point: load the catalog and print a search page

use std::time::Instant;

use anyhow::Result;
use timetable_planner::models::table::INITIAL_TABLE_ID;
use timetable_planner::services::catalog::CatalogLoader;
use timetable_planner::services::session::{PlannerSession, SearchTarget};
use timetable_planner::services::settings::ConfigService;
use timetable_planner::utils::time_slots::slot_label;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Timetable Planner");

    let config = ConfigService::from_environment()?.load()?;
    let catalog = CatalogLoader::new(config.catalog.clone())?.load().await?;

    let mut planner = PlannerSession::new(&config, catalog);
    let now = Instant::now();
    planner.open_search(SearchTarget::table(INITIAL_TABLE_ID), now)?;

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if !query.is_empty() {
        planner.search_mut().set_query(query, now);
    }

    let search = planner.search();
    println!(
        "{} lectures match (showing {})",
        search.result_count(),
        search.visible().len()
    );
    for lecture in search.visible() {
        println!(
            "{:<10} {:<40} {:>4} {:<16} {}",
            lecture.id, lecture.title, lecture.credits, lecture.major, lecture.schedule
        );
    }

    let times = search.sorted_times();
    if !times.is_empty() {
        let labels: Vec<String> = times.into_iter().filter_map(slot_label).collect();
        println!("Times: {}", labels.join(", "));
    }

    Ok(())
}
