use std::env;

use anyhow::Result;
use pokedex_browser::screen::{ListEvent, ListState};
use pokedex_browser::{Pokedex, PokedexConfig, event_channel};
use pokedex_dex::display;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_browser=info,pokedex_dex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Usage: list [config.json] [page] [search] [type]
    let mut args = env::args().skip(1);
    let config = match args.next() {
        Some(path) => PokedexConfig::from_json_file(path)?,
        None => PokedexConfig::default(),
    };
    let page: usize = args.next().and_then(|p| p.parse().ok()).unwrap_or(0);

    let dex = Pokedex::new(config);
    let Some(range) = dex.ranges().get(page).copied() else {
        anyhow::bail!("Page {} out of range ({} pages)", page, dex.ranges().len());
    };

    let mut state = ListState::new(range);
    if let Some(search) = args.next() {
        state = state.apply(ListEvent::QueryChanged(search));
    }
    if let Some(type_name) = args.next() {
        state = state.apply(ListEvent::TypeToggled(type_name));
    }

    let (events, mut rx) = event_channel();
    dex.spawn_list_load(&state, &events);
    while state.is_loading() {
        let Some(event) = rx.recv().await else {
            break;
        };
        state = state.apply(event);
    }

    println!("=== {} ===", state.range_label());
    if let Some(summary) = state.result_summary() {
        println!("{}", summary);
    }
    if state.shows_empty_message() {
        println!("No Pokemon found");
    }

    for creature in state.visible() {
        let types: Vec<String> = creature.type_names().map(display::capitalize).collect();
        println!(
            "{} {:<12} {}",
            display::dex_number(creature.id),
            creature.display_name(),
            types.join(" / ")
        );
    }

    Ok(())
}
