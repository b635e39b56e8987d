use std::env;

use anyhow::Result;
use pokedex_browser::screen::{TypeChartEvent, TypeChartState};
use pokedex_browser::{Pokedex, PokedexConfig, event_channel};
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

    // Usage: type_chart [fixture_root] [search]
    let mut args = env::args().skip(1);
    let mut config = PokedexConfig::default();
    if let Some(root) = args.next() {
        config.fixture_root = root.into();
    }
    let search = args.next().unwrap_or_default();

    let dex = Pokedex::new(config);
    let (events, mut rx) = event_channel();

    let mut state = TypeChartState::new().apply(TypeChartEvent::QueryChanged(search));
    dex.spawn_chart_load(&events);
    if let Some(event) = rx.recv().await {
        state = state.apply(event);
    }

    if state.shows_empty_message() {
        println!("No types match \"{}\"", state.query());
        return Ok(());
    }

    for t in state.visible_types() {
        let Some(profile) = state.apply(TypeChartEvent::TypeSelected(t)).selected().cloned() else {
            continue;
        };

        println!("┌─ {} (#{:06X}) {}", t, t.color(), dex.type_icon(t));
        for (title, names) in profile.sections() {
            if !names.is_empty() {
                println!("│  {}: {}", title, names.join(", "));
            }
        }
        println!("└─");
    }

    Ok(())
}
