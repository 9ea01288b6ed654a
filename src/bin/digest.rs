//! Terminal digest client: polls the backend on a fixed interval and
//! renders one card per stage.

use anyhow::Result;
use dotenv::dotenv;
use log::info;
use std::time::Duration;
use tokio::sync::watch;

use event_digest::bootstrap::setup::initialize_logger;
use event_digest::config::DigestConfig;
use event_digest::digest::{DigestState, HttpStageFetcher, run_poll_loop};
use event_digest::models::stage::DisplayStage;

fn excitement_bar(excitement: u8) -> String {
    let filled = (excitement as usize) / 10;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(10 - filled))
}

fn render_card(card: &DisplayStage) {
    println!("== {} ==", card.stage_name);
    println!("  {}", card.summary);
    println!("  video: {}", card.video_url);
    println!(
        "  excitement: {} {}%  tags: {}",
        excitement_bar(card.excitement),
        card.excitement,
        card.tags.join(" ")
    );
    println!();
}

fn render(state: &DigestState) {
    match state {
        DigestState::Loading => println!("Loading stage digest..."),
        DigestState::Error(message) => println!("ERROR: {}", message),
        DigestState::Ready(cards) => {
            println!("--- AI Real-time Event Digest ---");
            for card in cards {
                render_card(card);
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    initialize_logger();

    let config = DigestConfig::from_env()?;
    info!(
        "Polling {} every {}s",
        config.digest_base_url, config.digest_poll_secs
    );

    let fetcher = HttpStageFetcher::new(&config.digest_base_url);
    let (tx, mut rx) = watch::channel(DigestState::Loading);
    render(&DigestState::Loading);

    let poll_task = tokio::spawn(run_poll_loop(
        fetcher,
        Duration::from_secs(config.digest_poll_secs),
        tx,
    ));

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = rx.borrow_and_update().clone();
                render(&state);
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down digest client");
                break;
            }
        }
    }

    poll_task.abort();
    let _ = poll_task.await;
    Ok(())
}
