use std::io::BufRead;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use timetable::debounce::{SearchDebouncer, SEARCH_DEBOUNCE};
use timetable::feed::ClientConfig;
use timetable::prefs::Preferences;
use timetable::render;
use timetable::state::{View, ViewState};
use timetable::views::{self, clock, SearchOutcome};
use timetable::TimetableClient;

#[derive(Debug, Parser)]
#[command(
    name = "timetable",
    about = "Terminal viewer for statically published group timetables",
    version
)]
struct Cli {
    /// Base URL of the published documents. Falls back to
    /// TIMETABLE_BASE_URL, then the built-in default.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Today's classes for a group, with the next class called out
    Today {
        #[arg(long)]
        group: Option<String>,
    },
    /// Monday-Friday grid for a group
    Week {
        #[arg(long)]
        group: Option<String>,
    },
    /// One-shot search across all groups
    Search {
        query: String,
        /// Restrict matches to one group
        #[arg(long)]
        group: Option<String>,
    },
    /// Interactive search: type queries, blank line to leave
    WatchSearch {
        /// Restrict matches to one group
        #[arg(long)]
        group: Option<String>,
    },
    /// Course catalog, one card per course
    Courses,
    /// Snapshot metadata and current preferences
    Status,
    /// Remember a group for future invocations
    UseGroup { group: String },
    /// Toggle the dark-mode preference
    DarkMode { setting: DarkModeSetting },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DarkModeSetting {
    On,
    Off,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let prefs_path = Preferences::default_path();
    let mut prefs = Preferences::load(&prefs_path);

    // Preference writes need no client.
    match &cli.command {
        Command::UseGroup { group } => {
            prefs.selected_group = Some(group.clone());
            prefs.save(&prefs_path).context("writing preferences")?;
            println!("Selected group {}", group);
            return Ok(());
        }
        Command::DarkMode { setting } => {
            prefs.dark_mode = matches!(setting, DarkModeSetting::On);
            prefs.save(&prefs_path).context("writing preferences")?;
            println!("Dark mode {}", if prefs.dark_mode { "on" } else { "off" });
            return Ok(());
        }
        _ => {}
    }

    let config = ClientConfig {
        base_url: ClientConfig::resolve_base_url(cli.base_url.clone()),
        ..ClientConfig::default()
    };
    let client = TimetableClient::with_config(config)?;

    match cli.command {
        Command::Today { group } => {
            let group = resolve_group(group, &prefs)?;
            let timetable = client.fetch_group_or_empty(&group).await;

            let weekday = clock::today_name();
            let now = clock::now_minutes();
            let today = views::todays_classes(&timetable, weekday);
            let next = views::next_class(&today, now);

            print!("{}", render::today_view(&group, weekday, &today, next, now));
        }
        Command::Week { group } => {
            let group = resolve_group(group, &prefs)?;
            let timetable = client.fetch_group_or_empty(&group).await;
            let week = views::weekly_view(&timetable);

            print!("{}", render::week_view(&group, &week));
        }
        Command::Search { query, group } => {
            let aggregate = client.fetch_all_or_empty().await;
            let outcome = views::search(&aggregate, &query, group.as_deref());

            print!("{}", render::search_view(&outcome));
        }
        Command::WatchSearch { group } => {
            run_watch_search(&client, group.as_deref()).await;
        }
        Command::Courses => {
            let catalog = client.fetch_courses_or_empty().await;
            print!("{}", render::courses_view(&catalog));
        }
        Command::Status => {
            let metadata = client.fetch_metadata_or_empty().await;
            print!(
                "{}",
                render::status_view(&metadata, &clock::now_clock_string(), prefs.dark_mode)
            );
        }
        Command::UseGroup { .. } | Command::DarkMode { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Interactive search loop: stdin lines feed the debouncer, so only the
/// last query of a quick burst runs. A blank line leaves the view, which
/// drops any pending query and the displayed results with it.
async fn run_watch_search(client: &TimetableClient, group_filter: Option<&str>) {
    let aggregate = client.fetch_all_or_empty().await;
    let (handle, mut debouncer) = SearchDebouncer::channel(SEARCH_DEBOUNCE);

    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                handle.leave();
                break;
            }
            handle.query(line);
        }
    });

    let mut state = ViewState::new();
    state.enter(View::Search);
    println!(
        "Searching {} group(s); blank line to leave.",
        aggregate.data.len()
    );

    while let Some(query) = debouncer.next_query().await {
        let token = state.begin_fetch();
        let outcome = views::search(&aggregate, &query, group_filter);
        state.complete(token, |s| match &outcome {
            SearchOutcome::Results(hits) => s.set_search_results(hits.clone()),
            SearchOutcome::NoQuery => s.clear_search_results(),
        });

        match &outcome {
            SearchOutcome::NoQuery => print!("{}", render::search_view(&outcome)),
            SearchOutcome::Results(_) => print!("{}", render::search_hits(state.search_results())),
        }
    }

    state.enter(View::Today);
    println!("Left search view.");
}

fn resolve_group(flag: Option<String>, prefs: &Preferences) -> anyhow::Result<String> {
    flag.or_else(|| prefs.selected_group.clone()).ok_or_else(|| {
        anyhow::anyhow!("no group selected; pass --group or run `timetable use-group <GROUP>`")
    })
}
