mod config;
mod logging;
mod session;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use config::AppConfig;
use folio_adapters::{
    present_like_outcome, present_media_row, present_photographer_row, present_seed_report,
    FsThumbnailGenerator, InMemoryStaleSet, JsonSeedSource, SqlitePortfolioRepository,
    SystemClock, WalkdirContentScanner,
};
use folio_application::{
    BootstrapCommand, LikeMediaCommand, LikeOutcome, ListPhotographersQuery,
    PhotographerProfileQuery, PortfolioService, SeedDataCommand,
};
use folio_domain::{total_likes, MediaId, PhotographerId, SortKey};
use tracing::info;

fn main() -> ExitCode {
    logging::init_logging();
    let args: Vec<String> = std::env::args().collect();
    let config = AppConfig::default();
    let stale = InMemoryStaleSet::new();

    let service = build_portfolio_service(&config, stale.clone());
    if let Err(error) = service.bootstrap(BootstrapCommand) {
        eprintln!("failed to bootstrap folio: {error}");
        return ExitCode::from(1);
    }

    let command = parse_command(&args);
    match run_command(command, service, stale, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_portfolio_service(config: &AppConfig, stale: InMemoryStaleSet) -> PortfolioService {
    PortfolioService::new(
        Box::new(SqlitePortfolioRepository::new(config.database_path.clone())),
        Box::new(JsonSeedSource),
        Box::new(FsThumbnailGenerator),
        Box::new(WalkdirContentScanner),
        Box::new(stale),
        Box::new(SystemClock),
    )
}

#[derive(Debug, Clone)]
enum Command {
    Ui,
    Seed {
        photographers: Option<String>,
        media: Option<String>,
    },
    List,
    Profile {
        photographer_id: i64,
        sort: Option<String>,
    },
    Like {
        photographer_id: i64,
        media_id: i64,
    },
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    if args.len() <= 1 {
        return Ok(Command::Ui);
    }

    match args[1].as_str() {
        "ui" => Ok(Command::Ui),
        "seed" => Ok(Command::Seed {
            photographers: args.get(2).cloned(),
            media: args.get(3).cloned(),
        }),
        "list" => Ok(Command::List),
        "profile" => {
            if args.len() < 3 {
                return Err(CommandError::Usage("missing photographer id".to_string()));
            }
            let photographer_id = parse_id(&args[2], "photographer id")?;
            Ok(Command::Profile {
                photographer_id,
                sort: args.get(3).cloned(),
            })
        }
        "like" => {
            if args.len() < 4 {
                return Err(CommandError::Usage(
                    "missing photographer id or media id".to_string(),
                ));
            }
            let photographer_id = parse_id(&args[2], "photographer id")?;
            let media_id = parse_id(&args[3], "media id")?;
            Ok(Command::Like {
                photographer_id,
                media_id,
            })
        }
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn parse_id(raw: &str, what: &str) -> Result<i64, CommandError> {
    raw.parse::<i64>()
        .map_err(|_| CommandError::Usage(format!("invalid {what}: {raw}")))
}

fn run_command(
    command: Result<Command, CommandError>,
    service: PortfolioService,
    stale: InMemoryStaleSet,
    config: &AppConfig,
) -> Result<(), CommandError> {
    match command? {
        Command::Ui => {
            ui::launch_window(service, stale, config.clone()).map_err(CommandError::Runtime)
        }
        Command::Seed {
            photographers,
            media,
        } => {
            let report = service
                .seed(SeedDataCommand {
                    photographers_path: PathBuf::from(
                        photographers.unwrap_or_else(|| config.photographers_seed.clone()),
                    ),
                    media_path: PathBuf::from(media.unwrap_or_else(|| config.media_seed.clone())),
                    content_dir: config.content_dir.clone(),
                    cache_root: config.cache_dir.clone(),
                })
                .map_err(|error| CommandError::Runtime(format!("seed failed: {error}")))?;
            info!(
                photographers = report.photographers,
                media = report.media_items,
                "seed finished"
            );
            println!("{}", present_seed_report(&report));
            Ok(())
        }
        Command::List => {
            let photographers = service
                .list_photographers(ListPhotographersQuery)
                .map_err(|error| CommandError::Runtime(format!("list failed: {error}")))?;
            if photographers.is_empty() {
                println!("no photographers in store (run `folio seed` first)");
                return Ok(());
            }
            for photographer in photographers {
                println!("{}", present_photographer_row(&photographer));
            }
            Ok(())
        }
        Command::Profile {
            photographer_id,
            sort,
        } => {
            let photographer_id = PhotographerId::new(photographer_id)
                .map_err(|error| CommandError::Usage(format!("invalid photographer id: {error}")))?;
            // Unrecognized external sort values fall back to popularity.
            let sort_key = sort
                .as_deref()
                .map(|raw| SortKey::parse(raw).unwrap_or(SortKey::Popularity))
                .unwrap_or(SortKey::Popularity);

            let profile = service
                .photographer_profile(PhotographerProfileQuery {
                    photographer_id,
                    sort: Some(sort_key),
                })
                .map_err(|error| CommandError::Runtime(format!("profile failed: {error}")))?;

            println!("{}", present_photographer_row(&profile.photographer));
            println!(
                "{} — {} likes, trié par {}",
                profile.photographer.tagline,
                total_likes(&profile.medias),
                sort_key.as_str()
            );
            for media in &profile.medias {
                println!("{}", present_media_row(media));
            }
            Ok(())
        }
        Command::Like {
            photographer_id,
            media_id,
        } => {
            let photographer_id = PhotographerId::new(photographer_id)
                .map_err(|error| CommandError::Usage(format!("invalid photographer id: {error}")))?;
            let media_id = MediaId::new(media_id)
                .map_err(|error| CommandError::Usage(format!("invalid media id: {error}")))?;

            let outcome = service.like_media(LikeMediaCommand {
                media_id,
                photographer_id,
            });
            match outcome {
                LikeOutcome::Recorded => {
                    println!("{}", present_like_outcome(&outcome));
                    Ok(())
                }
                LikeOutcome::Failed(_) => {
                    Err(CommandError::Runtime(present_like_outcome(&outcome)))
                }
            }
        }
    }
}

fn print_usage() {
    println!("usage:");
    println!("  folio ui");
    println!("  folio seed [photographers.json] [media.json]");
    println!("  folio list");
    println!("  folio profile <photographer_id> [popularity|date|title]");
    println!("  folio like <photographer_id> <media_id>");
}
