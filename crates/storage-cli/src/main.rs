//! # Bootcamp Storage CLI
//!
//! Reads the `users` table through the repository.
//!
//! ```text
//! bootcamp-storage [list]       one JSON line per user
//! bootcamp-storage get <uuid>   a single user
//! ```

use std::sync::Arc;
use storage_config::ConfigLoader;
use storage_core::{init_tracing, HasComponent, StorageError, StorageResult, User, UserId};
use storage_repository::{build_repository_module, DatabasePoolInterface, UserRepository};
use tracing::{error, info, warn};

const USAGE: &str = "usage: bootcamp-storage [list | get <uuid>]";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    List,
    Get(UserId),
}

impl Command {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, String> {
        let mut args = args.into_iter();
        match (args.next().as_deref(), args.next(), args.next()) {
            (None | Some("list"), None, None) => Ok(Self::List),
            (Some("get"), Some(id), None) => UserId::parse(&id)
                .map(Self::Get)
                .map_err(|e| format!("invalid uuid '{}': {}", id, e)),
            _ => Err(USAGE.to_string()),
        }
    }
}

#[tokio::main]
async fn main() {
    let command = match Command::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(command).await {
        error!("Application error: {}", e);
        eprintln!("bootcamp-storage: {}", e);
        std::process::exit(1);
    }
}

async fn run(command: Command) -> StorageResult<()> {
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    init_tracing(&config.logging)?;

    info!("Starting {}", config.app.name);
    info!("Environment: {}", config.app.environment);

    let module = build_repository_module(&config.database).await?;
    let pool: Arc<dyn DatabasePoolInterface> = module.resolve();
    let repo: Arc<dyn UserRepository> = module.resolve();

    pool.health_check().await?;

    let outcome = execute(repo.as_ref(), command).await;
    pool.close().await;
    outcome
}

async fn execute(repo: &dyn UserRepository, command: Command) -> StorageResult<()> {
    match command {
        Command::List => {
            let users = repo.get_all().await?;
            info!("Found {} users", users.len());
            for user in &users {
                print_user(user)?;
            }
        }
        Command::Get(id) => match repo.get_one(id).await? {
            Some(user) => print_user(&user)?,
            None => warn!("User {} not found", id),
        },
    }
    Ok(())
}

fn print_user(user: &User) -> StorageResult<()> {
    let line = serde_json::to_string(user)
        .map_err(|e| StorageError::internal(format!("JSON serialization error: {}", e)))?;
    println!("{}", line);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_no_args_lists() {
        assert_eq!(Command::parse(args(&[])), Ok(Command::List));
        assert_eq!(Command::parse(args(&["list"])), Ok(Command::List));
    }

    #[test]
    fn test_get_parses_uuid() {
        let uuid = "550e8400-e29b-41d4-a716-446655440000";
        assert_eq!(
            Command::parse(args(&["get", uuid])),
            Ok(Command::Get(UserId::parse(uuid).unwrap()))
        );
    }

    #[test]
    fn test_get_rejects_bad_uuid() {
        let err = Command::parse(args(&["get", "nope"])).unwrap_err();
        assert!(err.contains("invalid uuid"));
    }

    #[test]
    fn test_unknown_command_prints_usage() {
        assert_eq!(Command::parse(args(&["drop"])), Err(USAGE.to_string()));
        assert_eq!(Command::parse(args(&["get"])), Err(USAGE.to_string()));
        assert_eq!(Command::parse(args(&["list", "extra"])), Err(USAGE.to_string()));
    }
}
