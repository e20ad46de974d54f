use std::io::Write;

use clap::Parser;
use log::{info, warn};

use crate::command::{self, Command};
use crate::config::{Config, ConfigField, Workspace};
use crate::error::Result;
use crate::store::{open_store, SqliteStore, TaskStore};

pub const SETUP_GUIDE: &str = r#"
  Your conf file is not set up.

  REMOTE:
    To set up the server url:   wyd set --url="url:port"
    To set up the user:         wyd set --user="your name"

  LOCAL:
    To set up a local install:  wyd set --local

  LOGGING:
    To make wyd more verbal:    wyd set --dev
"#;

const UNKNOWN_COMMAND: &str = "This command is not recognized, maybe there's a typo? \
Do not hesitate to check wyd -h";

const UNKNOWN_SET_OPTION: &str = "The option has not been recognized, consult the help to \
check allowed options for the command set.";

const COMMANDS_HELP: &str = r#"COMMANDS:
  set       configure wyd (--url, --user, --local, --dev, --DB)
  new       create a new task
  add       alias of new
  create    alias of new
  done      close an open task
  close     alias of done
  delete    delete a task
  del       alias of delete
  rm        alias of delete
  list      list the 20 most recent tasks
  ls        alias of list
  update    overwrite the task details

EXAMPLES:
  wyd new "Pet the cat"
  wyd list
  wyd done 431
  wyd update 42 "Pet my cat"
  wyd delete 76"#;

#[derive(Parser, Debug)]
#[command(name = "wyd", version)]
#[command(about = "WYD is a CLI client for a What You Doin server", long_about = None)]
#[command(after_help = COMMANDS_HELP)]
pub struct Cli {
    /// Command to run
    pub command: Option<String>,

    /// Command arguments: a task id and/or a description
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// [set] Server url, e.g. "host:port"
    #[arg(long)]
    pub url: Option<String>,

    /// [set] User name sent to the server
    #[arg(long)]
    pub user: Option<String>,

    /// [set] Store tasks in a local database
    #[arg(long)]
    pub local: bool,

    /// [set] Verbose logging
    #[arg(long)]
    pub dev: bool,

    /// [set] (Re)create the local database table
    #[arg(long = "DB")]
    pub db: bool,
}

/// What a `set` invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetAction {
    Field(ConfigField),
    InitDatabase,
}

impl Cli {
    /// The first recognized `set` flag, in the order url, user, local, dev, DB.
    pub fn set_action(&self) -> Option<SetAction> {
        if let Some(url) = &self.url {
            Some(SetAction::Field(ConfigField::Url(url.clone())))
        } else if let Some(user) = &self.user {
            Some(SetAction::Field(ConfigField::User(user.clone())))
        } else if self.local {
            Some(SetAction::Field(ConfigField::Local))
        } else if self.dev {
            Some(SetAction::Field(ConfigField::Dev))
        } else if self.db {
            Some(SetAction::InitDatabase)
        } else {
            None
        }
    }
}

/// Turns the outcome of `Config::load` into the configuration to run with,
/// warning when there is none.
pub fn resolve_config(workspace: &Workspace, loaded: Result<Option<Config>>) -> Option<Config> {
    match loaded {
        Ok(Some(config)) => Some(config),
        Ok(None) => {
            warn!("{SETUP_GUIDE}");
            None
        }
        Err(e) => {
            warn!("Cannot read {}: {e}", workspace.config_path().display());
            None
        }
    }
}

pub fn run<W: Write>(
    cli: &Cli,
    workspace: &Workspace,
    config: Option<&Config>,
    out: &mut W,
) -> Result<()> {
    let Some(name) = cli.command.as_deref() else {
        return Ok(());
    };

    if name == "set" {
        cmd_set(cli, workspace);
        return Ok(());
    }

    let Some(config) = config else {
        return Ok(());
    };

    match Command::from_name(name) {
        Some(command) => {
            let store = open_store(config, workspace);
            command::execute(store.as_ref(), command, &cli.args, out)
        }
        None => {
            warn!("{UNKNOWN_COMMAND}");
            Ok(())
        }
    }
}

fn cmd_set(cli: &Cli, workspace: &Workspace) {
    let Some(action) = cli.set_action() else {
        warn!("{UNKNOWN_SET_OPTION}");
        return;
    };

    if let Err(e) = apply_set(&action, workspace) {
        warn!("{e}");
    }
}

fn apply_set(action: &SetAction, workspace: &Workspace) -> Result<()> {
    match action {
        SetAction::Field(field) => {
            Config::set_field(workspace.config_path(), field)?;
            if *field == ConfigField::Local {
                SqliteStore::new(workspace.db_path()).initialize()?;
            }
            info!("{}", field.confirmation());
        }
        SetAction::InitDatabase => {
            let store = SqliteStore::new(workspace.db_path());
            store.initialize()?;
            info!("Local DB ready at {}", store.path().display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("wyd").chain(args.iter().copied())).unwrap()
    }

    fn run_in(ws: &Workspace, args: &[&str]) -> (Result<()>, String) {
        let cli = parse(args);
        let config = Config::load(ws.config_path()).ok().flatten();
        let mut out = Vec::new();
        let result = run(&cli, ws, config.as_ref(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_positionals() {
        let cli = parse(&["update", "42", "Pet my cat"]);
        assert_eq!(cli.command.as_deref(), Some("update"));
        assert_eq!(cli.args, vec!["42", "Pet my cat"]);
    }

    #[test]
    fn test_unknown_flags_are_kept_as_args() {
        let cli = parse(&["set", "--colour=red"]);
        assert_eq!(cli.args, vec!["--colour=red"]);
        assert_eq!(cli.set_action(), None);
    }

    #[test]
    fn test_set_flag_precedence() {
        let cli = parse(&["set", "--dev", "--url=host:8080", "--local"]);
        assert_eq!(
            cli.set_action(),
            Some(SetAction::Field(ConfigField::Url("host:8080".into())))
        );

        let cli = parse(&["set", "--dev", "--local"]);
        assert_eq!(cli.set_action(), Some(SetAction::Field(ConfigField::Local)));

        let cli = parse(&["set", "--DB"]);
        assert_eq!(cli.set_action(), Some(SetAction::InitDatabase));

        assert_eq!(parse(&["set"]).set_action(), None);
    }

    #[test]
    fn test_set_local_creates_database() {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::new(temp.path());

        let (result, out) = run_in(&ws, &["set", "--local"]);
        assert!(result.is_ok());
        assert!(out.is_empty());
        assert!(ws.db_path().exists());

        let config = Config::load(ws.config_path()).unwrap().unwrap();
        assert!(config.is_local());
    }

    #[test]
    fn test_set_without_option_changes_nothing() {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::new(temp.path());

        let (result, _) = run_in(&ws, &["set"]);
        assert!(result.is_ok());
        assert!(!ws.config_path().exists());
    }

    #[test]
    fn test_set_with_broken_config_is_recovered() {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::new(temp.path());
        fs::write(ws.config_path(), "{broken").unwrap();

        let (result, _) = run_in(&ws, &["set", "--dev"]);
        assert!(result.is_ok());
        assert_eq!(fs::read_to_string(ws.config_path()).unwrap(), "{broken");
    }

    #[test]
    fn test_unconfigured_does_nothing() {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::new(temp.path());

        let (result, out) = run_in(&ws, &["new", "Pet the cat"]);
        assert!(result.is_ok());
        assert!(out.is_empty());
        assert!(!ws.db_path().exists());
    }

    #[test]
    fn test_local_round_trip() {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::new(temp.path());
        run_in(&ws, &["set", "--local"]).0.unwrap();

        let (_, out) = run_in(&ws, &["add", "Pet the cat"]);
        assert_eq!(out, "Task added: Pet the cat\n");

        let (_, out) = run_in(&ws, &["ls"]);
        assert_eq!(out, "#1 - [OPEN] Pet the cat\n");
    }

    #[test]
    fn test_unknown_command_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::new(temp.path());
        run_in(&ws, &["set", "--local"]).0.unwrap();

        let (result, out) = run_in(&ws, &["frobnicate"]);
        assert!(result.is_ok());
        assert!(out.is_empty());
    }

    #[test]
    fn test_remote_mode_reports_error() {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::new(temp.path());
        run_in(&ws, &["set", "--url=host:8080"]).0.unwrap();

        let (result, out) = run_in(&ws, &["list"]);
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
