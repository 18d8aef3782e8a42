use crate::client::{Client, Error};
use crate::core::types::{Field, State};
use crate::scope;
use crate::storage;
use crate::util::random::FromRandom;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[clap(
    name = "livecoding-util",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS")
)]
pub struct Options {
    #[clap(long, env = "LIVECODING_CLIENT_ID")]
    id: Option<String>,
    #[clap(long, env = "LIVECODING_CLIENT_SECRET", hide_env_values = true)]
    secret: Option<String>,
    #[clap(long, env = "LIVECODING_REDIRECT_URL")]
    redirect_url: Option<String>,
    #[clap(long, env = "LIVECODING_SCOPE")]
    scope: Option<String>,
    #[clap(long, env = "LIVECODING_STORAGE")]
    storage: Option<String>,
    #[clap(subcommand)]
    command: SubCommand,
}

#[derive(Subcommand)]
enum SubCommand {
    /// Validate the configured credentials
    Check,
    /// Print the validated configuration as JSON, without the secret
    Show,
    /// Print an authorization link with a fresh state value
    AuthorizeUrl,
    /// List the scopes a client may request
    ListScopes,
    /// List the available storage backends
    ListStorages,
}

impl Options {
    fn credentials(&self) -> Vec<(&'static str, String)> {
        let supplied = [
            (Field::Id, &self.id),
            (Field::Secret, &self.secret),
            (Field::RedirectUrl, &self.redirect_url),
            (Field::Scope, &self.scope),
            (Field::Storage, &self.storage),
        ];

        supplied
            .iter()
            .filter_map(|&(field, value)| value.as_ref().map(|v| (field.as_str(), v.clone())))
            .collect()
    }

    fn client(&self) -> Result<Client, Error> {
        Client::new(self.credentials())
    }
}

fn check(opts: &Options) -> Result<(), Error> {
    opts.client()?;
    println!("OK");
    Ok(())
}

fn show(opts: &Options) -> Result<(), Error> {
    let client = opts.client()?;
    println!("{}", serde_json::to_string_pretty(&client)?);
    Ok(())
}

fn authorize_url(opts: &Options) -> Result<(), Error> {
    let client = opts.client()?;
    let url = client.authorize_url(&State::from_random())?;
    println!("{}", url);
    Ok(())
}

fn list_scopes() {
    for name in scope::names().iter() {
        println!("{}", name);
    }
}

fn list_storages() {
    for name in storage::names().iter() {
        println!("{}", name);
    }
}

pub fn run_cli_action(opts: Options) -> Result<(), Error> {
    use SubCommand::*;

    match &opts.command {
        Check => check(&opts),
        Show => show(&opts),
        AuthorizeUrl => authorize_url(&opts),
        ListScopes => {
            list_scopes();
            Ok(())
        }
        ListStorages => {
            list_storages();
            Ok(())
        }
    }
}
