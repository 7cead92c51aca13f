//! Keka token management: store, import from a browser storage dump, show
//! and clear.

use crate::libs::messages::Message;
use crate::libs::token::{looks_like_jwt, mask, token_store, StorageDump, TokenSource};
use crate::{msg_bail_anyhow, msg_info, msg_print, msg_success, msg_warning};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct TokenArgs {
    #[command(subcommand)]
    command: TokenCommand,
}

#[derive(Debug, Subcommand)]
enum TokenCommand {
    /// Store a token (prompts when no value is given)
    Set {
        /// The access token
        value: Option<String>,
    },
    /// Import the token from a localStorage/sessionStorage JSON dump
    Import {
        /// Path to the dump file
        file: PathBuf,
    },
    /// Show which token would be used
    Show {
        /// Print the whole token instead of a masked one
        #[arg(long)]
        reveal: bool,
    },
    /// Remove the stored token
    Clear,
}

pub fn cmd(args: TokenArgs) -> Result<()> {
    match args.command {
        TokenCommand::Set { value } => set(value),
        TokenCommand::Import { file } => import(file),
        TokenCommand::Show { reveal } => show(reveal),
        TokenCommand::Clear => clear(),
    }
}

fn set(value: Option<String>) -> Result<()> {
    let store = token_store();
    let token = match value {
        Some(value) => {
            let value = value.trim().to_string();
            store.store(&value)?;
            value
        }
        None => store.prompt()?,
    };

    if !looks_like_jwt(token.trim()) {
        msg_warning!(Message::TokenNotJwt);
    }
    msg_success!(Message::TokenStored);
    Ok(())
}

fn import(file: PathBuf) -> Result<()> {
    let contents = fs::read_to_string(&file).with_context(|| format!("reading {}", file.display()))?;
    let dump = StorageDump::from_json(&contents).with_context(|| format!("parsing {}", file.display()))?;

    let Some(extracted) = dump.extract() else {
        msg_bail_anyhow!(Message::TokenNotInDump);
    };

    token_store().store(&extracted.token)?;
    msg_success!(Message::TokenImported(extracted.source));
    Ok(())
}

fn show(reveal: bool) -> Result<()> {
    let resolved = TokenSource::new(None).resolve()?;
    let shown = if reveal { resolved.token.clone() } else { mask(&resolved.token) };
    msg_print!(Message::TokenResolved {
        origin: resolved.origin.to_string(),
        masked: shown,
    });
    Ok(())
}

fn clear() -> Result<()> {
    match token_store().clear()? {
        true => msg_success!(Message::TokenCleared),
        false => msg_info!(Message::TokenNotStored),
    }
    Ok(())
}
