//! Configuration setup command.

use crate::{
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        match Config::delete()? {
            true => msg_success!(Message::ConfigDeleted),
            false => msg_info!(Message::ConfigNothingToDelete),
        }
        return Ok(());
    }

    Config::init()?.save()?;
    msg_success!(Message::ConfigSaved);
    Ok(())
}
