// crates/enigma-cli/src/cmd/settings.rs

use anyhow::Context;
use clap::{Args, Subcommand};
use enigma_core::settings::defaults::default_settings;
use enigma_core::settings::format::settings_id_hex;
use enigma_core::settings::validate::validate_settings;
use tracing::info;

use crate::cmd::encrypt::{resolve_settings, MachineArgs};
use crate::io::settings_file;

#[derive(Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub cmd: SettingsCmd,
}

#[derive(Subcommand)]
pub enum SettingsCmd {
    /// Print the effective settings (file + flags) as TOML, with the settings id
    Show(ShowArgs),

    /// Write the built-in default settings to a TOML file
    Init(InitArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub machine: MachineArgs,
}

#[derive(Args)]
pub struct InitArgs {
    /// Output path (.toml)
    #[arg(long)]
    pub out: String,
}

pub fn run(args: SettingsArgs) -> anyhow::Result<()> {
    match args.cmd {
        SettingsCmd::Show(a) => cmd_show(a),
        SettingsCmd::Init(a) => cmd_init(a),
    }
}

fn cmd_show(a: ShowArgs) -> anyhow::Result<()> {
    let s = resolve_settings(&a.machine)?;
    validate_settings(&s).context("validate settings")?;

    println!("# settings_id = {}", settings_id_hex(&s));
    print!("{}", settings_file::to_toml(&s)?);
    Ok(())
}

fn cmd_init(a: InitArgs) -> anyhow::Result<()> {
    let s = default_settings();
    settings_file::save_settings(&a.out, &s)?;
    info!(out = %a.out, settings_id = %settings_id_hex(&s), "settings written");
    Ok(())
}
