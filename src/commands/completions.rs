// SPDX-License-Identifier: AGPL-3.0-or-later
//! Shell completion generation

use anyhow::Result;
use clap_complete::Shell;

/// Run completions command
pub fn run(shell: Shell, cmd: &mut clap::Command) -> Result<()> {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, &mut std::io::stdout());
    Ok(())
}
