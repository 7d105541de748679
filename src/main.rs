// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use plata::{cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut store = store::Store::open_default()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Data store initialized at {}", store::data_path()?.display());
        }
        Some(("income", sub)) => commands::income::handle(&mut store, sub)?,
        Some(("expense", sub)) => commands::expense::handle(&mut store, sub)?,
        Some(("debt", sub)) => commands::debt::handle(&mut store, sub)?,
        Some(("saving", sub)) => commands::saving::handle(&mut store, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&store, sub)?,
        Some(("report", sub)) => commands::report::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("project", sub)) => commands::projection::handle(&store, sub)?,
        Some(("goals", sub)) => commands::goals::handle(&store, sub)?,
        Some(("data", sub)) => commands::data::handle(&mut store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
