// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};

use crate::store::Store;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("backup", _)) => {
            store.backup()?;
            println!("Backup created");
        }
        Some(("restore", sub)) => {
            if !sub.get_flag("force") {
                bail!("Restoring overwrites current records; pass --force to confirm");
            }
            match store.restore()? {
                Some(timestamp) => println!("Records restored from backup taken {}", timestamp),
                None => eprintln!("No backup available"),
            }
        }
        Some(("clear", sub)) => {
            if !sub.get_flag("force") {
                bail!("Clearing deletes every record; pass --force to confirm");
            }
            store.clear_all()?;
            println!("All records deleted");
        }
        _ => {}
    }
    Ok(())
}
