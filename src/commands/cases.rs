//! Cases command: list built-in fixture graphs or emit one as a document

use crate::cli::{Cli, OutputFormat};
use waypath_core::cases;
use waypath_core::error::Result;

/// Execute the cases command
pub fn execute(cli: &Cli, id: Option<&str>) -> Result<()> {
    match id {
        Some(id) => {
            let case = cases::find(id)?;
            // Emit the bare document so it can be saved and fed back in via
            // --graph
            println!("{}", serde_json::to_string_pretty(&case.document)?);
        }
        None => match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&cases::builtin())?);
            }
            OutputFormat::Human => {
                for case in cases::builtin() {
                    println!(
                        "{:<16} {} (start {}, end {})",
                        case.id, case.name, case.start, case.end
                    );
                    if !cli.quiet {
                        println!("  {}", case.description);
                    }
                }
            }
        },
    }

    Ok(())
}
