use anyhow::Result;
use bulteno::cli::start;

// Main function
fn main() -> Result<()> {
    // Start the program
    let action = start()?;

    // Handle the action
    action.execute()?;

    Ok(())
}
