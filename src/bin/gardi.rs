use anyhow::Result;
use gardi::cli::{actions, actions::Action, start};

// Main function
fn main() -> Result<()> {
    // Start the program
    let action = start()?;

    // Handle the action
    match action {
        Action::Demo(args) => actions::demo::execute(args)?,
    }

    Ok(())
}
