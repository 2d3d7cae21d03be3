use crate::core::{config::Config, error::Result, host::ExternalEditorHost, plugin::Scratchpad};

/// Print the latest scratch file, creating one when the workspace has none
pub fn execute_path(config: Config) -> Result<()> {
    let scratchpad = Scratchpad::setup(config, ExternalEditorHost::from_env())?;
    println!("{}", scratchpad.latest()?.display());
    Ok(())
}
