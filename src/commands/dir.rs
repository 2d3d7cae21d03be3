use crate::core::{config::Config, error::Result, host::ExternalEditorHost, plugin::Scratchpad};

pub fn execute_dir(config: Config) -> Result<()> {
    let scratchpad = Scratchpad::setup(config, ExternalEditorHost::from_env())?;
    println!("{}", scratchpad.scratch_directory()?.display());
    Ok(())
}
