use crate::commands::open::edit;
use crate::core::{config::Config, error::Result, host::ExternalEditorHost, plugin::Scratchpad};

pub fn execute_create(config: Config, name: Option<String>, open: bool) -> Result<()> {
    let mut scratchpad = Scratchpad::setup(config, ExternalEditorHost::from_env())?;
    let path = scratchpad.create(name.as_deref())?;
    log::debug!("Created {}", path.display());

    if open {
        edit(&mut scratchpad, Some(path))
    } else {
        println!("{}", path.display());
        Ok(())
    }
}
