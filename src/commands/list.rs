use crate::core::{
    config::Config, error::Result, host::ExternalEditorHost, plugin::Scratchpad, print_success,
    state::SessionStatus,
};

pub fn execute_list(config: Config, plain: bool) -> Result<()> {
    let mut scratchpad = Scratchpad::setup(config, ExternalEditorHost::from_env())?;

    if plain {
        for entry in scratchpad.entries()? {
            println!("{}", entry.display());
        }
        return Ok(());
    }

    if let SessionStatus::Open(active) = scratchpad.list()? {
        scratchpad.close()?;
        print_success(&format!("Saved {}", active.path.display()));
    }
    Ok(())
}
