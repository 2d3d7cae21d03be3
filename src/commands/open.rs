use crate::core::{
    config::Config,
    error::Result,
    host::ExternalEditorHost,
    plugin::Scratchpad,
    print_success,
    session::EditorHost,
    state::SessionStatus,
};
use std::path::PathBuf;

pub fn execute_open(config: Config, path: Option<PathBuf>) -> Result<()> {
    let mut scratchpad = Scratchpad::setup(config, ExternalEditorHost::from_env())?;
    edit(&mut scratchpad, path)
}

/// Open a scratch file and close it again once the editor is done with it
pub fn edit<H: EditorHost>(scratchpad: &mut Scratchpad<H>, path: Option<PathBuf>) -> Result<()> {
    match scratchpad.open(path)? {
        SessionStatus::Open(active) => {
            scratchpad.close()?;
            print_success(&format!("Saved {}", active.path.display()));
        }
        // The host already told the user why
        SessionStatus::Closed => log::debug!("Scratch window was not opened"),
    }
    Ok(())
}
