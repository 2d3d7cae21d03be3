//! The scratchpad entry point.
//!
//! [`Scratchpad`] is the context object a host holds on to: it is built once by
//! [`Scratchpad::setup`] and owns the config, the session and the picker. Every
//! user-facing operation goes through it.
//!
//! The workspace is read from the process working directory on every
//! operation, so a host that changes directory gets the new workspace's notes.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::picker::{picker_for, Picker};
use crate::core::session::{EditorHost, Session};
use crate::core::state::SessionStatus;
use crate::core::store::{
    create_named_scratch_file, get_or_create_latest_scratch_file, list_scratch_files,
};
use crate::core::workspace::Workspace;
use std::path::PathBuf;

pub struct Scratchpad<H: EditorHost> {
    config: Config,
    /// Pinned workspace; `None` follows the process working directory
    workspace: Option<Workspace>,
    session: Session<H>,
    picker: Box<dyn Picker>,
}

impl<H: EditorHost> Scratchpad<H> {
    /// Build a scratchpad that follows the process working directory
    pub fn setup(config: Config, host: H) -> Result<Self> {
        let picker = picker_for(config.picker_provider);
        Ok(Self::assemble(config, host, None, picker))
    }

    /// Build a scratchpad pinned to `workspace`
    pub fn with_parts(
        config: Config,
        host: H,
        workspace: Workspace,
        picker: Box<dyn Picker>,
    ) -> Self {
        Self::assemble(config, host, Some(workspace), picker)
    }

    fn assemble(
        config: Config,
        host: H,
        workspace: Option<Workspace>,
        picker: Box<dyn Picker>,
    ) -> Self {
        log::debug!(
            "Scratchpad ready: root={}, extension={}, picker={}",
            config.scratch_root.display(),
            config.default_file_extension,
            picker.name()
        );
        Self {
            config,
            workspace,
            session: Session::new(host),
            picker,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The workspace operations run against right now
    pub fn workspace(&self) -> Result<Workspace> {
        match &self.workspace {
            Some(workspace) => Ok(workspace.clone()),
            None => Workspace::from_current_dir(),
        }
    }

    pub fn session(&self) -> &Session<H> {
        &self.session
    }

    pub fn host(&self) -> &H {
        self.session.host()
    }

    pub fn host_mut(&mut self) -> &mut H {
        self.session.host_mut()
    }

    pub fn status(&self) -> SessionStatus {
        self.session.status()
    }

    pub fn scratch_directory(&self) -> Result<PathBuf> {
        self.workspace()?.resolve_scratch_directory(&self.config.scratch_root)
    }

    /// Most recent scratch file, created when there is none yet
    pub fn latest(&self) -> Result<PathBuf> {
        get_or_create_latest_scratch_file(
            &self.workspace()?,
            &self.config.scratch_root,
            &self.config.default_file_extension,
        )
    }

    /// Scratch files of this workspace, newest first
    pub fn entries(&self) -> Result<Vec<PathBuf>> {
        list_scratch_files(&self.workspace()?, &self.config.scratch_root)
    }

    /// Open `path`, or the latest scratch file when no path is given
    pub fn open(&mut self, path: Option<PathBuf>) -> Result<SessionStatus> {
        let path = match path {
            Some(path) => path,
            None => self.latest()?,
        };
        self.session.open(&path, &self.config.float_window_style)
    }

    pub fn close(&mut self) -> Result<()> {
        self.session.close()
    }

    pub fn toggle(&mut self) -> Result<SessionStatus> {
        if self.session.is_open() {
            self.close()?;
            Ok(SessionStatus::Closed)
        } else {
            self.open(None)
        }
    }

    /// Create a new scratch file, named `name` or synthesized from the
    /// configured extension
    pub fn create(&self, name: Option<&str>) -> Result<PathBuf> {
        let directory = self.scratch_directory()?;
        create_named_scratch_file(
            &directory,
            Some(self.config.default_file_extension.as_str()),
            name,
        )
    }

    /// Let the user pick a scratch file and open it
    pub fn list(&mut self) -> Result<SessionStatus> {
        self.close()?;
        let entries = self.entries()?;

        let Self {
            config,
            session,
            picker,
            ..
        } = self;
        let style = &config.float_window_style;
        picker.present(&entries, &mut |selected: PathBuf| {
            log::debug!("Picked {}", selected.display());
            session.open(&selected, style).map(|_| ())
        })?;

        Ok(self.session.status())
    }
}
