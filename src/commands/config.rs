use crate::core::{config::Config, error::Result, print_success};

pub fn execute_config(config: &Config, init: bool) -> Result<()> {
    if init {
        let path = Config::init_default_file()?;
        print_success(&format!("Config file at {}", path.display()));
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
