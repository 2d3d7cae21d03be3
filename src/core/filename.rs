use rand::Rng;

/// Build a default scratch filename: `<YYYY-MM-DD-HH-mm>-<8 hex>.<extension>`.
///
/// The random suffix only has to keep names apart within the same minute, so
/// the thread-local RNG is used.
pub fn synthesize_default_filename(extension: &str) -> String {
    let timestamp = chrono::Local::now().format("%Y-%m-%d-%H-%M");
    let suffix: u32 = rand::thread_rng().gen();
    format!("{timestamp}-{suffix:08x}.{extension}")
}
