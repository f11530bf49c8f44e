use anyhow::Result;
use camino::Utf8PathBuf as PathBuf;
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .compact()
        .with_test_writer()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .ok();
    Ok(())
}

pub fn tests_fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}
