use anyhow::Result;

fn main() -> Result<()> {
    aim_session_exporter::cli::run()
}
