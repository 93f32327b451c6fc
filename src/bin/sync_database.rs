fn main() -> anyhow::Result<()> {
    pastpaper_tools::cli::sync::run()
}
