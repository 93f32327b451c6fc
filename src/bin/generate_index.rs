fn main() -> anyhow::Result<()> {
    pastpaper_tools::cli::generate::run()
}
