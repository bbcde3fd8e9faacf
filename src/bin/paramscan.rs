fn main() -> anyhow::Result<()> {
    paramscan::tools::cli::run()
}
