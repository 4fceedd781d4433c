fn main() -> anyhow::Result<()> {
    lingo_terminal::run()
}
