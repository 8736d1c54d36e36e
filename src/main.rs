fn main() -> anyhow::Result<()> {
    textsurvey_lib::run()
}
