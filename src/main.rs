use anyhow::Context;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    pulseboard::run().context("pulseboard run failed")
}
