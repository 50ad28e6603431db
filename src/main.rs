fn main() -> anyhow::Result<()> {
    unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
    recite::logging::init()?;
    recite::app_core::Recite::new()?.run()?;
    Ok(())
}
