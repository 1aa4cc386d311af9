use std::{thread, time::Duration};

use events64::{BoxError, Event, DEFAULT_EMITTER};

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    DEFAULT_EMITTER.set_debug(true);
    DEFAULT_EMITTER.register(|event: &Event| -> Result<(), BoxError> {
        println!("{} {} {}", event.name(), event.ty(), event.value());
        Ok(())
    });

    DEFAULT_EMITTER.count("demo.startups")?;
    DEFAULT_EMITTER.process_start("demo")?;
    thread::sleep(Duration::from_millis(250));
    DEFAULT_EMITTER.process_end_with("demo", "demo", "ok")?;
    Ok(())
}
