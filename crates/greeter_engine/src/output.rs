use std::io::Write;
use std::time::Duration;

use greeter_base::{GreeterResult, PalHandle, ResultExt};
use tracing::{debug, instrument};

use crate::{
    DEFAULT_NAME, DEFAULT_PREFIX, Greeter, PrefixGreeter, TimestampDecorator,
    spawn_delayed_greeting,
};

/// Everything a single program run should print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingPlan {
    /// Salutation prefix.
    pub prefix: String,
    /// Primary subject, greeted first.
    pub name: String,
    /// Additional subjects, greeted together after the primary one.
    pub also: Vec<String>,
    /// Prepend the call-time timestamp to every greeting.
    pub timestamp: bool,
    /// Greet the primary subject once more after this delay.
    pub delay: Option<Duration>,
}

impl Default for GreetingPlan {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            name: DEFAULT_NAME.to_string(),
            also: Vec::new(),
            timestamp: false,
            delay: None,
        }
    }
}

impl GreetingPlan {
    /// Build the greeter described by this plan.
    pub fn greeter(&self, pal: &PalHandle) -> Box<dyn Greeter + Send> {
        let greeter = PrefixGreeter::new(self.prefix.clone());
        if self.timestamp {
            Box::new(TimestampDecorator::new(greeter, pal.clone()))
        } else {
            Box::new(greeter)
        }
    }
}

/// Write one greeting line for `name`.
pub fn write_greeting<W, G>(writer: &mut W, greeter: &G, name: &str) -> GreeterResult<()>
where
    W: Write + ?Sized,
    G: Greeter + ?Sized,
{
    writeln!(writer, "{}", greeter.format(name))
        .with_context(|| format!("Failed to write greeting for '{}'", name))
}

/// Print all greetings described by `plan`.
///
/// Output order: the primary greeting, then the additional names (if any),
/// then the delayed greeting (if a delay was requested).
#[instrument(skip(pal, writer), fields(also = plan.also.len()))]
pub fn render_plan<W>(pal: &PalHandle, plan: &GreetingPlan, writer: &mut W) -> GreeterResult<()>
where
    W: Write + ?Sized,
{
    let greeter = plan.greeter(pal);
    write_greeting(writer, &greeter, &plan.name)?;

    match greeter.format_many(&plan.also) {
        Some(greetings) => writer
            .write_all(greetings.as_bytes())
            .context("Failed to write additional greetings")?,
        None => debug!("no additional names to greet"),
    }

    if let Some(delay) = plan.delay {
        let pending = spawn_delayed_greeting(pal, plan.greeter(pal), &plan.name, delay)?;
        let greeting = pending.wait()?;
        writeln!(writer, "{}", greeting).context("Failed to write delayed greeting")?;
    }

    writer.flush().context("Failed to flush greetings")
}
