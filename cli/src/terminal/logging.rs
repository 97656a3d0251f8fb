use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

pub const PRINT_TARGET: &str = "bmi::print";
pub const SUCCESS_TARGET: &str = "bmi::success";

pub struct BmiFormatter;

impl<S, N> FormatEvent<S, N> for BmiFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() != PRINT_TARGET {
            let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
                match *meta.level() {
                    Level::INFO if meta.target() == SUCCESS_TARGET => ("[+]", |s| s.green().bold()),
                    Level::TRACE => ("[ ]", |s| s.dimmed()),
                    Level::DEBUG => ("[?]", |s| s.blue()),
                    Level::INFO => ("[*]", |s| s.cyan().bold()),
                    Level::WARN => ("[!]", |s| s.yellow().bold()),
                    Level::ERROR => ("[-]", |s| s.red().bold()),
                };
            write!(writer, "{} ", color_func(symbol.into()))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the flags for log
/// events; terminal output is always let through.
pub fn init(verbose: bool, quiet: u8) -> anyhow::Result<()> {
    let level: &str = match (verbose, quiet) {
        (true, _) => "debug",
        (false, 0 | 1) => "info",
        (false, _) => "warn",
    };
    let base: EnvFilter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(with_output_targets(base)?)
        .event_format(BmiFormatter)
        .init();
    Ok(())
}

/// Enables the print and success targets on top of any base filter.
pub fn with_output_targets(filter: EnvFilter) -> anyhow::Result<EnvFilter> {
    Ok(filter
        .add_directive(format!("{PRINT_TARGET}=info").parse()?)
        .add_directive(format!("{SUCCESS_TARGET}=info").parse()?))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    fn enabled_under(base: &str) -> (bool, bool, bool) {
        let filter = with_output_targets(EnvFilter::new(base)).unwrap();
        let subscriber = tracing_subscriber::registry().with(filter);
        tracing::subscriber::with_default(subscriber, || {
            (
                tracing::enabled!(target: "bmi::print", Level::INFO),
                tracing::enabled!(target: "bmi::success", Level::INFO),
                tracing::enabled!(target: "bmi_core::batch", Level::INFO),
            )
        })
    }

    #[test]
    fn test_output_targets_survive_warn_base() {
        let (print, success, other) = enabled_under("warn");
        assert!(print);
        assert!(success);
        assert!(!other);
    }

    #[test]
    fn test_output_targets_survive_narrow_base() {
        let (print, success, _) = enabled_under("bmi_core=debug");
        assert!(print);
        assert!(success);
    }
}
