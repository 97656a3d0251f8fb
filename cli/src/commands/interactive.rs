use std::io::BufRead;

use anyhow::Context;
use bmi_common::config::Config;
use bmi_common::health::AgeGroup;
use bmi_common::success;
use bmi_core::calculator::{Calculator, Outcome};
use bmi_core::i18n::Catalog;
use colored::*;
use console::Term;
use tracing::{error, warn};

use crate::terminal::{colors, format, print, report};

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq)]
enum Action {
    Height(String),
    Weight(String),
    AgeGroup(AgeGroup),
    Calculate,
    Reset,
    Show,
    Help,
    Quit,
}

pub fn interactive(cfg: &Config) -> anyhow::Result<()> {
    let catalog = Catalog::new(cfg.locale);
    let term = Term::stdout();
    let mut calculator = Calculator::new(cfg.child_floor);

    print_help(&catalog);

    let mut lines = std::io::stdin().lock().lines();
    loop {
        term.write_str(&format!("{} ", "bmi>".color(colors::PRIMARY).bold()))?;
        term.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line: String = line.context("failed to read from stdin")?;

        match parse_action(&line) {
            Ok(None) => continue,
            Ok(Some(Action::Quit)) => break,
            Ok(Some(action)) => apply(action, &mut calculator, &catalog, cfg),
            Err(e) => warn!("{e}"),
        }
    }

    Ok(())
}

fn parse_action(line: &str) -> Result<Option<Action>, String> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(None);
    };
    let argument: String = parts.collect::<Vec<&str>>().join(" ");

    let action: Action = match command.to_ascii_lowercase().as_str() {
        "h" | "height" => Action::Height(argument),
        "w" | "weight" => Action::Weight(argument),
        "g" | "group" => {
            let age_group: AgeGroup = argument.parse().map_err(|e| format!("{e}"))?;
            Action::AgeGroup(age_group)
        }
        "c" | "calc" | "calculate" => Action::Calculate,
        "r" | "reset" => Action::Reset,
        "s" | "show" => Action::Show,
        "?" | "help" => Action::Help,
        "q" | "quit" | "exit" => Action::Quit,
        other => return Err(format!("unknown command '{other}', type 'help'")),
    };

    Ok(Some(action))
}

fn apply(action: Action, calculator: &mut Calculator, catalog: &Catalog, cfg: &Config) {
    match action {
        Action::Height(value) => calculator.set_height(value),
        Action::Weight(value) => calculator.set_weight(value),
        Action::AgeGroup(age_group) => calculator.set_age_group(age_group),
        Action::Calculate => match calculator.calculate() {
            Ok(Outcome::Skipped) => report::skipped(catalog),
            Ok(Outcome::Computed(result)) => {
                report::result(catalog, &result, calculator.age_group(), cfg)
            }
            Err(e) => error!("{e}"),
        },
        Action::Reset => {
            calculator.reset();
            success!("{}", catalog.text("buttons.reset"));
        }
        Action::Show => show(calculator, catalog),
        Action::Help => print_help(catalog),
        Action::Quit => {}
    }
}

fn show(calculator: &Calculator, catalog: &Catalog) {
    let height_key: &str = catalog.text("inputs.height");
    let weight_key: &str = catalog.text("inputs.weight");
    let group_key: &str = catalog.text("inputs.ageGroup");
    let bmi_key: &str = catalog.text("results.bmi");
    print::set_key_width([height_key, weight_key, group_key, bmi_key]);

    print::aligned_line(height_key, or_placeholder(calculator.height()));
    print::aligned_line(weight_key, or_placeholder(calculator.weight()));
    print::aligned_line(group_key, catalog.age_group(calculator.age_group()));
    if let Some(result) = calculator.last_result() {
        print::aligned_line(bmi_key, format::bmi_value(result.value));
    }
}

fn or_placeholder(value: &str) -> ColoredString {
    if value.is_empty() {
        "-".color(colors::MUTED)
    } else {
        value.normal()
    }
}

fn print_help(catalog: &Catalog) {
    let rows: [(&str, String); 7] = [
        ("h <cm>", catalog.text("inputs.height").to_string()),
        ("w <kg>", catalog.text("inputs.weight").to_string()),
        ("g <child|adult|senior>", catalog.text("inputs.ageGroup").to_string()),
        ("calc", catalog.text("buttons.calculate").to_string()),
        ("reset", catalog.text("buttons.reset").to_string()),
        ("show", catalog.text("results.title").to_string()),
        ("quit", String::from("exit")),
    ];

    print::set_key_width(rows.iter().map(|(key, _)| *key));
    for (key, description) in rows {
        print::aligned_line(key, description);
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
