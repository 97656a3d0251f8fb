pub mod batch;
pub mod calc;
pub mod classify;
pub mod info;
pub mod interactive;
pub mod table;

use std::path::PathBuf;

use bmi_common::config::Config;
use bmi_common::health::{AgeGroup, ChildFloor};
use bmi_common::locale::Locale;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bmi")]
#[command(about = "A localized body mass index calculator.", version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Language for labels and advice (ko, en, ja)
    #[arg(short, long, global = true, default_value = "ko")]
    pub locale: Locale,

    /// Classify a child BMI below 15 as underweight instead of leaving it unclassified
    #[arg(long, global = true)]
    pub child_underweight: bool,

    /// Reduce output; repeat to also hide advice
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute and classify a BMI from height and weight
    #[command(alias = "c")]
    Calc {
        /// Height in centimetres
        #[arg(long)]
        height: Option<String>,
        /// Weight in kilograms
        #[arg(long)]
        weight: Option<String>,
        #[arg(short, long, default_value = "adult")]
        age_group: AgeGroup,
    },
    /// Classify an already computed BMI
    #[command(alias = "k")]
    Classify {
        #[arg(allow_negative_numbers = true)]
        bmi: f64,
        #[arg(short, long, default_value = "adult")]
        age_group: AgeGroup,
    },
    /// Show the threshold table of one or every age group
    #[command(alias = "t")]
    Table {
        #[arg(short, long)]
        age_group: Option<AgeGroup>,
    },
    /// Evaluate 'height,weight[,age group]' lines from a file or stdin
    #[command(alias = "b")]
    Batch {
        file: Option<PathBuf>,
        /// Age group for lines that do not name one
        #[arg(short, long, default_value = "adult")]
        age_group: AgeGroup,
    },
    /// Enter values step by step, calculate and reset
    #[command(alias = "i")]
    Interactive,
    /// Show information about the tool
    Info,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        let child_floor: ChildFloor = if self.child_underweight {
            ChildFloor::Underweight
        } else {
            ChildFloor::Unclassified
        };

        Config {
            quiet: self.quiet,
            no_banner: self.no_banner,
            locale: self.locale,
            child_floor,
        }
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
