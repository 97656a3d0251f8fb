mod commands;
mod terminal;

use bmi_common::config::Config;
use commands::{CommandLine, Commands, batch, calc, classify, info, interactive, table};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose, commands.quiet)?;
    let cfg: Config = commands.to_config();

    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command {
        Commands::Info => {
            print::header("about the tool", cfg.quiet);
            info::info(&cfg)
        }
        Commands::Calc {
            height,
            weight,
            age_group,
        } => {
            print::header("calculating bmi", cfg.quiet);
            calc::calc(height, weight, age_group, &cfg)
        }
        Commands::Classify { bmi, age_group } => {
            print::header("classifying bmi", cfg.quiet);
            classify::classify(bmi, age_group, &cfg)
        }
        Commands::Table { age_group } => table::table(age_group, &cfg),
        Commands::Batch { file, age_group } => {
            print::header("evaluating batch", cfg.quiet);
            batch::batch(file, age_group, &cfg)
        }
        Commands::Interactive => {
            print::header("interactive mode", cfg.quiet);
            interactive::interactive(&cfg)
        }
    };

    print::end_of_program(cfg.quiet);
    result
}
