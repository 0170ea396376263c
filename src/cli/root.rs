use anyhow::Result;
use clap::Parser;

use crate::cli::args::{validate_generate_args, Args, Commands, GenerateArgs};
use crate::cli::commands::{run_generate_command, run_list_command};
use crate::config::ZodiacPromptConfig;
use crate::logging::init_logging;

pub struct RootCommand;

impl RootCommand {
    pub fn execute() -> Result<()> {
        let args = Args::parse();
        init_logging(args.verbosity, args.debug)?;

        let generate_args = GenerateArgs::from(&args);

        match &args.command {
            Some(Commands::List { category }) => {
                run_list_command(generate_args, category.clone())
            }
            None => {
                // Handle config generation mode
                if generate_args.generate_config {
                    println!("{}", ZodiacPromptConfig::generate_default_config());
                    return Ok(());
                }

                validate_generate_args(&generate_args)?;
                run_generate_command(generate_args)
            }
        }
    }
}
