use anyhow::Result;
use dotenvy::dotenv;

use zodiac_prompt::cli::RootCommand;

fn main() -> Result<()> {
    dotenv().ok();
    RootCommand::execute()
}
