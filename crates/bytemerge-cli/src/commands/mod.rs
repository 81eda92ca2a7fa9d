use crate::commands::{count::CountArgs, decode::DecodeArgs, encode::EncodeArgs, explore::ExploreArgs};

pub mod count;
pub mod decode;
pub mod encode;
pub mod explore;

/// Subcommands for bytemerge.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Encode each input line to space-separated token ids.
    Encode(EncodeArgs),

    /// Decode each line of space-separated token ids to text.
    Decode(DecodeArgs),

    /// Count the tokens of each input line.
    Count(CountArgs),

    /// Show how each input line splits into merge fragments.
    Explore(ExploreArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::Count(cmd) => cmd.run(),
            Commands::Explore(cmd) => cmd.run(),
        }
    }
}
