use crate::{input_output::IoArgs, tokenizer_args::TokenizerArgs};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    tokenizer: TokenizerArgs,

    /// Fail on token sequences which decode to invalid UTF-8.
    #[clap(long)]
    strict: bool,

    #[command(flatten)]
    io: IoArgs,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.tokenizer.build()?;

        self.io.for_each_line(|line, writer| {
            let tokens = parse_tokens(line)?;
            let text = if self.strict {
                tokenizer.try_decode_to_string(&tokens)?
            } else {
                tokenizer.decode_to_string(&tokens)
            };
            writeln!(writer, "{text}")?;
            Ok(())
        })
    }
}

/// Parse a line of whitespace-separated token ids.
pub fn parse_tokens(line: &str) -> Result<Vec<u32>, std::num::ParseIntError> {
    line.split_whitespace().map(str::parse).collect()
}
