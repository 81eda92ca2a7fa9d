use crate::{
    input_output::IoArgs,
    special_filter::SpecialFilterArgs,
    tokenizer_args::TokenizerArgs,
};

/// Args for the count command.
#[derive(clap::Args, Debug)]
pub struct CountArgs {
    #[command(flatten)]
    tokenizer: TokenizerArgs,

    #[command(flatten)]
    specials: SpecialFilterArgs,

    /// Count without special word recognition.
    #[clap(long, conflicts_with_all = ["allow", "allow_all", "disallow"])]
    ordinary: bool,

    #[command(flatten)]
    io: IoArgs,
}

impl CountArgs {
    /// Run the count command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.tokenizer.build()?;
        let allowed = self.specials.allowed();
        let disallowed = self.specials.disallowed();

        let mut total = 0;
        self.io.for_each_line(|line, writer| {
            let count = if self.ordinary {
                tokenizer.count_tokens(line)?
            } else {
                tokenizer.count_tokens_with_special(line, &allowed, &disallowed)?
            };
            total += count;
            writeln!(writer, "{count}")?;
            Ok(())
        })?;

        log::info!("total tokens: {total}; cache: {:?}", tokenizer.cache_stats());
        Ok(())
    }
}
