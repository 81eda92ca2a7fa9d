use std::io::Write;

use crate::{
    input_output::IoArgs,
    special_filter::SpecialFilterArgs,
    tokenizer_args::TokenizerArgs,
};

/// Args for the explore command.
#[derive(clap::Args, Debug)]
pub struct ExploreArgs {
    #[command(flatten)]
    tokenizer: TokenizerArgs,

    #[command(flatten)]
    specials: SpecialFilterArgs,

    #[command(flatten)]
    io: IoArgs,
}

impl ExploreArgs {
    /// Run the explore command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.tokenizer.build()?;
        let allowed = self.specials.allowed();
        let disallowed = self.specials.disallowed();

        self.io.for_each_line(|line, writer| {
            let groups = tokenizer.explore_utf8_safe(line, &allowed, &disallowed)?;
            write_groups(writer, &groups)?;
            Ok(())
        })
    }
}

/// Write one `text<TAB>fragments` line per group, then a blank line.
///
/// Group text is written debug-escaped, so whitespace stays visible.
pub fn write_groups(
    writer: &mut dyn Write,
    groups: &[(String, usize)],
) -> std::io::Result<()> {
    for (text, fragments) in groups {
        writeln!(writer, "{text:?}\t{fragments}")?;
    }
    writeln!(writer)
}
