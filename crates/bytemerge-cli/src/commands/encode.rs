use std::io::Write;

use crate::{
    input_output::IoArgs,
    special_filter::SpecialFilterArgs,
    tokenizer_args::TokenizerArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    tokenizer: TokenizerArgs,

    #[command(flatten)]
    specials: SpecialFilterArgs,

    #[command(flatten)]
    io: IoArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.tokenizer.build()?;
        let allowed = self.specials.allowed();
        let disallowed = self.specials.disallowed();

        self.io.for_each_line(|line, writer| {
            let tokens = tokenizer.encode(line, &allowed, &disallowed)?;
            write_tokens(writer, &tokens)?;
            Ok(())
        })
    }
}

/// Write tokens as one line of space-separated ids.
pub fn write_tokens(
    writer: &mut dyn Write,
    tokens: &[u32],
) -> std::io::Result<()> {
    for (idx, token) in tokens.iter().enumerate() {
        write!(writer, "{}{}", if idx == 0 { "" } else { " " }, token)?;
    }
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_tokens() {
        let mut buf: Vec<u8> = Vec::new();
        write_tokens(&mut buf, &[1, 22, 333]).unwrap();
        write_tokens(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1 22 333\n\n");
    }
}
