use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};

fn squash_standard_io(path: &Option<PathBuf>) -> Option<&PathBuf> {
    path.as_ref().filter(|p| p.as_os_str() != "-")
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long)]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long)]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

/// Input/output argument group.
#[derive(clap::Args, Debug)]
pub struct IoArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl IoArgs {
    /// Apply `f` to each input line (without its line ending), then flush the output.
    pub fn for_each_line<F>(
        &self,
        mut f: F,
    ) -> Result<(), Box<dyn std::error::Error>>
    where
        F: FnMut(&str, &mut dyn Write) -> Result<(), Box<dyn std::error::Error>>,
    {
        let reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        for line in reader.lines() {
            f(&line?, &mut writer)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squash_standard_io() {
        assert_eq!(squash_standard_io(&None), None);
        assert_eq!(squash_standard_io(&Some(PathBuf::from("-"))), None);
        assert_eq!(
            squash_standard_io(&Some(PathBuf::from("a.txt"))),
            Some(&PathBuf::from("a.txt"))
        );
    }

    #[test]
    fn test_for_each_line() {
        let dir = tempdir::TempDir::new("io_test").unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        std::fs::write(&input, "a\nbc\n").unwrap();

        let io = IoArgs {
            input: InputArgs {
                input: Some(input),
            },
            output: OutputArgs {
                output: Some(output.clone()),
            },
        };
        io.for_each_line(|line, w| {
            writeln!(w, "{}", line.len())?;
            Ok(())
        })
        .unwrap();

        assert_eq!(std::fs::read_to_string(output).unwrap(), "1\n2\n");
    }
}
