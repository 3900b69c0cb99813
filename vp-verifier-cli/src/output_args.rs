use crate::Result;
use std::io::Write;

#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Pretty-print JSON output instead of printing it compactly on one line.
    #[arg(env = "VP_VERIFIER_PRETTY", short, long)]
    pub pretty: bool,
    /// Do not print a newline at the end of the output.
    #[arg(env = "VP_VERIFIER_NO_NEWLINE", short, long)]
    pub no_newline: bool,
}

impl OutputArgs {
    pub fn write_json<T: serde::Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        if self.pretty {
            serde_json::to_writer_pretty(&mut stdout, value)?;
        } else {
            serde_json::to_writer(&mut stdout, value)?;
        }
        self.finish(&mut stdout)
    }
    pub fn write_str(&self, s: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(s.as_bytes())?;
        self.finish(&mut stdout)
    }
    fn finish(&self, out: &mut dyn Write) -> Result<()> {
        if !self.no_newline {
            out.write_all(b"\n")?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Read all of stdin, trimming whitespace off the ends.
pub fn read_stdin_trimmed() -> Result<String> {
    let mut input = String::new();
    std::io::Read::read_to_string(&mut std::io::stdin(), &mut input)?;
    Ok(input.trim().to_string())
}
