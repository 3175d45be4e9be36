use std::io::{self, BufRead, Read};

pub const MAX_LINE_LENGTH: usize = 256;

pub trait Prompter {
    fn read(&mut self) -> anyhow::Result<Option<String>>;
    fn prompt(&mut self, prompt: &str) -> anyhow::Result<()>;
}

pub struct ConsolePrompter<R: io::BufRead, W: io::Write> {
    reader: R,
    writer: W,
}

impl<R: io::BufRead, W: io::Write> Prompter for ConsolePrompter<R, W> {
    fn read(&mut self) -> anyhow::Result<Option<String>> {
        let mut input = String::new();

        // At most MAX_LINE_LENGTH - 1 bytes are consumed per call; the rest of
        // an overlong line stays in the stream.
        let bytes_read = (&mut self.reader)
            .take((MAX_LINE_LENGTH - 1) as u64)
            .read_line(&mut input)?;

        if bytes_read == 0 {
            return Ok(None);
        }

        return Ok(Some(input.trim().to_string()));
    }

    fn prompt(&mut self, prompt: &str) -> anyhow::Result<()> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        return Ok(());
    }
}

impl<R: io::BufRead, W: io::Write> ConsolePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        return ConsolePrompter { reader, writer };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_then_reads() {
        let input = b"ls -l";
        let mut output = Vec::new();

        let mut prompter = ConsolePrompter::new(input.as_slice(), &mut output);

        prompter.prompt("simple_shell> ").unwrap();
        let answer = prompter.read().unwrap();

        let written = String::from_utf8(output).unwrap();

        assert_eq!("simple_shell> ", written);
        assert_eq!(Some("ls -l".to_string()), answer);
    }

    #[test]
    fn strips_the_trailing_newline() {
        let input = b"echo hello\n";
        let mut output = Vec::new();

        let mut prompter = ConsolePrompter::new(input.as_slice(), &mut output);

        let answer = prompter.read().unwrap();

        assert_eq!(Some("echo hello".to_string()), answer);
    }

    #[test]
    fn reports_end_of_input() {
        let input = b"";
        let mut output = Vec::new();

        let mut prompter = ConsolePrompter::new(input.as_slice(), &mut output);

        let answer = prompter.read().unwrap();

        assert_eq!(None, answer);
    }

    #[test]
    fn reads_each_line_separately() {
        let input = b"first\nsecond\n";
        let mut output = Vec::new();

        let mut prompter = ConsolePrompter::new(input.as_slice(), &mut output);

        assert_eq!(Some("first".to_string()), prompter.read().unwrap());
        assert_eq!(Some("second".to_string()), prompter.read().unwrap());
        assert_eq!(None, prompter.read().unwrap());
    }

    #[test]
    fn truncates_an_overlong_line() {
        let input = "a".repeat(MAX_LINE_LENGTH + 44) + "\n";
        let mut output = Vec::new();

        let mut prompter = ConsolePrompter::new(input.as_bytes(), &mut output);

        let first = prompter.read().unwrap().unwrap();
        assert_eq!(MAX_LINE_LENGTH - 1, first.len());

        let rest = prompter.read().unwrap().unwrap();
        assert_eq!("a".repeat(45), rest);
    }
}
