/// Where `print` and `random` statements send their lines. The buffer
/// variant exists so tests can assert on program output directly.
#[derive(Debug)]
pub enum Output {
    Stdout,
    Buffer(String),
}

impl Output {
    pub fn stdout() -> Self {
        Output::Stdout
    }

    pub fn buffer() -> Self {
        Output::Buffer(String::new())
    }

    pub fn print_line(&mut self, line: &str) {
        match self {
            Output::Stdout => println!("{}", line),
            Output::Buffer(contents) => {
                contents.push_str(line);
                contents.push('\n');
            }
        }
    }

    pub fn captured(&self) -> &str {
        match self {
            Output::Stdout => "",
            Output::Buffer(contents) => contents,
        }
    }
}
