//! `hashcheck completions` and `hashcheck man`.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io;

use crate::cli::Cli;

pub fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}

pub fn run_man() -> Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    man.render(&mut io::stdout())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn man_page_renders() {
        let mut buf = Vec::new();
        clap_mangen::Man::new(Cli::command()).render(&mut buf).unwrap();
        let page = String::from_utf8(buf).unwrap();
        assert!(page.contains("hashcheck"));
    }

    #[test]
    fn bash_completions_mention_subcommands() {
        let mut buf = Vec::new();
        clap_complete::generate(Shell::Bash, &mut Cli::command(), "hashcheck", &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("generate"));
        assert!(script.contains("compare"));
    }
}
