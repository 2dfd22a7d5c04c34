//! External commands, and the runner which carries them out one at a time.

use std::{
    collections::HashMap,
    env,
    ffi::{OsStr, OsString},
    fmt,
    io::{self, Write},
    path::{Path, PathBuf},
    process::{Command, ExitStatus},
};

#[derive(Debug, Error)]
pub enum Error {
    #[error(display = "command not found: {}", _0)]
    NotFound(Box<str>, #[error(source)] which::Error),
    #[error(display = "failed to spawn `{}`", _0)]
    Spawn(Cmd, #[error(source)] io::Error),
    #[error(display = "failed to wait on `{}`", _0)]
    Wait(Cmd, #[error(source)] io::Error),
    #[error(display = "`{}` exited with failure status: {}", _0, _1)]
    Status(Cmd, ExitStatus),
    #[error(display = "failed to echo command")]
    Echo(#[error(source)] io::Error),
}

/// A program, referred to by name, and the arguments to invoke it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cmd {
    program: Box<str>,
    args:    Vec<OsString>,
}

impl Cmd {
    pub fn new(program: impl Into<Box<str>>) -> Self {
        Cmd { program: program.into(), args: Vec::new() }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_owned());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(args.into_iter().map(|arg| arg.as_ref().to_owned()));
        self
    }

    pub fn program(&self) -> &str { &self.program }

    pub fn get_args(&self) -> &[OsString] { &self.args }
}

impl fmt::Display for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Executes commands strictly in sequence, stopping at the first failure.
///
/// Commands which already ran are not undone when a later command fails.
#[derive(Debug, Clone)]
pub struct Runner {
    name:        Box<str>,
    search_path: Option<OsString>,
    dry_run:     bool,
}

impl Runner {
    /// `name` identifies the caller in the echo which precedes each command.
    pub fn new(name: impl Into<Box<str>>) -> Self {
        Runner { name: name.into(), search_path: None, dry_run: false }
    }

    /// Directories to search for programs, in `PATH` syntax. Defaults to `PATH`.
    pub fn search_path(mut self, search_path: Option<OsString>) -> Self {
        self.search_path = search_path;
        self
    }

    /// Echo commands without executing them.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Locates the executable for `program`.
    pub fn resolve(&self, program: &str) -> Result<PathBuf, Error> {
        let search_path = match self.search_path.clone() {
            Some(path) => Some(path),
            None => env::var_os("PATH"),
        };

        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));

        which::which_in(program, search_path, cwd)
            .map_err(|why| Error::NotFound(program.into(), why))
    }

    /// Runs every command in order, echoing each to `echo` first.
    pub fn run_with<W: Write>(&self, cmds: &[Cmd], echo: &mut W) -> Result<(), Error> {
        // Every program must be found before anything is executed.
        let mut resolved: HashMap<&str, PathBuf> = HashMap::new();
        for cmd in cmds {
            if !resolved.contains_key(cmd.program()) {
                let path = self.resolve(cmd.program())?;
                debug!("resolved {} to {}", cmd.program(), path.display());
                resolved.insert(cmd.program(), path);
            }
        }

        for cmd in cmds {
            writeln!(echo, "CMD [ {} ] ==> {}", self.name, cmd).map_err(Error::Echo)?;
            echo.flush().map_err(Error::Echo)?;

            if self.dry_run {
                continue;
            }

            exec(&resolved[cmd.program()], cmd)?;
        }

        Ok(())
    }
}

fn exec(executable: &Path, cmd: &Cmd) -> Result<(), Error> {
    let mut child = Command::new(executable)
        .args(cmd.get_args())
        .spawn()
        .map_err(|why| Error::Spawn(cmd.clone(), why))?;

    let status = child.wait().map_err(|why| Error::Wait(cmd.clone(), why))?;

    if status.success() {
        Ok(())
    } else {
        warn!("`{}` exited with {}", cmd, status);
        Err(Error::Status(cmd.clone(), status))
    }
}
