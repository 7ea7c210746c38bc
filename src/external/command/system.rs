use super::{CommandError, CommandRunner};
use log::debug;
use std::{
    env,
    path::{Path, PathBuf},
    process::{Command, Stdio},
    thread,
};

/// A [CommandRunner] which spawns real processes via [std::process].
///
/// Commands are executed directly, without an intervening shell, so device
/// selectors containing wildcards or spaces are passed through verbatim as a
/// single argument.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn resolve(&self, program: &str) -> Option<PathBuf> {
        if program.contains('/') {
            let path = PathBuf::from(program);
            return if is_executable(&path) { Some(path) } else { None };
        }
        let paths = env::var_os("PATH")?;
        env::split_paths(&paths)
            .map(|dir| dir.join(program))
            .find(|candidate| is_executable(candidate))
    }

    fn run(&self, program: &str, args: &[String]) -> Result<String, CommandError> {
        debug!("Running {} {:?}", program, args);
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| CommandError::Spawn {
                command: program.to_string(),
                message: e.to_string(),
            })?;
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        if output.status.success() {
            Ok(combined)
        } else {
            Err(CommandError::Failed {
                command: program.to_string(),
                // Killed by a signal, so there's no exit code
                code: output.status.code().unwrap_or(-1),
                message: combined.trim().to_string(),
            })
        }
    }

    fn dispatch(&self, program: &str, args: &[String]) -> Result<(), CommandError> {
        debug!("Dispatching {} {:?}", program, args);
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| CommandError::Spawn {
                command: program.to_string(),
                message: e.to_string(),
            })?;
        // The caller never sees the result, but the child still has to be
        // reaped or a long-lived bar accumulates zombies.
        thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}
