use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

#[cfg(unix)]
use std::os::unix::fs::{MetadataExt, PermissionsExt};

#[cfg(unix)]
const EXECUTE_BITS: u32 = 0o111;
#[cfg(unix)]
const WORLD_WRITABLE_BIT: u32 = 0o002;

// Keyed by the program as configured. Only successful lookups are kept, so a
// program installed or fixed after a failed attempt is picked up next time.
static PROGRAM_PATHS: Lazy<Mutex<HashMap<String, PathBuf>>> = Lazy::new(|| Mutex::new(HashMap::new()));

fn resolve_cached(program: &str, resolver: impl FnOnce() -> io::Result<PathBuf>) -> io::Result<PathBuf> {
    let mut cache = match PROGRAM_PATHS.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    if let Some(path) = cache.get(program) {
        return Ok(path.clone());
    }

    let path = resolver()?;
    cache.insert(program.to_string(), path.clone());
    Ok(path)
}

/// Locate and vet the connect program. Bare names are searched on `PATH`,
/// anything with a path separator is taken as given.
///
/// The returned path is the one found, not its canonical target, so symlinked
/// multi-call programs still see the name they were invoked by. The checks
/// run against the canonical target.
pub(crate) fn program_path(program: &str) -> io::Result<PathBuf> {
    resolve_cached(program, || resolve_program(program))
}

fn resolve_program(program: &str) -> io::Result<PathBuf> {
    if program.trim().is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "no program configured"));
    }

    let configured = Path::new(program);
    if configured.components().count() > 1 {
        let label = configured.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_else(|| program.to_string());
        validate_executable_path(configured, &label)?;
        return Ok(configured.to_path_buf());
    }
    resolve_path_from_env(program)
}

fn resolve_path_from_env(binary: &str) -> io::Result<PathBuf> {
    let located = which::which(binary).map_err(|err| io::Error::new(io::ErrorKind::NotFound, format!("{binary} not found in PATH: {err}")))?;
    validate_executable_path(&located, binary)?;
    Ok(located)
}

fn denied(kind: io::ErrorKind, label: &str, path: &Path, problem: &str) -> io::Error {
    io::Error::new(kind, format!("{label} ('{}') {problem}", path.display()))
}

/// Canonicalize `path` and refuse anything that is not a runnable regular
/// file we can trust.
pub(crate) fn validate_executable_path(path: &Path, label: &str) -> io::Result<PathBuf> {
    let canonical = fs::canonicalize(path).map_err(|err| denied(io::ErrorKind::NotFound, label, path, &format!("cannot be resolved: {err}")))?;
    let metadata = fs::metadata(&canonical).map_err(|err| denied(io::ErrorKind::NotFound, label, &canonical, &format!("cannot be inspected: {err}")))?;

    if !metadata.is_file() {
        return Err(denied(io::ErrorKind::InvalidInput, label, &canonical, "is not a regular file"));
    }

    #[cfg(unix)]
    {
        check_unix_permissions(&canonical, &metadata, label)?;
    }

    Ok(canonical)
}

#[cfg(unix)]
fn check_unix_permissions(path: &Path, metadata: &fs::Metadata, label: &str) -> io::Result<()> {
    let mode = metadata.permissions().mode();
    if mode & WORLD_WRITABLE_BIT != 0 {
        return Err(denied(io::ErrorKind::PermissionDenied, label, path, "is world-writable"));
    }
    if mode & EXECUTE_BITS == 0 {
        return Err(denied(io::ErrorKind::PermissionDenied, label, path, "is not executable"));
    }

    let owner = metadata.uid();
    if owner != 0 && owner != nix::unistd::Uid::effective().as_raw() {
        return Err(denied(
            io::ErrorKind::PermissionDenied,
            label,
            path,
            "must be owned by root or the current user",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "test/command_path.rs"]
mod tests;
