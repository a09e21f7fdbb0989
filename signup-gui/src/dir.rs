use std::path::{Path, PathBuf};

use crate::config::DEFAULT_FILE_NAME;

#[derive(Clone, Debug, PartialEq)]
pub struct SignupDirectory(PathBuf);

impl SignupDirectory {
    pub fn new(p: PathBuf) -> Self {
        SignupDirectory(p)
    }
    pub fn new_default() -> Result<Self, Box<dyn std::error::Error>> {
        default_datadir().map(SignupDirectory::new)
    }
}

impl SignupDirectory {
    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        create_directory(self.0.as_path())
    }
    pub fn path(&self) -> &Path {
        self.0.as_path()
    }

    pub fn config_path(&self) -> PathBuf {
        let mut path = self.0.clone();
        path.push(DEFAULT_FILE_NAME);
        path
    }
}

// Get the absolute path to the branch-signup data folder.
///
/// This a "BranchSignup" directory in the XDG standard configuration directory for all OSes but
/// Linux-based ones, for which it's `~/.branch-signup`.
fn default_datadir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".branch-signup");

        #[cfg(not(target_os = "linux"))]
        path.push("BranchSignup");

        return Ok(path);
    }

    Err("Failed to get default data directory".into())
}

fn create_directory(datadir_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(unix)]
    return {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700).recursive(true).create(datadir_path)?;
        Ok(())
    };

    #[cfg(not(unix))]
    return {
        std::fs::create_dir_all(datadir_path)?;
        Ok(())
    };
}
