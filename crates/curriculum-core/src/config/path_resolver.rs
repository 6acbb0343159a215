use std::path::{Component, Path, PathBuf};

/// Resolves relative paths against a fixed base directory.
#[derive(Clone, Debug)]
pub struct PathResolver {
    base_dir: PathBuf,
}

impl PathResolver {
    pub fn new(base_dir: &Path) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn resolve(&self, p: &Path) -> PathBuf {
        if p.is_absolute() {
            return p.to_path_buf();
        }
        self.join_clean(p)
    }

    fn join_clean(&self, rel: &Path) -> PathBuf {
        let joined = self.base_dir.join(rel);

        let mut out = PathBuf::new();
        for c in joined.components() {
            match c {
                Component::CurDir => {}
                Component::ParentDir => {
                    out.pop();
                }
                Component::RootDir | Component::Prefix(_) | Component::Normal(_) => {
                    out.push(c.as_os_str())
                }
            }
        }
        if out.as_os_str().is_empty() {
            out.push(".");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_joined_and_cleaned() {
        let r = PathResolver::new(Path::new("/srv/app/scripts"));
        assert_eq!(
            r.resolve(Path::new("../assets/./databases/bible_bsb.db")),
            PathBuf::from("/srv/app/assets/databases/bible_bsb.db")
        );
    }

    #[test]
    fn test_absolute_untouched() {
        let r = PathResolver::new(Path::new("/srv/app"));
        assert_eq!(r.resolve(Path::new("/tmp/x.db")), PathBuf::from("/tmp/x.db"));
    }

    #[test]
    fn test_current_dir_base() {
        let r = PathResolver::new(Path::new("."));
        assert_eq!(r.resolve(Path::new("out.sql")), PathBuf::from("out.sql"));
    }
}
