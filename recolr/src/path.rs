use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

pub trait PathBufExt {
    /// Appends a string directly to the end of the path
    fn append_str(self, suffix: impl AsRef<OsStr>) -> Self;
}

pub trait PathExt {
    /// Checks the path's extension against a list, ignoring ASCII case
    fn has_extension(&self, extensions: &[&str]) -> bool;
}

impl PathBufExt for PathBuf {
    fn append_str(mut self, suffix: impl AsRef<OsStr>) -> Self {
        self.as_mut_os_string().push(suffix);
        self
    }
}

impl PathExt for Path {
    fn has_extension(&self, extensions: &[&str]) -> bool {
        self.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|extension| {
                extensions
                    .iter()
                    .any(|candidate| extension.eq_ignore_ascii_case(candidate))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_str_example() {
        let path = PathBuf::from("fonts/BuilderIcons.otf");
        let expected = PathBuf::from("fonts/BuilderIcons.otf.tmp");
        assert_eq!(path.append_str(".tmp"), expected);
    }

    #[test]
    fn has_extension_ignores_case() {
        let path = Path::new("fonts/BuilderIcons.TTF");
        assert!(path.has_extension(&["ttf", "otf"]));
    }

    #[test]
    fn has_extension_rejects_others() {
        assert!(!Path::new("fonts/BuilderIcons.woff2").has_extension(&["ttf", "otf"]));
        assert!(!Path::new("fonts/BuilderIcons").has_extension(&["ttf", "otf"]));
    }
}
