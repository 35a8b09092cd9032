//! Lexical checks on paths. Nothing here touches the file system.

use std::fmt::Debug;
use std::path::Path;

use super::Assert;
use crate::failure::messages;

/// Checks on `Path`, `PathBuf` and anything `AsRef<Path>`.
pub trait PathAssertions {
    /// The file extension is `expected` (without the dot).
    fn has_extension(&self, expected: &str) -> &Self;

    /// The path has no file extension.
    fn has_no_extension(&self) -> &Self;

    /// The final component is `expected`.
    fn has_file_name(&self, expected: &str) -> &Self;

    /// The path minus its final component is `expected`.
    fn has_parent(&self, expected: impl AsRef<Path>) -> &Self;

    /// The path has no parent (it is a root or empty).
    fn has_no_parent(&self) -> &Self;

    /// The path is absolute.
    fn is_absolute(&self) -> &Self;

    /// The path is relative.
    fn is_relative(&self) -> &Self;

    /// The path starts with the components of `prefix`.
    fn starts_with_path(&self, prefix: impl AsRef<Path>) -> &Self;

    /// The path ends with the components of `suffix`.
    fn ends_with_path(&self, suffix: impl AsRef<Path>) -> &Self;

    /// Navigate to the final component.
    fn file_name(&self) -> Assert<'_, String, Self>
    where
        Self: Sized;

    /// Navigate to the file extension.
    fn extension(&self) -> Assert<'_, String, Self>
    where
        Self: Sized;
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension().map(|e| e.to_string_lossy().into_owned())
}

fn file_name_of(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

impl<T, P> PathAssertions for Assert<'_, T, P>
where
    T: AsRef<Path> + Debug,
{
    #[track_caller]
    fn has_extension(&self, expected: &str) -> &Self {
        self.verify(|actual| {
            let found = extension_of(actual.as_ref());
            (found.as_deref() != Some(expected)).then(|| {
                messages::should_have_extension(&self.represent(actual), expected, found.as_deref())
            })
        })
    }

    #[track_caller]
    fn has_no_extension(&self) -> &Self {
        self.verify(|actual| {
            extension_of(actual.as_ref())
                .map(|found| messages::should_have_no_extension(&self.represent(actual), &found))
        })
    }

    #[track_caller]
    fn has_file_name(&self, expected: &str) -> &Self {
        self.verify(|actual| {
            (file_name_of(actual.as_ref()).as_deref() != Some(expected))
                .then(|| messages::should_have_file_name(&self.represent(actual), expected))
        })
    }

    #[track_caller]
    fn has_parent(&self, expected: impl AsRef<Path>) -> &Self {
        let expected = expected.as_ref();
        self.verify(|actual| {
            (actual.as_ref().parent() != Some(expected)).then(|| {
                messages::should_have_parent(&self.represent(actual), &self.represent(&expected))
            })
        })
    }

    #[track_caller]
    fn has_no_parent(&self) -> &Self {
        self.verify(|actual| {
            let path = actual.as_ref();
            let has_parent = path.parent().is_some_and(|p| !p.as_os_str().is_empty());
            has_parent.then(|| messages::should_have_no_parent(&self.represent(actual)))
        })
    }

    #[track_caller]
    fn is_absolute(&self) -> &Self {
        self.verify(|actual| {
            (!actual.as_ref().is_absolute())
                .then(|| messages::should_be_path_kind(&self.represent(actual), "an absolute"))
        })
    }

    #[track_caller]
    fn is_relative(&self) -> &Self {
        self.verify(|actual| {
            (!actual.as_ref().is_relative())
                .then(|| messages::should_be_path_kind(&self.represent(actual), "a relative"))
        })
    }

    #[track_caller]
    fn starts_with_path(&self, prefix: impl AsRef<Path>) -> &Self {
        let prefix = prefix.as_ref();
        self.verify(|actual| {
            (!actual.as_ref().starts_with(prefix)).then(|| {
                messages::path_should_start_or_end_with(
                    &self.represent(actual),
                    "start with",
                    &self.represent(&prefix),
                )
            })
        })
    }

    #[track_caller]
    fn ends_with_path(&self, suffix: impl AsRef<Path>) -> &Self {
        let suffix = suffix.as_ref();
        self.verify(|actual| {
            (!actual.as_ref().ends_with(suffix)).then(|| {
                messages::path_should_start_or_end_with(
                    &self.represent(actual),
                    "end with",
                    &self.represent(&suffix),
                )
            })
        })
    }

    fn file_name(&self) -> Assert<'_, String, Self> {
        self.child(self.actual().and_then(|path| file_name_of(path.as_ref())))
    }

    fn extension(&self) -> Assert<'_, String, Self> {
        self.child(self.actual().and_then(|path| extension_of(path.as_ref())))
    }
}
