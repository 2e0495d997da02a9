use thiserror::Error;

use crate::config::UiTuning;

const MB: u64 = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
    pub mime: String,
    /// Object URL of a local image thumbnail, owned by the uploader that created it.
    pub preview: Option<String>,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
            preview: None,
        }
    }

    pub fn with_preview(mut self, url: impl Into<String>) -> Self {
        self.preview = Some(url.into());
        self
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    fn same_file(&self, other: &FileMeta) -> bool {
        self.name == other.name && self.size == other.size
    }
}

/// `12.3 KB` style size for the file list.
pub fn human_size(bytes: u64) -> String {
    match bytes {
        b if b < 1024 => format!("{b} B"),
        b if b < MB => format!("{:.1} KB", b as f64 / 1024.0),
        b => format!("{:.1} MB", b as f64 / MB as f64),
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("{name}: file exceeds {limit_mb}MB limit")]
    TooLarge { name: String, limit_mb: u64 },
    #[error("{name}: file already added")]
    Duplicate { name: String },
    #[error("{name}: file type not accepted")]
    WrongType { name: String },
    #[error("maximum {max} files allowed")]
    TooMany { max: usize },
}

impl UploadError {
    pub fn key(&self) -> &'static str {
        match self {
            Self::TooLarge { .. } => "fileUploader.fileTooLarge",
            Self::Duplicate { .. } => "fileUploader.fileDuplicate",
            Self::WrongType { .. } => "fileUploader.wrongType",
            Self::TooMany { .. } => "fileUploader.tooManyFiles",
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        match self {
            Self::TooLarge { name, .. } | Self::Duplicate { name } | Self::WrongType { name } => {
                Some(name)
            }
            Self::TooMany { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadPolicy {
    /// Comma separated, as in an `<input accept>` attribute.
    pub accept: String,
    pub multiple: bool,
    pub max_files: usize,
    pub max_size_mb: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            accept: "*".to_string(),
            multiple: false,
            max_files: 5,
            max_size_mb: 5,
        }
    }
}

impl UploadPolicy {
    pub fn from_ui(ui: &UiTuning, accept: &str, multiple: bool) -> Self {
        Self {
            accept: accept.to_string(),
            multiple,
            max_files: ui.upload_max_files,
            max_size_mb: ui.upload_max_size_mb,
        }
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_mb.saturating_mul(MB)
    }

    /// Matches `*`, MIME wildcards like `image/*`, exact MIME types and extensions like `.pdf`.
    pub fn accepts(&self, file: &FileMeta) -> bool {
        let name = file.name.to_ascii_lowercase();
        let mime = file.mime.to_ascii_lowercase();
        self.accept
            .split(',')
            .map(|p| p.trim().to_ascii_lowercase())
            .filter(|p| !p.is_empty())
            .any(|pattern| {
                if pattern == "*" || pattern == "*/*" {
                    true
                } else if pattern.starts_with('.') {
                    name.ends_with(&pattern)
                } else if let Some(family) = pattern.strip_suffix("/*") {
                    mime.split('/').next() == Some(family)
                } else {
                    mime == pattern
                }
            })
    }
}

/// Files picked so far under one policy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadSet {
    policy: UploadPolicy,
    files: Vec<FileMeta>,
}

impl UploadSet {
    pub fn new(policy: UploadPolicy) -> Self {
        Self {
            policy,
            files: Vec::new(),
        }
    }

    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    pub fn files(&self) -> &[FileMeta] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Screens a batch and keeps the acceptable files. Returns every rejection.
    pub fn add(&mut self, batch: Vec<FileMeta>) -> Vec<UploadError> {
        let mut errors = Vec::new();
        let mut accepted: Vec<FileMeta> = Vec::new();

        for file in batch {
            if !self.policy.accepts(&file) {
                errors.push(UploadError::WrongType { name: file.name });
            } else if file.size > self.policy.max_size_bytes() {
                errors.push(UploadError::TooLarge {
                    name: file.name,
                    limit_mb: self.policy.max_size_mb,
                });
            } else if self
                .files
                .iter()
                .chain(accepted.iter())
                .any(|f| f.same_file(&file))
            {
                errors.push(UploadError::Duplicate { name: file.name });
            } else {
                accepted.push(file);
            }
        }

        if !self.policy.multiple {
            accepted.truncate(1);
        }

        let total = if self.policy.multiple {
            self.files.len() + accepted.len()
        } else {
            accepted.len()
        };
        if total > self.policy.max_files {
            errors.push(UploadError::TooMany {
                max: self.policy.max_files,
            });
            return errors;
        }

        if !accepted.is_empty() {
            if self.policy.multiple {
                self.files.extend(accepted);
            } else {
                self.files = accepted;
            }
        }
        errors
    }

    pub fn remove(&mut self, index: usize) -> Option<FileMeta> {
        (index < self.files.len()).then(|| self.files.remove(index))
    }

    /// Empties the set and hands back the preview URLs it held.
    pub fn clear(&mut self) -> Vec<String> {
        self.files.drain(..).filter_map(|f| f.preview).collect()
    }

    /// URLs among `known` that no file in the set still shows.
    pub fn released_previews(&self, known: Vec<String>) -> Vec<String> {
        known
            .into_iter()
            .filter(|url| !self.files.iter().any(|f| f.preview.as_ref() == Some(url)))
            .collect()
    }

    pub fn previews(&self) -> Vec<String> {
        self.files.iter().filter_map(|f| f.preview.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str, size: u64) -> FileMeta {
        FileMeta::new(name, size, "application/pdf")
    }

    fn png(name: &str, size: u64) -> FileMeta {
        FileMeta::new(name, size, "image/png")
    }

    fn multi(max_files: usize) -> UploadSet {
        UploadSet::new(UploadPolicy {
            multiple: true,
            max_files,
            ..Default::default()
        })
    }

    #[test]
    fn test_accept_patterns() {
        let any = UploadPolicy::default();
        assert!(any.accepts(&pdf("cv.pdf", 10)));

        let images = UploadPolicy {
            accept: "image/*".to_string(),
            ..Default::default()
        };
        assert!(images.accepts(&png("me.png", 10)));
        assert!(!images.accepts(&pdf("cv.pdf", 10)));

        let docs = UploadPolicy {
            accept: ".pdf, .DOCX".to_string(),
            ..Default::default()
        };
        assert!(docs.accepts(&pdf("CV.PDF", 10)));
        assert!(docs.accepts(&FileMeta::new("letter.docx", 10, "")));
        assert!(!docs.accepts(&png("me.png", 10)));

        let exact = UploadPolicy {
            accept: "application/pdf".to_string(),
            ..Default::default()
        };
        assert!(exact.accepts(&pdf("cv", 10)));
    }

    #[test]
    fn test_rejects_large_files() {
        let mut set = multi(5);
        let errors = set.add(vec![pdf("big.pdf", 5 * MB + 1), pdf("ok.pdf", 5 * MB)]);
        assert_eq!(
            errors,
            vec![UploadError::TooLarge {
                name: "big.pdf".to_string(),
                limit_mb: 5
            }]
        );
        assert_eq!(set.files().len(), 1);
        assert_eq!(errors[0].to_string(), "big.pdf: file exceeds 5MB limit");
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut set = multi(5);
        assert!(set.add(vec![pdf("cv.pdf", 100)]).is_empty());

        let errors = set.add(vec![pdf("cv.pdf", 100), pdf("cv.pdf", 200)]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].key(), "fileUploader.fileDuplicate");
        assert_eq!(set.files().len(), 2);

        // same batch twice
        let errors = set.add(vec![pdf("a.pdf", 1), pdf("a.pdf", 1)]);
        assert_eq!(errors.len(), 1);
        assert_eq!(set.files().len(), 3);
    }

    #[test]
    fn test_too_many_rejects_whole_batch() {
        let mut set = multi(3);
        set.add(vec![pdf("1.pdf", 1), pdf("2.pdf", 1)]);

        let errors = set.add(vec![pdf("3.pdf", 1), pdf("4.pdf", 1)]);
        assert_eq!(errors, vec![UploadError::TooMany { max: 3 }]);
        assert_eq!(errors[0].file_name(), None);
        assert_eq!(set.files().len(), 2);

        assert!(set.add(vec![pdf("3.pdf", 1)]).is_empty());
        assert_eq!(set.files().len(), 3);
    }

    #[test]
    fn test_wrong_type() {
        let mut set = UploadSet::new(UploadPolicy {
            accept: "image/*".to_string(),
            multiple: true,
            ..Default::default()
        });
        let errors = set.add(vec![pdf("cv.pdf", 1), png("me.png", 1)]);
        assert_eq!(
            errors,
            vec![UploadError::WrongType {
                name: "cv.pdf".to_string()
            }]
        );
        assert_eq!(set.files(), &[png("me.png", 1)]);
    }

    #[test]
    fn test_single_mode_replaces() {
        let mut set = UploadSet::new(UploadPolicy::default());
        set.add(vec![pdf("old.pdf", 1)]);
        set.add(vec![pdf("new.pdf", 2), pdf("other.pdf", 3)]);
        assert_eq!(set.files(), &[pdf("new.pdf", 2)]);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut set = multi(5);
        set.add(vec![pdf("a.pdf", 1), pdf("b.pdf", 1)]);
        assert_eq!(set.remove(0), Some(pdf("a.pdf", 1)));
        assert_eq!(set.remove(5), None);
        assert!(set.clear().is_empty());
        assert!(set.is_empty());
    }

    #[test]
    fn test_previews_released_when_files_leave() {
        let mut set = multi(2);
        let kept = png("me.png", 1).with_preview("blob:kept");
        set.add(vec![kept.clone()]);

        // whole batch is refused, so both new previews go back
        let batch = vec![
            png("a.png", 1).with_preview("blob:a"),
            png("b.png", 1).with_preview("blob:b"),
        ];
        let mut known = set.previews();
        known.extend(batch.iter().filter_map(|f| f.preview.clone()));
        assert_eq!(set.add(batch), vec![UploadError::TooMany { max: 2 }]);
        assert_eq!(set.released_previews(known), ["blob:a", "blob:b"]);

        assert_eq!(set.remove(0).and_then(|f| f.preview), Some("blob:kept".to_string()));

        set.add(vec![kept, png("c.png", 1).with_preview("blob:c")]);
        assert_eq!(set.clear(), ["blob:kept", "blob:c"]);
        assert!(set.previews().is_empty());
    }

    #[test]
    fn test_single_mode_releases_replaced_preview() {
        let mut set = UploadSet::new(UploadPolicy::default());
        set.add(vec![png("old.png", 1).with_preview("blob:old")]);

        let batch = vec![png("new.png", 2).with_preview("blob:new")];
        let mut known = set.previews();
        known.extend(batch.iter().filter_map(|f| f.preview.clone()));
        set.add(batch);
        assert_eq!(set.released_previews(known), ["blob:old"]);
        assert_eq!(set.previews(), ["blob:new"]);
    }

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(2048), "2.0 KB");
        assert_eq!(human_size(3 * MB / 2), "1.5 MB");
    }

    #[test]
    fn test_policy_from_tuning() {
        let policy = UploadPolicy::from_ui(&UiTuning::default(), ".pdf", true);
        assert_eq!(policy.max_files, 5);
        assert_eq!(policy.max_size_bytes(), 5 * MB);
    }

    #[test]
    fn test_huge_size_limit_saturates() {
        let policy = UploadPolicy {
            max_size_mb: u64::MAX,
            multiple: true,
            ..Default::default()
        };
        assert_eq!(policy.max_size_bytes(), u64::MAX);

        let mut set = UploadSet::new(policy);
        assert!(set.add(vec![pdf("cv.pdf", 10 * MB)]).is_empty());
        assert_eq!(set.files().len(), 1);
    }
}
