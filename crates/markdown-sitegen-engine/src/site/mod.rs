//! Site generation: reads Markdown from disk, renders it into an HTML
//! template and writes the pages out, along with the static assets.

use crate::{Error, render_document};
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";
const TITLE_MARKER: &str = "# ";

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("No `# ` title line in {0}")]
    MissingTitle(PathBuf),
    #[error("Invalid source directory: {0}")]
    InvalidSourceDir(PathBuf),
    #[error("Path {0} is not inside the content directory")]
    InvalidPath(PathBuf),
    #[error("Failed to render {path}: {source}")]
    Render { path: PathBuf, source: Error },
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SiteError {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Returns the text of the first `# ` line, trimmed.
pub fn extract_title(markdown: &str) -> Option<&str> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix(TITLE_MARKER))
        .map(str::trim)
}

/// Fills the template placeholders and rewrites root-relative urls.
///
/// `href="/` and `src="/` are rewritten to start with `base_path`; a base path
/// of `/` leaves the page untouched.
pub fn apply_template(template: &str, title: &str, content: &str, base_path: &str) -> String {
    let page = template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content);

    if base_path.is_empty() || base_path == "/" {
        return page;
    }
    let base = if base_path.ends_with('/') {
        base_path.to_string()
    } else {
        format!("{base_path}/")
    };
    page.replace("href=\"/", &format!("href=\"{base}"))
        .replace("src=\"/", &format!("src=\"{base}"))
}

/// Renders one Markdown file into `template_path` and writes it to `dest_path`.
pub fn generate_page(
    from_path: &Path,
    template_path: &Path,
    dest_path: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {} using {}",
        from_path.display(),
        dest_path.display(),
        template_path.display()
    );

    let markdown = fs::read_to_string(from_path).map_err(io_error(from_path))?;
    let template = fs::read_to_string(template_path).map_err(io_error(template_path))?;

    let content = render_document(&markdown).map_err(|source| SiteError::Render {
        path: from_path.to_path_buf(),
        source,
    })?;
    let title =
        extract_title(&markdown).ok_or_else(|| SiteError::MissingTitle(from_path.to_path_buf()))?;
    let page = apply_template(&template, title, &content, base_path);

    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(dest_path, page).map_err(io_error(dest_path))
}

/// Renders every `.md` file under `content_dir` into `dest_dir`.
///
/// `content_dir/a/b.md` becomes `dest_dir/a/b.html`. Files are processed in
/// sorted order; the written paths are returned in the same order.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<Vec<PathBuf>, SiteError> {
    let mut sources = Vec::new();
    scan_markdown_recursive(content_dir, &mut sources)?;
    sources.sort();

    let mut written = Vec::with_capacity(sources.len());
    for source in sources {
        let relative = source
            .strip_prefix(content_dir)
            .ok()
            .and_then(|p| RelativePathBuf::from_path(p).ok())
            .ok_or_else(|| SiteError::InvalidPath(source.clone()))?;
        let dest = relative.with_extension("html").to_path(dest_dir);

        generate_page(&source, template_path, &dest, base_path)?;
        written.push(dest);
    }
    Ok(written)
}

fn scan_markdown_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SiteError> {
    let entries = fs::read_dir(dir).map_err(io_error(dir))?;

    for entry in entries {
        let path = entry.map_err(io_error(dir))?.path();

        if path.is_dir() {
            scan_markdown_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

/// Replaces `dest_dir` with a recursive copy of `source_dir`.
pub fn copy_static(source_dir: &Path, dest_dir: &Path) -> Result<(), SiteError> {
    if !source_dir.is_dir() {
        return Err(SiteError::InvalidSourceDir(source_dir.to_path_buf()));
    }

    if dest_dir.exists() {
        log::info!("Clearing contents of {}", dest_dir.display());
        fs::remove_dir_all(dest_dir).map_err(io_error(dest_dir))?;
    }
    fs::create_dir_all(dest_dir).map_err(io_error(dest_dir))?;

    copy_dir_recursive(source_dir, dest_dir)
}

fn copy_dir_recursive(source_dir: &Path, dest_dir: &Path) -> Result<(), SiteError> {
    let entries = fs::read_dir(source_dir).map_err(io_error(source_dir))?;

    for entry in entries {
        let entry = entry.map_err(io_error(source_dir))?;
        let source = entry.path();
        let dest = dest_dir.join(entry.file_name());

        if source.is_dir() {
            log::debug!("Making new directory {}", dest.display());
            fs::create_dir(&dest).map_err(io_error(&dest))?;
            copy_dir_recursive(&source, &dest)?;
        } else {
            log::info!("Copying {} to {}", source.display(), dest.display());
            fs::copy(&source, &dest).map_err(io_error(&source))?;
        }
    }

    Ok(())
}
