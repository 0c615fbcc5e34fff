//! Whole-site population over a template directory.
//!
//! A portfolio template ships as a directory tree (HTML pages, stylesheets,
//! page scripts, images). [`populate_dir`] copies that tree into an output
//! directory, rewriting token markers in every file with a recognized text
//! extension and copying everything else byte-for-byte. The template tree
//! itself is never modified.

use std::fs;
use std::path::Path;

use crate::error::PortfolioError;
use crate::resume::ResumeData;
use crate::tokens::{resolve_tokens, TokenTable};

/// File extensions rewritten through the populator. Anything else is
/// copied verbatim.
pub const SITE_EXTENSIONS: &[&str] = &["html", "css", "js"];

/// Populates a site template directory into `output_dir`.
///
/// Walks `template_dir` recursively, recreating its structure under
/// `output_dir`. Files with an extension in [`SITE_EXTENSIONS`] are read as
/// UTF-8, token-substituted, and written; all other files are copied
/// unchanged. Tokens are resolved once for the whole tree.
///
/// Returns the number of files that went through substitution.
///
/// # Errors
///
/// Returns [`PortfolioError::Io`] if the template directory cannot be read
/// or output files cannot be written. A non-UTF-8 file with a recognized
/// extension also surfaces as an I/O error.
///
/// # Example
///
/// ```rust,no_run
/// use portfolio_render::{populate_dir, ResumeData};
///
/// let data = ResumeData::default();
/// let rewritten = populate_dir("portfolio-template", "generated/ana", &data)?;
/// println!("rewrote {} files", rewritten);
/// # Ok::<(), portfolio_render::PortfolioError>(())
/// ```
pub fn populate_dir(
    template_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    data: &ResumeData,
) -> Result<usize, PortfolioError> {
    let tokens = resolve_tokens(data);
    let mut rewritten = 0;
    copy_tree(
        template_dir.as_ref(),
        output_dir.as_ref(),
        &tokens,
        &mut rewritten,
    )?;
    Ok(rewritten)
}

fn copy_tree(
    src: &Path,
    dst: &Path,
    tokens: &TokenTable,
    rewritten: &mut usize,
) -> Result<(), PortfolioError> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&src_path, &dst_path, tokens, rewritten)?;
        } else if is_site_file(&src_path) {
            let content = fs::read_to_string(&src_path)?;
            fs::write(&dst_path, tokens.apply(&content))?;
            *rewritten += 1;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

fn is_site_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SITE_EXTENSIONS.iter().any(|s| ext.eq_ignore_ascii_case(s)))
}
