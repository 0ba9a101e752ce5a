use anyhow::{Context, Result};
use lopdf::{Dictionary, Document, Object};
use std::fs;
use std::path::{Path, PathBuf};

/// Pages nest through `Parent` links; deeper trees are treated as malformed
const MAX_PAGE_TREE_DEPTH: usize = 32;

/// What a single page yielded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent {
    /// Trimmed page text, cut to the preview length
    Text(String),
    /// No text layer; embedded images written to disk
    Scanned {
        images: Vec<PathBuf>,
        /// Images with encodings that cannot be written out as-is
        unsupported: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageExtraction {
    pub number: u32,
    pub content: PageContent,
}

#[derive(Debug, Clone)]
pub struct PdfExtraction {
    pub pages: Vec<PageExtraction>,
}

impl PdfExtraction {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn render(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("Pages: {}\n", self.page_count()));

        for page in &self.pages {
            output.push_str(&format!("--- Page {} ---\n", page.number));
            match &page.content {
                PageContent::Text(text) => output.push_str(&format!("{text}\n")),
                PageContent::Scanned { images, unsupported } => {
                    output.push_str("(scanned image - extracting...)\n");
                    for image in images {
                        output.push_str(&format!("Saved: {}\n", image.display()));
                    }
                    if images.is_empty() && *unsupported == 0 {
                        output.push_str("(no embedded images found)\n");
                    }
                    if *unsupported > 0 {
                        output.push_str(&format!(
                            "Skipped {unsupported} image(s) with unsupported encoding\n"
                        ));
                    }
                }
            }
        }

        output
    }
}

/// Pulls page text out of a PDF, falling back to the embedded images of scanned pages
pub struct PdfExtractor {
    max_chars: usize,
    image_prefix: Option<PathBuf>,
}

impl PdfExtractor {
    pub fn new(max_chars: usize) -> Self {
        Self {
            max_chars,
            image_prefix: None,
        }
    }

    /// Images are written as `<prefix>-<page>-<n>.<ext>`
    pub fn with_image_prefix(mut self, prefix: PathBuf) -> Self {
        self.image_prefix = Some(prefix);
        self
    }

    /// Default image prefix: `<dir>/<stem>-page`
    pub fn default_image_prefix(pdf_path: &Path) -> PathBuf {
        let stem = pdf_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        pdf_path.with_file_name(format!("{stem}-page"))
    }

    pub fn extract(&self, pdf_path: &Path) -> Result<PdfExtraction> {
        let doc = Document::load(pdf_path)
            .with_context(|| format!("Failed to load PDF: {}", pdf_path.display()))?;
        let prefix = self
            .image_prefix
            .clone()
            .unwrap_or_else(|| Self::default_image_prefix(pdf_path));

        let mut pages = Vec::new();
        for (number, page_id) in doc.get_pages() {
            let text = match doc.extract_text(&[number]) {
                Ok(text) => text.trim().to_string(),
                Err(e) => {
                    tracing::debug!(page = number, error = %e, "no text layer");
                    String::new()
                }
            };

            let content = if text.is_empty() {
                self.save_page_images(&doc, page_id, number, &prefix)?
            } else {
                PageContent::Text(text.chars().take(self.max_chars).collect())
            };

            pages.push(PageExtraction { number, content });
        }

        Ok(PdfExtraction { pages })
    }

    fn save_page_images(
        &self,
        doc: &Document,
        page_id: lopdf::ObjectId,
        number: u32,
        prefix: &Path,
    ) -> Result<PageContent> {
        let mut images = Vec::new();
        let mut unsupported = 0;

        let Some(resources) = page_resources(doc, page_id)? else {
            return Ok(PageContent::Scanned { images, unsupported });
        };
        let xobjects = match resources.get(b"XObject") {
            Ok(obj) => resolve(doc, obj)?.as_dict().context("XObject entry is not a dictionary")?,
            Err(_) => return Ok(PageContent::Scanned { images, unsupported }),
        };

        for (_, obj) in xobjects.iter() {
            let Object::Stream(stream) = resolve(doc, obj)? else {
                continue;
            };
            let is_image = stream
                .dict
                .get(b"Subtype")
                .and_then(|s| s.as_name())
                .map(|name| name == b"Image")
                .unwrap_or(false);
            if !is_image {
                continue;
            }

            let Some(ext) = image_extension(doc, &stream.dict)? else {
                unsupported += 1;
                continue;
            };

            let path = PathBuf::from(format!(
                "{}-{}-{}.{}",
                prefix.display(),
                number,
                images.len() + 1,
                ext
            ));
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            fs::write(&path, &stream.content)
                .with_context(|| format!("Failed to write image: {}", path.display()))?;
            tracing::debug!(page = number, path = %path.display(), "saved page image");
            images.push(path);
        }

        Ok(PageContent::Scanned { images, unsupported })
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_PDF_PREVIEW_CHARS)
    }
}

fn resolve<'a>(doc: &'a Document, object: &'a Object) -> Result<&'a Object> {
    match object {
        Object::Reference(id) => doc
            .get_object(*id)
            .with_context(|| format!("Dangling PDF reference {} {}", id.0, id.1)),
        other => Ok(other),
    }
}

/// Resources of a page, inherited from ancestors when the page has none
fn page_resources(doc: &Document, page_id: lopdf::ObjectId) -> Result<Option<&Dictionary>> {
    let mut node = doc
        .get_dictionary(page_id)
        .context("Page object is not a dictionary")?;

    for _ in 0..MAX_PAGE_TREE_DEPTH {
        if let Ok(resources) = node.get(b"Resources") {
            let dict = resolve(doc, resources)?
                .as_dict()
                .context("Resources entry is not a dictionary")?;
            return Ok(Some(dict));
        }
        match node.get(b"Parent") {
            Ok(parent) => {
                node = resolve(doc, parent)?
                    .as_dict()
                    .context("Parent entry is not a dictionary")?;
            }
            Err(_) => return Ok(None),
        }
    }

    Ok(None)
}

/// File extension for an image stream that can be written without decoding
fn image_extension(doc: &Document, dict: &Dictionary) -> Result<Option<&'static str>> {
    let Ok(filter) = dict.get(b"Filter") else {
        return Ok(None);
    };

    // With a filter chain, the last filter is the image encoding
    let last = match resolve(doc, filter)? {
        Object::Array(filters) => match filters.last() {
            Some(obj) => resolve(doc, obj)?,
            None => return Ok(None),
        },
        other => other,
    };

    Ok(match last.as_name() {
        Ok(b"DCTDecode") => Some("jpg"),
        Ok(b"JPXDecode") => Some("jp2"),
        _ => None,
    })
}
