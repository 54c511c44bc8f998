//! Markdown rendering of the third-party notices document.

use super::index::LicenseIndex;
use super::validation::LICENSE_EXTENSION;
use camino::{Utf8Component, Utf8Path};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes left as-is in link paths; everything else is percent-encoded.
const LINK_PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// The generated notices document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeDocument {
    text: String,
}

impl NoticeDocument {
    /// Render the preamble for `product_name` followed by one bullet per
    /// index entry, in index order.
    ///
    /// Each bullet links to `<licenses_dir>/<name>.txt`, with the file name
    /// percent-encoded and `licenses_dir` written with `/` separators.
    ///
    /// # Example
    ///
    /// ```
    /// use camino::{Utf8Component, Utf8Path};
    /// use fb2k_release::notices::{LicenseIndex, NoticeDocument};
    ///
    /// let index = LicenseIndex::parse("lib foo: MIT").unwrap();
    /// let doc = NoticeDocument::render("Demo", Utf8Path::new("component/licenses"), &index);
    /// assert!(doc.as_str().ends_with("- [lib foo - MIT](component/licenses/lib%20foo.txt)\n"));
    /// ```
    #[must_use]
    pub fn render(product_name: &str, licenses_dir: &Utf8Path, index: &LicenseIndex) -> Self {
        let mut text = preamble(product_name);
        let link_dir = link_dir(licenses_dir);

        for entry in index.entries() {
            let file_name = format!("{}.{LICENSE_EXTENSION}", entry.name);
            let encoded = utf8_percent_encode(&file_name, LINK_PATH);
            text.push_str(&format!(
                "- [{} - {}]({link_dir}{encoded})\n",
                entry.name, entry.license
            ));
        }

        Self { text }
    }

    /// The rendered Markdown.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the document, returning its Markdown.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

fn preamble(product_name: &str) -> String {
    format!(
        concat!(
            "{product} uses third-party libraries or other resources that may\n",
            "be distributed under licenses different than the {product} software.\n",
            "The linked notices are provided for information only.\n",
            "\n",
        ),
        product = product_name
    )
}

/// `dir` as a relative link prefix: `/`-separated, ending in `/` unless
/// empty. Root and `.` components are dropped.
fn link_dir(dir: &Utf8Path) -> String {
    let joined = dir
        .components()
        .filter_map(|c| match c {
            Utf8Component::Normal(part) => Some(part),
            Utf8Component::ParentDir => Some(".."),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");
    let encoded = utf8_percent_encode(&joined, LINK_PATH).to_string();
    if encoded.is_empty() {
        encoded
    } else {
        format!("{encoded}/")
    }
}
