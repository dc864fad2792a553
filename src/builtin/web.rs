//! HTML, CSS and XML profiles
//!
//! The markup profiles place the tag rule ahead of any other bracket
//! handling, so `<div ...>` is a tag and never an operator or include
//! path.

use crate::error::Result;
use crate::profile::{LanguageProfile, ProfileSpec};

pub fn html() -> Result<LanguageProfile> {
    ProfileSpec {
        name: "HTML",
        extensions: &["html", "htm", "xhtml"],
        tags: &[
            "html", "head", "body", "div", "span", "p", "a", "img", "table", "tr", "td",
            "th", "ul", "ol", "li", "form", "input", "button", "select", "option",
            "textarea", "label", "h1", "h2", "h3", "h4", "h5", "h6", "header", "footer",
            "nav", "section", "article", "aside", "main", "script", "style", "link", "meta",
            "title", "br", "hr", "strong", "em", "code", "pre", "blockquote", "iframe",
            "video", "audio", "canvas", "svg", "path",
        ],
        block_comment: Some(("<!--", "-->")),
        string_delimiters: &['"', '\''],
        attributes: true,
        ..ProfileSpec::default()
    }
    .build()
}

pub fn css() -> Result<LanguageProfile> {
    ProfileSpec {
        name: "CSS",
        extensions: &["css", "scss", "sass", "less"],
        keywords: &[
            "important", "and", "or", "not", "only", "screen", "print", "all", "media",
            "keyframes", "from", "to", "import", "charset", "font-face", "supports", "page",
            "namespace",
        ],
        properties: &[
            "color", "background", "background-color", "background-image", "border",
            "border-radius", "margin", "padding", "width", "height", "display", "position",
            "top", "left", "right", "bottom", "float", "clear", "font", "font-size",
            "font-family", "font-weight", "text-align", "text-decoration", "line-height",
            "overflow", "visibility", "opacity", "z-index", "flex", "grid", "transform",
            "transition", "animation", "box-shadow", "cursor",
        ],
        block_comment: Some(("/*", "*/")),
        string_delimiters: &['"', '\''],
        ..ProfileSpec::default()
    }
    .build()
}

pub fn xml() -> Result<LanguageProfile> {
    ProfileSpec {
        name: "XML",
        extensions: &["xml", "xsl", "xslt", "svg"],
        block_comment: Some(("<!--", "-->")),
        string_delimiters: &['"', '\''],
        attributes: true,
        ..ProfileSpec::default()
    }
    .build()
}
