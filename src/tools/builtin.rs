//! Built-in tool list
//!
//! The canonical catalog shipped with the crate. Order here is the source
//! order used for tie-breaking.

use super::category::{AdsProfile, Category, SettingsType};
use super::definition::{Seo, Tool};

pub(crate) fn tools() -> Vec<Tool> {
    let mut tools = image_tools();
    tools.extend(pdf_tools());
    tools.extend(text_tools());
    tools.extend(file_tools());
    tools
}

fn image_tools() -> Vec<Tool> {
    vec![
        Tool::new(
            Category::Image,
            "image-compressor",
            "Image Compressor",
            "Compress JPG, PNG, and WebP images in your browser. No upload. Fast and private.",
        )
        .with_icon("compress")
        .with_tags(["Fast", "Private"])
        .with_settings(SettingsType::Image)
        .with_order(1)
        .with_ads_profile(AdsProfile::Default)
        .with_seo(
            Seo::new(
                "Compress images locally in your browser to reduce file size for web, email, and sharing. Your files never leave your device.",
            )
            .with_faq("Is it free?", "Yes. The tool runs in your browser and is free to use.")
            .with_faq("Are my images uploaded?", "No. Compression is processed locally on your device.")
            .with_faq(
                "What formats are supported?",
                "JPG, PNG, and WebP. More formats can be added later.",
            ),
        ),
        Tool::new(
            Category::Image,
            "image-resizer",
            "Image Resizer",
            "Resize images to exact dimensions while keeping quality. No upload required.",
        )
        .with_icon("photo_size_select_large")
        .with_tags(["Simple", "Accurate"])
        .with_settings(SettingsType::Image)
        .with_order(2)
        .with_seo(
            Seo::new(
                "Resize images to fit social media, websites, or documents — processed locally in the browser.",
            )
            .with_faq("Can I keep aspect ratio?", "Yes. Lock the aspect ratio to prevent distortion.")
            .with_faq("Does it upload my file?", "No. Everything runs client-side in your browser."),
        ),
        Tool::new(
            Category::Image,
            "image-converter",
            "Image Converter",
            "Convert between JPG, PNG, and WebP instantly in your browser.",
        )
        .with_icon("swap_horiz")
        .with_tags(["Convert", "Local"])
        .with_settings(SettingsType::Image)
        .with_order(3)
        .with_seo(
            Seo::new(
                "Convert image formats without installing apps. Great for optimizing compatibility and file size.",
            )
            .with_faq("Which formats can I convert to?", "JPG, PNG, and WebP.")
            .with_faq("Is conversion private?", "Yes. Your files stay on your device."),
        ),
        Tool::new(
            Category::Image,
            "image-to-webp",
            "Image to WebP",
            "Convert images to WebP for smaller size and faster web performance.",
        )
        .with_icon("web")
        .with_tags(["Web", "Smaller"])
        .with_settings(SettingsType::Image)
        .with_order(4)
        .with_seo(
            Seo::new("WebP usually produces smaller files for the web. Convert locally with one click.")
                .with_faq("Why WebP?", "WebP offers smaller file sizes while maintaining good quality.")
                .with_faq("Does it work offline?", "After the page loads, conversion runs locally."),
        ),
    ]
}

fn pdf_tools() -> Vec<Tool> {
    vec![
        Tool::new(
            Category::Pdf,
            "pdf-merge",
            "PDF Merger",
            "Merge multiple PDF files into one — processed locally in your browser.",
        )
        .with_icon("picture_as_pdf")
        .with_tags(["Private", "Local"])
        .with_settings(SettingsType::Pdf)
        .with_order(1)
        .with_seo(
            Seo::new(
                "Combine PDFs into a single file without uploading to any server. Ideal for forms and documents.",
            )
            .with_faq("Are my PDFs uploaded?", "No. Merging runs entirely in your browser.")
            .with_faq("Is there a file limit?", "It depends on your device memory and PDF size."),
        ),
        Tool::new(
            Category::Pdf,
            "pdf-split",
            "PDF Splitter",
            "Split PDF into pages or ranges locally. No server upload.",
        )
        .with_icon("splitscreen")
        .with_tags(["Pages", "Ranges"])
        .with_settings(SettingsType::Pdf)
        .with_order(2)
        .with_seo(
            Seo::new("Extract specific pages from a PDF to create a smaller document — all processed locally.")
                .with_faq("Can I split by page range?", "Yes, choose a range like 1–3 or 5–10.")
                .with_faq("Does it upload my PDF?", "No. Everything stays in your browser."),
        ),
        Tool::new(
            Category::Pdf,
            "pdf-compress",
            "PDF Compressor",
            "Reduce PDF size locally in your browser (beta).",
        )
        .with_icon("compress")
        .with_tags(["Beta", "Local"])
        .with_settings(SettingsType::Pdf)
        .with_order(3)
        .with_seo(
            Seo::new("Basic PDF size reduction in the browser. Advanced modes may be added later.").with_faq(
                "Why is it beta?",
                "Browser-only PDF compression has tradeoffs depending on content.",
            ),
        ),
    ]
}

fn text_tools() -> Vec<Tool> {
    vec![
        Tool::new(
            Category::Text,
            "json-formatter",
            "JSON Formatter",
            "Format and validate JSON with pretty print instantly in your browser.",
        )
        .with_icon("data_object")
        .with_tags(["Format", "Validate"])
        .with_settings(SettingsType::Text)
        .with_order(1)
        .with_seo(
            Seo::new("Paste JSON to format, validate, and minify it instantly. Great for debugging and sharing.")
                .with_faq("Is my JSON uploaded?", "No. It’s processed locally.")
                .with_faq("Can it detect invalid JSON?", "Yes, it shows parsing errors."),
        ),
        Tool::new(
            Category::Text,
            "base64-encode-decode",
            "Base64 Encode / Decode",
            "Encode text to Base64 or decode Base64 back to text in one click.",
        )
        .with_icon("code")
        .with_tags(["Encode", "Decode"])
        .with_settings(SettingsType::Text)
        .with_order(2)
        .with_seo(
            Seo::new("Convert text to Base64 for safe transport, or decode Base64 back to readable text.")
                .with_faq("Does it support UTF-8?", "Yes, for standard text inputs."),
        ),
        Tool::new(
            Category::Text,
            "text-case-converter",
            "Text Case Converter",
            "Convert text to UPPERCASE, lowercase, Title Case, and more.",
        )
        .with_icon("text_fields")
        .with_tags(["Text", "Quick"])
        .with_settings(SettingsType::Text)
        .with_order(3)
        .with_seo(
            Seo::new("Change text casing instantly for titles, code, or documents.")
                .with_faq("What cases are supported?", "Upper, lower, title, sentence case and more."),
        ),
    ]
}

fn file_tools() -> Vec<Tool> {
    vec![
        Tool::new(
            Category::File,
            "file-hash",
            "File Hash Generator",
            "Generate SHA-256 hash of a file locally in your browser.",
        )
        .with_icon("fingerprint")
        .with_tags(["SHA-256", "Local"])
        .with_settings(SettingsType::File)
        .with_order(1)
        .with_seo(
            Seo::new("Verify file integrity by generating hashes locally. Useful for downloads and security checks.")
                .with_faq("Are files uploaded?", "No. Hashing runs locally in your browser."),
        ),
        // Lives under file for routing but opens the dev settings panel
        Tool::new(
            Category::File,
            "uuid-generator",
            "UUID Generator",
            "Generate UUIDs instantly (v4). Fast, simple, and offline-friendly.",
        )
        .with_icon("tag")
        .with_tags(["UUID", "Instant"])
        .with_settings(SettingsType::Dev)
        .with_order(2)
        .with_seo(
            Seo::new("Generate unique identifiers for apps, databases, and testing.")
                .with_faq("Which UUID version?", "UUID v4 (random) by default."),
        ),
    ]
}
