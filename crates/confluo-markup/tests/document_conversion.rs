//! End-to-end conversion of a realistic document through the public API.

use confluo_markup::{MarkdownConverter, PageBody, TocParams};
use pretty_assertions::assert_eq;

const README: &str = "\
# Confluo

A tool for publishing markdown documentation.

## Install

```bash
cargo install confluo
```

## Usage

- write markdown
- run the publisher
  - pages update in place

1. convert
2. attach
3. update

See the [docs](https://example.com/docs) for details.

![architecture](diagrams/architecture.png)
![logo](https://example.com/logo.png)
";

const EXPECTED: &str = "\
h1. Confluo

A tool for publishing markdown documentation.

h2. Install

{code:language=bash}
cargo install confluo
{code}

h2. Usage

* write markdown
* run the publisher
** pages update in place

# convert
# attach
# update

See the [docs|https://example.com/docs] for details.

!diagrams/architecture.png|architecture!
!https://example.com/logo.png|logo!
";

#[test]
fn test_readme_document() {
    let conversion = MarkdownConverter::new().convert(README);
    assert_eq!(conversion.markup, EXPECTED);
    assert_eq!(
        conversion.local_images,
        vec!["diagrams/architecture.png".to_owned()]
    );
}

#[test]
fn test_assembled_page_body() {
    let mut body = PageBody::new();
    body.toc(&TocParams::default());
    body.push_conversion(MarkdownConverter::new().convert(README));

    let markup = body.render();
    assert!(markup.starts_with("{toc:"));
    assert!(markup.contains("h1. Confluo"));
    assert_eq!(body.local_images(), ["diagrams/architecture.png"]);
}

#[test]
fn test_section_extraction_over_output() {
    let conversion = MarkdownConverter::new().convert("# One\na\n# Two\nb\n# Three\nc");
    assert_eq!(conversion.section(2).unwrap(), "h1. Two\nb");
    let err = conversion.section(4).unwrap_err();
    assert_eq!(err.available, 3);
}
