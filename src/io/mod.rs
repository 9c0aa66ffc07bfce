//! I/O operations for pdf-title-rename.
//!
//! Input files are read whole and handed to `lopdf`, so a file handle is
//! never held across the rest of the per-file work. Renaming and filing
//! use plain `std::fs` operations and live with the batch driver.
//!
//! # Examples
//!
//! ```no_run
//! use pdf_title_rename::io::PdfReader;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let loaded = PdfReader::read(Path::new("input.pdf"))?;
//! match &loaded.document {
//!     Ok(doc) => println!("PDF {} with {} objects", doc.version, doc.objects.len()),
//!     Err(err) => println!("Not a readable PDF: {err}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod reader;

pub use reader::{LoadedPdf, PdfReader};
