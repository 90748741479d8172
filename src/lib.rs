//! Parser and serializer for `.SRCINFO` files.
//!
//! A `.SRCINFO` is the flat `key = value` summary of a `PKGBUILD` (or
//! Pacstall pacscript) produced by `makepkg --printsrcinfo`. This crate
//! reads it into a [`Srcinfo`] that keeps package base fields, global
//! package fields and per split package overrides apart, and can merge them
//! back into an [`EffectivePackage`] for each split package.
//!
//! Values are not interpreted: dependency strings, licenses and checksums
//! are kept as opaque strings.
//!
//! # Overview
//!
//! Keys may be qualified by a distribution and/or an architecture, as in
//! `depends_x86_64` or `depends_debian_amd64`. An architecture qualifier
//! must be one of the architectures declared with `arch`.
//!
//! A split package can override a field with an empty value (`pkgdesc =`),
//! which clears it instead of inheriting the global value.
//!
//! # Examples
//!
//! ```
//! use srcinfo::Srcinfo;
//!
//! let input = "\
//! pkgbase = libfoo
//! \tpkgver = 1.2
//! \tpkgrel = 1
//! \tpkgdesc = Foo library
//! \tarch = x86_64
//! \tdepends = glibc
//!
//! pkgname = libfoo
//!
//! pkgname = libfoo-docs
//! \tpkgdesc = Foo library documentation
//! \tarch = any
//! \tdepends =
//! ";
//! let si = Srcinfo::parse(input).unwrap();
//! assert_eq!(si.version(), "1.2-1");
//!
//! let docs = si.split_package("libfoo-docs").unwrap();
//! assert_eq!(docs.pkgdesc, "Foo library documentation");
//! assert_eq!(docs.arch, vec!["any"]);
//! assert!(docs.depends.is_empty());
//! ```

mod arch;
mod error;
mod field;
mod line;
mod merge;
mod package;
mod parser;
mod render;
mod srcinfo;
mod value;

use std::path::Path;

// Re-export public types
pub use arch::{ANY_ARCH, KNOWN_ARCHITECTURES};
pub use error::{Error, LineError, Result};
pub use field::{Field, FieldKind};
pub use package::{EffectivePackage, Package, PackageBase};
pub use parser::{ParseOptions, UnknownKeys};
pub use srcinfo::Srcinfo;
pub use value::ArchDistroValue;

/// Parse `.SRCINFO` text. See [`Srcinfo::parse`].
pub fn parse(input: &str) -> Result<Srcinfo> {
    Srcinfo::parse(input)
}

/// Read and parse a `.SRCINFO` file. See [`Srcinfo::from_file`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<Srcinfo> {
    Srcinfo::from_file(path)
}
