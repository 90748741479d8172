use std::collections::HashSet;

use tracing::{debug, trace, warn};

use crate::arch::{split_key, ANY_ARCH};
use crate::error::{Error, LineError, Result};
use crate::field::{Field, Slot};
use crate::line::Line;
use crate::package::{Package, PackageBase};
use crate::srcinfo::Srcinfo;
use crate::value::ArchDistroValue;

/// What to do with keys that are not `.SRCINFO` fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnknownKeys {
    /// Fail the parse with [`LineError::UnknownKey`].
    #[default]
    Reject,
    /// Drop the line and carry on.
    Ignore,
}

/// Parser configuration.
///
/// # Examples
///
/// ```
/// use srcinfo::{ParseOptions, Srcinfo};
///
/// let input = "\
/// pkgbase = foo
/// pkgver = 1
/// makedepends_debian = gcc
/// noautodeps = true
/// pkgname = foo
/// ";
/// assert!(Srcinfo::parse(input).is_err());
/// assert!(Srcinfo::parse_with(input, &ParseOptions::lenient()).is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Handling of unrecognised keys.
    pub unknown_keys: UnknownKeys,
}

impl ParseOptions {
    /// Options that drop unrecognised keys instead of failing.
    pub fn lenient() -> Self {
        ParseOptions {
            unknown_keys: UnknownKeys::Ignore,
        }
    }

    /// Set the handling of unrecognised keys.
    pub fn unknown_keys(mut self, unknown_keys: UnknownKeys) -> Self {
        self.unknown_keys = unknown_keys;
        self
    }
}

/// Single-pass builder state for one parse.
struct Parser<'o> {
    options: &'o ParseOptions,
    base: PackageBase,
    global: Package,
    packages: Vec<Package>,
    seen_pkgnames: HashSet<String>,
}

impl<'o> Parser<'o> {
    fn new(options: &'o ParseOptions) -> Self {
        Parser {
            options,
            base: PackageBase::default(),
            global: Package::default(),
            packages: Vec::new(),
            seen_pkgnames: HashSet::new(),
        }
    }

    fn seen_pkgbase(&self) -> bool {
        !self.base.pkgbase.is_empty()
    }

    fn in_package_section(&self) -> bool {
        !self.packages.is_empty()
    }

    fn set_header_or_field(&mut self, key: &str, value: &str) -> std::result::Result<(), LineError> {
        match key {
            // An empty pkgbase leaves the document without one.
            "pkgbase" => {
                if self.seen_pkgbase() {
                    return Err(LineError::DuplicatePkgbase);
                }
                self.base.pkgbase = value.to_string();
                Ok(())
            }
            "pkgname" => {
                if !self.seen_pkgbase() {
                    return Err(LineError::PkgnameBeforePkgbase);
                }
                if value.is_empty() {
                    return Err(LineError::EmptyPkgname);
                }
                if !self.seen_pkgnames.insert(value.to_string()) {
                    return Err(LineError::DuplicatePkgname(value.to_string()));
                }
                debug!(pkgname = value, "opening package section");
                self.packages.push(Package::named(value));
                Ok(())
            }
            _ => {
                if !self.seen_pkgbase() {
                    return Err(LineError::FieldBeforePkgbase(key.to_string()));
                }
                self.set_field(key, value)
            }
        }
    }

    fn set_field(&mut self, raw_key: &str, value: &str) -> std::result::Result<(), LineError> {
        let split = split_key(&self.global.arch, raw_key)?;

        // Arch independent fields never carry qualifiers, so they match on
        // the key as written. Arch dependent ones match on the bare name.
        let field = match Field::from_name(raw_key) {
            Some(field) if !field.kind().is_arch_dependent() => Some(field),
            _ => Field::from_name(split.name).filter(|f| f.kind().is_arch_dependent()),
        };

        let Some(field) = field else {
            return match self.options.unknown_keys {
                UnknownKeys::Reject => Err(LineError::UnknownKey(raw_key.to_string())),
                UnknownKeys::Ignore => {
                    warn!(key = raw_key, "ignoring unknown key");
                    Ok(())
                }
            };
        };

        if field.kind().is_base() && self.in_package_section() {
            return Err(LineError::BaseFieldAfterPkgname(raw_key.to_string()));
        }

        trace!(key = raw_key, %field, value, "routing field");

        let value = value.to_string();
        let pkg = match self.packages.last_mut() {
            Some(pkg) => pkg,
            None => &mut self.global,
        };
        match field.slot(&mut self.base, pkg) {
            Slot::BaseScalar(scalar) => *scalar = value,
            Slot::PackageScalar(scalar) => *scalar = Some(value),
            Slot::BaseList(list) | Slot::PackageList(list) => list.push(value),
            Slot::BaseArchList(list) | Slot::PackageArchList(list) => list.push(ArchDistroValue {
                arch: split.arch.map(str::to_string),
                distro: split.distro.map(str::to_string),
                value,
            }),
        }

        Ok(())
    }

    /// Check required fields and fill in defaults.
    fn finish(mut self) -> Result<Srcinfo> {
        if !self.seen_pkgbase() {
            return Err(Error::MissingField("pkgbase"));
        }
        if self.packages.is_empty() {
            return Err(Error::MissingField("pkgname"));
        }
        if self.base.pkgver.is_empty() {
            return Err(Error::MissingField("pkgver"));
        }
        if self.base.pkgrel.is_empty() {
            debug!("no pkgrel, defaulting to 1");
            self.base.pkgrel = "1".to_string();
        }
        if self.global.arch.is_empty() {
            debug!("no arch, defaulting to {ANY_ARCH}");
            self.global.arch = vec![ANY_ARCH.to_string()];
        }

        Ok(Srcinfo {
            base: self.base,
            global: self.global,
            packages: self.packages,
        })
    }
}

/// Parse `.SRCINFO` text, stopping at the first error.
pub(crate) fn parse(input: &str, options: &ParseOptions) -> Result<Srcinfo> {
    debug!(bytes = input.len(), ?options, "parsing srcinfo");
    let mut parser = Parser::new(options);

    for (n, line) in input.lines().enumerate() {
        let text = line.trim();
        let applied = Line::parse(text).and_then(|line| match line {
            Line::Skip => Ok(()),
            Line::Pair { key, value } => parser.set_header_or_field(key, value),
        });

        if let Err(kind) = applied {
            return Err(Error::Line {
                line: n + 1,
                text: text.to_string(),
                kind,
            });
        }
    }

    let srcinfo = parser.finish()?;
    debug!(
        pkgbase = %srcinfo.base.pkgbase,
        packages = srcinfo.packages.len(),
        "parsed srcinfo"
    );
    Ok(srcinfo)
}
