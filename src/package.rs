use crate::value::ArchDistroValue;

/// Fields that exist once per package base and can not be overridden by a
/// split package.
///
/// These are only valid before the first `pkgname` line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackageBase {
    /// Name of the package base (`pkgbase`).
    pub pkgbase: String,
    /// Upstream version (`pkgver`).
    pub pkgver: String,
    /// Package release (`pkgrel`), `"1"` when not given.
    pub pkgrel: String,
    /// Epoch, empty when not given.
    pub epoch: String,
    /// Pacstall `mask` entries.
    pub mask: Vec<String>,
    /// Pacstall `compatible` entries.
    pub compatible: Vec<String>,
    /// Pacstall `incompatible` entries.
    pub incompatible: Vec<String>,
    /// Maintainers.
    pub maintainer: Vec<String>,
    /// Source files that are not extracted.
    pub noextract: Vec<String>,
    /// Git sources whose submodules are not fetched.
    pub nosubmodules: Vec<String>,
    /// PGP key fingerprints trusted for source signatures.
    pub validpgpkeys: Vec<String>,
    /// Source URLs.
    pub source: Vec<ArchDistroValue>,
    /// MD5 checksums.
    pub md5sums: Vec<ArchDistroValue>,
    /// SHA-1 checksums.
    pub sha1sums: Vec<ArchDistroValue>,
    /// SHA-224 checksums.
    pub sha224sums: Vec<ArchDistroValue>,
    /// SHA-256 checksums.
    pub sha256sums: Vec<ArchDistroValue>,
    /// SHA-384 checksums.
    pub sha384sums: Vec<ArchDistroValue>,
    /// SHA-512 checksums.
    pub sha512sums: Vec<ArchDistroValue>,
    /// BLAKE2 checksums.
    pub b2sums: Vec<ArchDistroValue>,
    /// Build-time dependencies.
    pub makedepends: Vec<ArchDistroValue>,
    /// Build-time conflicts.
    pub makeconflicts: Vec<ArchDistroValue>,
}

/// Fields that a split package may override.
///
/// The same shape is used twice: once for the global values declared
/// before the first `pkgname`, and once per split package holding only what
/// that package declares itself. A split package record is sparse: a
/// `None` scalar or an empty list means "inherit", while `Some("")` or an
/// empty element means the field was explicitly cleared.
///
/// Use [`Srcinfo::split_package`](crate::Srcinfo::split_package) to get the
/// merged view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    /// Package name. Empty for the global record.
    pub pkgname: String,
    /// Description.
    pub pkgdesc: Option<String>,
    /// Upstream URL.
    pub url: Option<String>,
    /// Pacstall priority.
    pub priority: Option<String>,
    /// Install script.
    pub install: Option<String>,
    /// Changelog file.
    pub changelog: Option<String>,
    /// Architectures. On the global record this is the declared set.
    pub arch: Vec<String>,
    /// Package groups.
    pub groups: Vec<String>,
    /// Licenses.
    pub license: Vec<String>,
    /// makepkg options.
    pub options: Vec<String>,
    /// Files preserved on upgrade.
    pub backup: Vec<String>,
    /// Repology lookup hints.
    pub repology: Vec<String>,
    /// Pacstall `gives`.
    pub gives: Vec<ArchDistroValue>,
    /// Runtime dependencies.
    pub depends: Vec<ArchDistroValue>,
    /// Test dependencies.
    pub checkdepends: Vec<ArchDistroValue>,
    /// Optional dependencies.
    pub optdepends: Vec<ArchDistroValue>,
    /// Pacstall packages to install first.
    pub pacdeps: Vec<ArchDistroValue>,
    /// Test-time conflicts.
    pub checkconflicts: Vec<ArchDistroValue>,
    /// Conflicting packages.
    pub conflicts: Vec<ArchDistroValue>,
    /// Virtual packages provided.
    pub provides: Vec<ArchDistroValue>,
    /// Packages broken by this one.
    pub breaks: Vec<ArchDistroValue>,
    /// Packages replaced by this one.
    pub replaces: Vec<ArchDistroValue>,
    /// Packages enhanced by this one.
    pub enhances: Vec<ArchDistroValue>,
    /// Recommended packages.
    pub recommends: Vec<ArchDistroValue>,
    /// Suggested packages.
    pub suggests: Vec<ArchDistroValue>,
}

impl Package {
    /// An empty override record for `pkgname`.
    pub fn named(pkgname: impl Into<String>) -> Self {
        Package {
            pkgname: pkgname.into(),
            ..Package::default()
        }
    }
}

/// A split package with every inherited field resolved.
///
/// Empty overrides have been applied: cleared scalars are empty strings and
/// cleared list entries are gone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectivePackage {
    /// Package name.
    pub pkgname: String,
    /// Description, empty when unset or cleared.
    pub pkgdesc: String,
    /// Upstream URL.
    pub url: String,
    /// Pacstall priority.
    pub priority: String,
    /// Install script.
    pub install: String,
    /// Changelog file.
    pub changelog: String,
    /// Architectures the package is built for.
    pub arch: Vec<String>,
    /// Package groups.
    pub groups: Vec<String>,
    /// Licenses.
    pub license: Vec<String>,
    /// makepkg options.
    pub options: Vec<String>,
    /// Files preserved on upgrade.
    pub backup: Vec<String>,
    /// Repology lookup hints.
    pub repology: Vec<String>,
    /// Pacstall `gives`.
    pub gives: Vec<ArchDistroValue>,
    /// Runtime dependencies.
    pub depends: Vec<ArchDistroValue>,
    /// Test dependencies.
    pub checkdepends: Vec<ArchDistroValue>,
    /// Optional dependencies.
    pub optdepends: Vec<ArchDistroValue>,
    /// Pacstall packages to install first.
    pub pacdeps: Vec<ArchDistroValue>,
    /// Test-time conflicts.
    pub checkconflicts: Vec<ArchDistroValue>,
    /// Conflicting packages.
    pub conflicts: Vec<ArchDistroValue>,
    /// Virtual packages provided.
    pub provides: Vec<ArchDistroValue>,
    /// Packages broken by this one.
    pub breaks: Vec<ArchDistroValue>,
    /// Packages replaced by this one.
    pub replaces: Vec<ArchDistroValue>,
    /// Packages enhanced by this one.
    pub enhances: Vec<ArchDistroValue>,
    /// Recommended packages.
    pub recommends: Vec<ArchDistroValue>,
    /// Suggested packages.
    pub suggests: Vec<ArchDistroValue>,
}
